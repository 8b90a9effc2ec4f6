/// Named-entity normalizer: डॉ. → डॉक्टर
///
/// Expands a recognized abbreviation via the bundle map; an entity with no
/// mapping passes through unchanged.
use std::sync::Arc;

use crate::resources::ResourceBundle;

#[derive(Debug, Clone)]
pub struct NamedEntityNormalizer {
    bundle: Arc<ResourceBundle>,
}

impl NamedEntityNormalizer {
    pub fn new(bundle: Arc<ResourceBundle>) -> Self {
        NamedEntityNormalizer { bundle }
    }

    pub fn normalize(&self, token: &str) -> String {
        self.bundle
            .named_entities
            .abbreviations
            .get(token)
            .cloned()
            .unwrap_or_else(|| token.to_string())
    }
}
