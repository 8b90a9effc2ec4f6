/// Named-entity recognizer: exact membership in a set of known titles and
/// abbreviations. Rule-based lookup, not ML NER. The set normally comes
/// from the resource bundle; a built-in default covers bundles that supply
/// none.
use std::collections::HashSet;

use super::labels::{END, ENTITY_MATCH, START};
use super::Trace;

const DEFAULT_ENTITIES: &[&str] = &[
    "डॉ.",
    "डॉ",
    "श्री",
    "श्रीमती",
    "सुश्री",
    "प्रो.",
    "प्रो",
    "मो.",
    "Dr.",
    "Mr.",
    "Mrs.",
    "Ms.",
    "Prof.",
    "Sr.",
    "Jr.",
    "St.",
    "Smt.",
    "Shri",
    "Km.",
    "भा.ज.पा.",
    "कां.",
    "आ.आ.पा.",
    "रा.स्व.सं.",
];

#[derive(Debug, Clone)]
pub struct NamedEntityRecognizer {
    entities: HashSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMatch {
    /// The matched token, verbatim
    pub entity: String,
    pub trace: Trace,
}

impl NamedEntityRecognizer {
    /// Build from bundle-supplied entities, falling back to the default set
    /// when the bundle has none.
    pub fn new<I, S>(known_entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entities: HashSet<String> = known_entities.into_iter().map(Into::into).collect();
        if entities.is_empty() {
            return Self::default();
        }
        NamedEntityRecognizer { entities }
    }

    pub fn recognize(&self, token: &str) -> Option<EntityMatch> {
        if !self.entities.contains(token) {
            return None;
        }
        Some(EntityMatch {
            entity: token.to_string(),
            trace: vec![START, ENTITY_MATCH, END],
        })
    }
}

impl Default for NamedEntityRecognizer {
    fn default() -> Self {
        NamedEntityRecognizer {
            entities: DEFAULT_ENTITIES.iter().map(|e| e.to_string()).collect(),
        }
    }
}
