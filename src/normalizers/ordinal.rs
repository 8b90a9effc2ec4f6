/// Ordinal normalizer: 5th → पाँचवाँ, 21st → इक्कीसवाँ
///
/// Irregular forms come straight from the bundle mapping; everything else
/// is the cardinal with the generic ordinal suffix appended (no space).
use std::sync::Arc;

use crate::numerals::NumberToWords;
use crate::recognizers::ordinal;
use crate::resources::ResourceBundle;

#[derive(Debug, Clone)]
pub struct OrdinalNormalizer {
    bundle: Arc<ResourceBundle>,
    converter: NumberToWords,
}

impl OrdinalNormalizer {
    pub fn new(bundle: Arc<ResourceBundle>) -> Self {
        OrdinalNormalizer {
            converter: NumberToWords::new(bundle.clone()),
            bundle,
        }
    }

    /// Re-derive the number from the token when the caller has none
    pub fn normalize(&self, token: &str) -> String {
        match ordinal::recognize(token) {
            Some(m) => self.normalize_number(&m.number),
            None => token.to_string(),
        }
    }

    pub fn normalize_number(&self, number: &str) -> String {
        if let Some(irregular) = self.bundle.ordinals.mapping.get(number) {
            return irregular.clone();
        }
        let value: i64 = match number.parse() {
            Ok(v) => v,
            Err(_) => return number.to_string(),
        };
        format!(
            "{}{}",
            self.converter.convert(value),
            self.bundle.ordinals.generic_suffix
        )
    }
}
