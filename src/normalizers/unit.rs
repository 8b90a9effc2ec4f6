/// Unit normalizer: 5kg → पाँच किलोग्राम, 2.5km → दो दशमलव पाँच किलोमीटर
///
/// A decimal number is spoken as integer part, the decimal-point word, then
/// the fractional digits as one integer group. An unmapped unit symbol is
/// spoken as written.
use std::sync::Arc;

use crate::numerals::NumberToWords;
use crate::recognizers::unit::{self, UnitMatch};
use crate::resources::ResourceBundle;

#[derive(Debug, Clone)]
pub struct UnitNormalizer {
    bundle: Arc<ResourceBundle>,
    converter: NumberToWords,
}

impl UnitNormalizer {
    pub fn new(bundle: Arc<ResourceBundle>) -> Self {
        UnitNormalizer {
            converter: NumberToWords::new(bundle.clone()),
            bundle,
        }
    }

    /// Re-derive the fields from the token when the caller has none
    pub fn normalize(&self, token: &str) -> String {
        match unit::recognize(token) {
            Some(m) => self.normalize_match(&m),
            None => token.to_string(),
        }
    }

    pub fn normalize_match(&self, m: &UnitMatch) -> String {
        let number_words = self.number_words(&m.number);
        let unit_name = self
            .bundle
            .units
            .get(&m.unit)
            .cloned()
            .unwrap_or_else(|| m.unit.clone());
        format!("{} {}", number_words, unit_name)
    }

    fn number_words(&self, number: &str) -> String {
        if let Some((int_part, dec_part)) = number.split_once('.') {
            let int_value: i64 = int_part.parse().unwrap_or(0);
            let dec_value: i64 = dec_part.parse().unwrap_or(0);
            format!(
                "{} {} {}",
                self.converter.convert(int_value),
                self.converter.decimal_word(),
                self.converter.convert(dec_value)
            )
        } else {
            match number.parse::<i64>() {
                Ok(v) => self.converter.convert(v),
                Err(_) => number.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources;

    fn normalizer() -> UnitNormalizer {
        UnitNormalizer::new(Arc::new(resources::load("hi-IN").unwrap()))
    }

    #[test]
    fn test_mass() {
        assert_eq!(normalizer().normalize("5kg"), "पाँच किलोग्राम");
    }

    #[test]
    fn test_decimal_quantity() {
        assert_eq!(normalizer().normalize("2.5km"), "दो दशमलव पाँच किलोमीटर");
    }

    #[test]
    fn test_temperature() {
        assert_eq!(normalizer().normalize("25°C"), "पच्चीस डिग्री सेल्सियस");
    }

    #[test]
    fn test_devanagari_symbol() {
        assert_eq!(normalizer().normalize("3किमी"), "तीन किलोमीटर");
    }

    #[test]
    fn test_unmapped_symbol_spoken_as_written() {
        use crate::recognizers::unit::UnitMatch;
        let m = UnitMatch {
            number: "5".to_string(),
            unit: "zz".to_string(),
            trace: vec![],
        };
        assert_eq!(normalizer().normalize_match(&m), "पाँच zz");
    }

    #[test]
    fn test_unmatched_token_echoed() {
        assert_eq!(normalizer().normalize("hello"), "hello");
    }
}
