/// Cardinal normalizer: 123 → एक सौ तेईस
use std::sync::Arc;

use crate::numerals::NumberToWords;
use crate::resources::ResourceBundle;

#[derive(Debug, Clone)]
pub struct CardinalNormalizer {
    converter: NumberToWords,
}

impl CardinalNormalizer {
    pub fn new(bundle: Arc<ResourceBundle>) -> Self {
        CardinalNormalizer {
            converter: NumberToWords::new(bundle),
        }
    }

    pub fn normalize(&self, token: &str) -> String {
        match token.parse::<i64>() {
            Ok(value) => self.converter.convert(value),
            // Overflowing digit strings pass through unchanged
            Err(_) => token.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources;

    fn normalizer() -> CardinalNormalizer {
        CardinalNormalizer::new(Arc::new(resources::load("hi-IN").unwrap()))
    }

    #[test]
    fn test_basic_cardinal() {
        assert_eq!(normalizer().normalize("123"), "एक सौ तेईस");
    }

    #[test]
    fn test_twenty_five() {
        assert_eq!(normalizer().normalize("25"), "पच्चीस");
    }

    #[test]
    fn test_overflowing_number_echoed() {
        let huge = "9".repeat(40);
        assert_eq!(normalizer().normalize(&huge), huge);
    }
}
