/// Date normalizer: 15/08/2024 → पंद्रह अगस्त दो हज़ार चौबीस
///
/// Day and year are read as cardinals; the month becomes its name from the
/// bundle (keyed without a leading zero), falling back to the month number
/// spoken as a cardinal when the name is absent. Two-digit years are
/// interpreted as 20xx.
use std::sync::Arc;

use crate::numerals::NumberToWords;
use crate::recognizers::date::{self, DateMatch};
use crate::resources::ResourceBundle;

#[derive(Debug, Clone)]
pub struct DateNormalizer {
    bundle: Arc<ResourceBundle>,
    converter: NumberToWords,
}

impl DateNormalizer {
    pub fn new(bundle: Arc<ResourceBundle>) -> Self {
        DateNormalizer {
            converter: NumberToWords::new(bundle.clone()),
            bundle,
        }
    }

    /// Re-derive the fields from the token when the caller has none
    pub fn normalize(&self, token: &str) -> String {
        match date::recognize(token) {
            Some(m) => self.normalize_match(&m),
            None => token.to_string(),
        }
    }

    pub fn normalize_match(&self, m: &DateMatch) -> String {
        let day_words = self.converter.convert(m.day as i64);

        let month_key = m.month.to_string();
        let month_name = self
            .bundle
            .dates
            .months
            .get(&month_key)
            .cloned()
            .unwrap_or_else(|| self.converter.convert(m.month as i64));

        let year = if m.year < 100 { m.year + 2000 } else { m.year };
        let year_words = self.converter.convert(year as i64);

        format!("{} {} {}", day_words, month_name, year_words)
    }
}
