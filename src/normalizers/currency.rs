/// Currency normalizer: ₹500.50 → पाँच सौ रुपये पचास पैसे
///
/// The recognizer captures no fields for currency; the full parse happens
/// here. Major and minor amounts each pick the singular unit word only for
/// an amount of exactly one.
use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::numerals::NumberToWords;
use crate::resources::ResourceBundle;

lazy_static! {
    static ref SYMBOL_PREFIX: Regex = Regex::new(r"^(?:₹|रु|Rs\.?|INR)\s*").unwrap();
}

#[derive(Debug, Clone)]
pub struct CurrencyNormalizer {
    bundle: Arc<ResourceBundle>,
    converter: NumberToWords,
}

impl CurrencyNormalizer {
    pub fn new(bundle: Arc<ResourceBundle>) -> Self {
        CurrencyNormalizer {
            converter: NumberToWords::new(bundle.clone()),
            bundle,
        }
    }

    pub fn normalize(&self, token: &str) -> String {
        let clean = token.replace(',', "");
        let amount = match SYMBOL_PREFIX.find(&clean) {
            Some(m) => &clean[m.end()..],
            None => clean.as_str(),
        };

        let (major_text, minor_text) = match amount.split_once('.') {
            Some((major, minor)) => (major, Some(minor)),
            None => (amount, None),
        };

        let major: i64 = match major_text.parse() {
            Ok(v) => v,
            Err(_) => return token.to_string(),
        };
        let minor: i64 = match minor_text {
            Some(m) if !m.is_empty() => match m.parse() {
                Ok(v) => v,
                Err(_) => return token.to_string(),
            },
            _ => 0,
        };

        let units = &self.bundle.currency;
        let major_unit = if major == 1 {
            &units.main_unit.singular
        } else {
            &units.main_unit.plural
        };

        let mut result = format!("{} {}", self.converter.convert(major), major_unit);

        if minor > 0 {
            let minor_unit = if minor == 1 {
                &units.sub_unit.singular
            } else {
                &units.sub_unit.plural
            };
            result.push(' ');
            result.push_str(&self.converter.convert(minor));
            result.push(' ');
            result.push_str(minor_unit);
        }

        result
    }
}
