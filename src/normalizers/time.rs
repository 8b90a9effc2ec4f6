/// Time normalizer: 10:30 → दस बजकर तीस मिनट, 10:00 → दस बजे
///
/// A resolved meridiem prepends a time-of-day word: AM is always morning;
/// PM picks afternoon, evening, or night by hour band.
use std::sync::Arc;

use crate::numerals::NumberToWords;
use crate::recognizers::time::{self, Meridiem};
use crate::resources::ResourceBundle;

#[derive(Debug, Clone)]
pub struct TimeNormalizer {
    bundle: Arc<ResourceBundle>,
    converter: NumberToWords,
}

impl TimeNormalizer {
    pub fn new(bundle: Arc<ResourceBundle>) -> Self {
        TimeNormalizer {
            converter: NumberToWords::new(bundle.clone()),
            bundle,
        }
    }

    /// Re-derive the fields from the token when the caller has none
    pub fn normalize(&self, token: &str) -> String {
        match time::recognize(token) {
            Some(m) => self.normalize_parts(m.hour, m.minute, m.second, m.period),
            None => token.to_string(),
        }
    }

    pub fn normalize_parts(
        &self,
        hour: u32,
        minute: u32,
        second: Option<u32>,
        period: Option<Meridiem>,
    ) -> String {
        let words = &self.bundle.time;
        let hour_words = self.converter.convert(hour as i64);

        let mut result = if minute == 0 && second.is_none() {
            format!("{} {}", hour_words, words.hour_marker)
        } else {
            format!(
                "{} {} {} {}",
                hour_words,
                words.hour_minute_connector,
                self.converter.convert(minute as i64),
                words.minute_word
            )
        };

        if let Some(s) = second {
            if s > 0 {
                result.push(' ');
                result.push_str(&self.converter.convert(s as i64));
                result.push(' ');
                result.push_str(&words.second_word);
            }
        }

        if let Some(p) = period {
            result = format!("{} {}", self.period_prefix(p, hour), result);
        }

        result
    }

    fn period_prefix(&self, period: Meridiem, hour: u32) -> String {
        let periods = &self.bundle.time.periods;
        let (key, fallback) = match period {
            Meridiem::Am => ("AM", "सुबह"),
            Meridiem::Pm => {
                if hour < 4 || hour == 12 {
                    ("PM_afternoon", "दोपहर")
                } else if hour < 7 {
                    ("PM_evening", "शाम")
                } else {
                    ("PM_night", "रात")
                }
            }
        };
        periods
            .get(key)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }
}
