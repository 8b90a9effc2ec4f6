/// Integer-to-words conversion for the Indian numbering system
///
/// Scale words go hundred → thousand → lakh (1,00,000) → crore (1,00,00,000),
/// so 12,34,567 reads "twelve lakh thirty-four thousand five hundred
/// sixty-seven" rather than the Western million grouping. All word lookups
/// come from the language resource bundle; a missing entry falls back to the
/// digits themselves so one gap never aborts a whole request.
use std::sync::Arc;

use crate::resources::ResourceBundle;

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;

#[derive(Debug, Clone)]
pub struct NumberToWords {
    bundle: Arc<ResourceBundle>,
}

impl NumberToWords {
    pub fn new(bundle: Arc<ResourceBundle>) -> Self {
        NumberToWords { bundle }
    }

    /// Convert a signed integer to its spoken-word representation
    pub fn convert(&self, number: i64) -> String {
        if number < 0 {
            format!(
                "{} {}",
                self.bundle.numbers.negative,
                self.convert_unsigned(number.unsigned_abs())
            )
        } else {
            self.convert_unsigned(number as u64)
        }
    }

    /// Spoken word for the decimal separator ("point")
    pub fn decimal_word(&self) -> &str {
        &self.bundle.numbers.decimal_point
    }

    fn convert_unsigned(&self, num: u64) -> String {
        if num == 0 {
            return self.ones_word(0);
        }
        if num < 100 {
            return self.below_hundred(num);
        }
        if num < THOUSAND {
            return self.hundreds(num);
        }
        self.scaled(num)
    }

    fn below_hundred(&self, num: u64) -> String {
        if num < 10 {
            return self.ones_word(num);
        }
        if num < 20 {
            return self.tens_word(num);
        }
        let tens_digit = (num / 10) * 10;
        let ones_digit = num % 10;
        if ones_digit == 0 {
            return self.tens_word(tens_digit);
        }
        // Irregular two-digit compounds ("21" etc.) have their own entries
        if let Some(word) = self.bundle.numbers.tens.get(&num.to_string()) {
            return word.clone();
        }
        format!("{} {}", self.tens_word(tens_digit), self.ones_word(ones_digit))
    }

    fn hundreds(&self, num: u64) -> String {
        let hundreds_digit = num / 100;
        let remainder = num % 100;
        let mut result = format!(
            "{} {}",
            self.ones_word(hundreds_digit),
            self.bundle.numbers.scales.hundred
        );
        if remainder > 0 {
            result.push(' ');
            result.push_str(&self.below_hundred(remainder));
        }
        result
    }

    /// Crore → lakh → thousand, first scale whose threshold the value meets
    fn scaled(&self, num: u64) -> String {
        let scales = &self.bundle.numbers.scales;
        let (scale, word) = if num >= CRORE {
            (CRORE, &scales.crore)
        } else if num >= LAKH {
            (LAKH, &scales.lakh)
        } else {
            (THOUSAND, &scales.thousand)
        };

        let quotient = num / scale;
        let remainder = num % scale;
        let mut result = format!("{} {}", self.convert_unsigned(quotient), word);
        if remainder > 0 {
            result.push(' ');
            result.push_str(&self.convert_unsigned(remainder));
        }
        result
    }

    fn ones_word(&self, digit: u64) -> String {
        self.bundle
            .numbers
            .ones
            .get(&digit.to_string())
            .cloned()
            .unwrap_or_else(|| digit.to_string())
    }

    fn tens_word(&self, num: u64) -> String {
        self.bundle
            .numbers
            .tens
            .get(&num.to_string())
            .cloned()
            .unwrap_or_else(|| num.to_string())
    }
}
