/// Currency recognizer: ₹500, रु500, Rs. 500, INR 500, ₹500.50, ₹1,00,000
///
/// A bare digit sequence also matches, so that plain numbers read as
/// amounts whenever the currency category is active. Grouping commas are
/// stripped before matching. No fields are captured; the normalizer
/// re-parses the token.
use lazy_static::lazy_static;
use regex::Regex;

use super::labels::{CURRENCY_SYMBOL, DECIMAL_PART, DECIMAL_POINT, END, INTEGER_PART, START};
use super::Trace;

lazy_static! {
    static ref SYMBOL_PREFIX: Regex = Regex::new(r"^(?:₹|रु|Rs\.?|INR)\s*").unwrap();
    static ref AMOUNT: Regex = Regex::new(r"^(\d+)(\.\d+)?$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyMatch {
    pub trace: Trace,
}

pub fn recognize(token: &str) -> Option<CurrencyMatch> {
    let clean = token.replace(',', "");

    let (had_symbol, amount_part) = match SYMBOL_PREFIX.find(&clean) {
        Some(m) => (true, &clean[m.end()..]),
        None => (false, clean.as_str()),
    };

    // A bare symbol with no amount is not a currency token
    let caps = AMOUNT.captures(amount_part)?;

    let mut trace = vec![START];
    if had_symbol {
        trace.push(CURRENCY_SYMBOL);
    }
    trace.push(INTEGER_PART);
    if caps.get(2).is_some() {
        trace.push(DECIMAL_POINT);
        trace.push(DECIMAL_PART);
    }
    trace.push(END);

    Some(CurrencyMatch { trace })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupee_symbol() {
        let m = recognize("₹500").unwrap();
        assert_eq!(
            m.trace,
            vec!["START", "CURRENCY_SYMBOL", "INTEGER_PART", "END"]
        );
    }

    #[test]
    fn test_rupee_with_decimal() {
        let m = recognize("₹500.50").unwrap();
        assert_eq!(
            m.trace,
            vec![
                "START",
                "CURRENCY_SYMBOL",
                "INTEGER_PART",
                "DECIMAL_POINT",
                "DECIMAL_PART",
                "END"
            ]
        );
    }

    #[test]
    fn test_abbreviation_markers() {
        assert!(recognize("Rs.500").is_some());
        assert!(recognize("Rs500").is_some());
        assert!(recognize("INR500").is_some());
        assert!(recognize("रु500").is_some());
    }

    #[test]
    fn test_grouping_commas_stripped() {
        assert!(recognize("₹1,00,000").is_some());
    }

    #[test]
    fn test_bare_number_matches() {
        let m = recognize("500").unwrap();
        assert_eq!(m.trace, vec!["START", "INTEGER_PART", "END"]);
    }

    #[test]
    fn test_bare_decimal_matches() {
        let m = recognize("500.50").unwrap();
        assert!(m.trace.contains(&"DECIMAL_PART"));
    }

    #[test]
    fn test_symbol_without_amount_rejected() {
        assert!(recognize("₹").is_none());
        assert!(recognize("Rs.").is_none());
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert!(recognize("₹abc").is_none());
        assert!(recognize("hello").is_none());
    }
}
