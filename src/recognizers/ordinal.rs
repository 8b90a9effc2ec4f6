/// Ordinal recognizer: digits plus a closed suffix set — 1st, 22nd, 3rd,
/// 5th (case-insensitive) and the Devanagari suffixes 1ला, 2रा, 5वाँ.
use lazy_static::lazy_static;
use regex::Regex;

use super::labels::{DIGIT, END, ORDINAL_SUFFIX, START};
use super::Trace;

lazy_static! {
    static ref ORDINAL_REGEX: Regex =
        Regex::new(r"(?i)^(\d+)(st|nd|rd|th|ला|रा|था|वाँ|वां|वीं)$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdinalMatch {
    /// Numeric part as written
    pub number: String,
    /// Suffix exactly as written
    pub suffix: String,
    pub trace: Trace,
}

pub fn recognize(token: &str) -> Option<OrdinalMatch> {
    let caps = ORDINAL_REGEX.captures(token)?;
    Some(OrdinalMatch {
        number: caps[1].to_string(),
        suffix: caps[2].to_string(),
        trace: vec![START, DIGIT, ORDINAL_SUFFIX, END],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_suffixes() {
        assert_eq!(recognize("1st").unwrap().number, "1");
        assert_eq!(recognize("2nd").unwrap().suffix, "nd");
        assert_eq!(recognize("3rd").unwrap().suffix, "rd");
        assert_eq!(recognize("21st").unwrap().number, "21");
    }

    #[test]
    fn test_case_insensitive() {
        assert!(recognize("5TH").is_some());
        assert!(recognize("1St").is_some());
    }

    #[test]
    fn test_devanagari_suffixes() {
        assert_eq!(recognize("3रा").unwrap().suffix, "रा");
        assert_eq!(recognize("5वाँ").unwrap().suffix, "वाँ");
    }

    #[test]
    fn test_bare_number_rejected() {
        assert!(recognize("5").is_none());
    }

    #[test]
    fn test_wrong_suffix_rejected() {
        assert!(recognize("5xx").is_none());
    }

    #[test]
    fn test_trace_labels_verbatim() {
        let m = recognize("5th").unwrap();
        assert_eq!(m.trace, vec!["START", "DIGIT", "ORDINAL_SUFFIX", "END"]);
    }
}
