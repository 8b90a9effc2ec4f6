/// Cardinal recognizer: a token that is digits and nothing else.
///
/// Lowest-priority recognizer; one DIGIT label is reported per digit
/// consumed.
use super::labels::{DIGIT, END, START};
use super::Trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardinalMatch {
    pub trace: Trace,
}

pub fn recognize(token: &str) -> Option<CardinalMatch> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let mut trace = Vec::with_capacity(token.len() + 2);
    trace.push(START);
    for _ in token.chars() {
        trace.push(DIGIT);
    }
    trace.push(END);

    Some(CardinalMatch { trace })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_sequence_matches() {
        assert!(recognize("123").is_some());
        assert!(recognize("5000000").is_some());
    }

    #[test]
    fn test_one_digit_label_per_digit() {
        let m = recognize("123").unwrap();
        assert_eq!(m.trace, vec!["START", "DIGIT", "DIGIT", "DIGIT", "END"]);
    }

    #[test]
    fn test_non_digits_rejected() {
        assert!(recognize("12a").is_none());
        assert!(recognize("12.5").is_none());
        assert!(recognize("").is_none());
    }

    #[test]
    fn test_devanagari_digits_rejected() {
        // Only ASCII digits form cardinals
        assert!(recognize("१२३").is_none());
    }
}
