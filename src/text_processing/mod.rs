/// Input text cleanup and tokenization
///
/// Runs before classification: Unicode oddities that would break token
/// matching (non-breaking spaces, soft hyphens, smart quotes) are folded to
/// their plain equivalents and the text is NFC-normalized, then split on
/// whitespace into the word tokens the cascade classifies.
use unicode_normalization::UnicodeNormalization;

/// Fold TTS-hostile Unicode to plain forms and apply NFC
pub fn normalize_unicode(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            // Double quotes
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' => cleaned.push('"'),
            // Single quotes
            '\u{2018}' | '\u{2019}' | '\u{02BC}' => cleaned.push('\''),
            // En/em dashes
            '\u{2013}' | '\u{2014}' => cleaned.push('-'),
            // Non-breaking space
            '\u{00A0}' => cleaned.push(' '),
            // Soft hyphen: drop
            '\u{00AD}' => continue,
            _ => cleaned.push(ch),
        }
    }

    cleaned.nfc().collect()
}

/// Split into whitespace-delimited word tokens
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
