/// Normalization engine
///
/// Coordinates the classification cascade: each whitespace token is offered
/// to the recognizers in fixed priority order, the first match's normalizer
/// produces the spoken form, and the annotated token stream feeds the SSML
/// generator. Single-pass, left to right, no backtracking; a token consumed
/// by a match is never revisited.
pub mod cache;

use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::normalizers::{
    CardinalNormalizer, CurrencyNormalizer, DateNormalizer, NamedEntityNormalizer,
    OrdinalNormalizer, TimeNormalizer, UnitNormalizer,
};
use crate::recognizers::named_entity::NamedEntityRecognizer;
use crate::recognizers::{cardinal, currency, date, ordinal, time, unit, Category, Trace};
use crate::resources::{self, ResourceBundle};
use crate::ssml::SsmlGenerator;
use crate::text_processing;

/// Detection priority, highest first. Structurally specific patterns must
/// claim a token before general ones can misread a substring: a date's day
/// component must never be reclassified as a cardinal.
pub const PRIORITY: [Category; 7] = [
    Category::Date,
    Category::Time,
    Category::Currency,
    Category::Unit,
    Category::Ordinal,
    Category::NamedEntity,
    Category::Cardinal,
];

/// One classified unit of input text
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    pub original: String,
    pub normalized: String,
    pub category: Category,
    pub trace: Trace,
}

/// Diagnostic record mirrored into the response; one entry per non-text
/// token, in token order
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub category: Category,
    pub original: String,
    pub states: Trace,
}

#[derive(Debug, Clone)]
pub struct NormalizationOutput {
    pub normalized_text: String,
    pub ssml: String,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct NormalizationEngine {
    language: String,
    named_entity_recognizer: NamedEntityRecognizer,
    currency_normalizer: CurrencyNormalizer,
    cardinal_normalizer: CardinalNormalizer,
    unit_normalizer: UnitNormalizer,
    date_normalizer: DateNormalizer,
    time_normalizer: TimeNormalizer,
    ordinal_normalizer: OrdinalNormalizer,
    named_entity_normalizer: NamedEntityNormalizer,
    ssml_generator: SsmlGenerator,
}

impl NormalizationEngine {
    /// Construct an engine for one language. Pure and side-effect-free, so
    /// racing constructions for the same language are safe to discard.
    pub fn new(language: &str) -> Result<Self> {
        let bundle: Arc<ResourceBundle> = Arc::new(resources::load(language)?);

        let entity_keys: Vec<String> = bundle
            .named_entities
            .abbreviations
            .keys()
            .cloned()
            .collect();

        Ok(NormalizationEngine {
            language: language.to_string(),
            named_entity_recognizer: NamedEntityRecognizer::new(entity_keys),
            currency_normalizer: CurrencyNormalizer::new(bundle.clone()),
            cardinal_normalizer: CardinalNormalizer::new(bundle.clone()),
            unit_normalizer: UnitNormalizer::new(bundle.clone()),
            date_normalizer: DateNormalizer::new(bundle.clone()),
            time_normalizer: TimeNormalizer::new(bundle.clone()),
            ordinal_normalizer: OrdinalNormalizer::new(bundle.clone()),
            named_entity_normalizer: NamedEntityNormalizer::new(bundle),
            ssml_generator: SsmlGenerator::new(language),
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Run the full pipeline: tokenize, classify + normalize, emit SSML.
    ///
    /// `categories` is the active set; recognizers for absent categories
    /// are skipped entirely. A token no active recognizer claims passes
    /// through verbatim as `text`.
    pub fn normalize(&self, text: &str, categories: &[Category]) -> NormalizationOutput {
        let cleaned = text_processing::normalize_unicode(text);
        let words = text_processing::tokenize(&cleaned);

        let mut tokens: Vec<Token> = Vec::with_capacity(words.len());
        let mut diagnostics: Vec<Diagnostic> = Vec::new();

        let mut i = 0;
        while i < words.len() {
            let word = words[i];
            let lookahead = words.get(i + 1).copied();

            let (token, consumed_lookahead) = self.classify(word, lookahead, categories);

            if token.category != Category::Text {
                diagnostics.push(Diagnostic {
                    category: token.category,
                    original: token.original.clone(),
                    states: token.trace.clone(),
                });
            }
            tokens.push(token);

            i += if consumed_lookahead { 2 } else { 1 };
        }

        let normalized_text = tokens
            .iter()
            .map(|t| t.normalized.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let ssml = self.ssml_generator.generate(&tokens);

        tracing::debug!(
            language = %self.language,
            tokens = tokens.len(),
            recognized = diagnostics.len(),
            "normalization complete"
        );

        NormalizationOutput {
            normalized_text,
            ssml,
            diagnostics,
        }
    }

    /// Classify one token against the active categories in priority order.
    ///
    /// Returns the classified token and whether the following word was
    /// consumed (meridiem lookahead).
    fn classify(
        &self,
        word: &str,
        lookahead: Option<&str>,
        categories: &[Category],
    ) -> (Token, bool) {
        for category in PRIORITY {
            if !categories.contains(&category) {
                continue;
            }

            match category {
                Category::Date => {
                    if let Some(m) = date::recognize(word) {
                        let normalized = self.date_normalizer.normalize_match(&m);
                        return (self.token(word, normalized, category, m.trace), false);
                    }
                }
                Category::Time => {
                    if let Some(m) = time::recognize(word) {
                        let mut period = m.period;
                        let mut original = word.to_string();
                        let mut consumed = false;
                        // A meridiem written as its own token merges into
                        // this match
                        if period.is_none() {
                            if let Some(next) = lookahead {
                                if let Some(p) = time::parse_meridiem(next) {
                                    period = Some(p);
                                    original.push(' ');
                                    original.push_str(next);
                                    consumed = true;
                                }
                            }
                        }
                        let normalized = self
                            .time_normalizer
                            .normalize_parts(m.hour, m.minute, m.second, period);
                        return (self.token(&original, normalized, category, m.trace), consumed);
                    }
                }
                Category::Currency => {
                    if let Some(m) = currency::recognize(word) {
                        let normalized = self.currency_normalizer.normalize(word);
                        return (self.token(word, normalized, category, m.trace), false);
                    }
                }
                Category::Unit => {
                    if let Some(m) = unit::recognize(word) {
                        let normalized = self.unit_normalizer.normalize_match(&m);
                        return (self.token(word, normalized, category, m.trace), false);
                    }
                }
                Category::Ordinal => {
                    if let Some(m) = ordinal::recognize(word) {
                        let normalized = self.ordinal_normalizer.normalize_number(&m.number);
                        return (self.token(word, normalized, category, m.trace), false);
                    }
                }
                Category::NamedEntity => {
                    if let Some(m) = self.named_entity_recognizer.recognize(word) {
                        let normalized = self.named_entity_normalizer.normalize(&m.entity);
                        return (self.token(word, normalized, category, m.trace), false);
                    }
                }
                Category::Cardinal => {
                    if let Some(m) = cardinal::recognize(word) {
                        let normalized = self.cardinal_normalizer.normalize(word);
                        return (self.token(word, normalized, category, m.trace), false);
                    }
                }
                Category::Text => unreachable!("Text is not in the priority table"),
            }
        }

        // Nothing claimed the token: pass through verbatim
        (
            Token {
                original: word.to_string(),
                normalized: word.to_string(),
                category: Category::Text,
                trace: Vec::new(),
            },
            false,
        )
    }

    fn token(&self, original: &str, normalized: String, category: Category, trace: Trace) -> Token {
        Token {
            original: original.to_string(),
            normalized,
            category,
            trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Category; 7] = PRIORITY;

    fn engine() -> NormalizationEngine {
        NormalizationEngine::new("hi-IN").unwrap()
    }

    #[test]
    fn test_passthrough_is_identity() {
        let out = engine().normalize("यह एक परीक्षण है", &ALL);
        assert_eq!(out.normalized_text, "यह एक परीक्षण है");
        assert!(out.diagnostics.is_empty());
    }

    #[test]
    fn test_date_outranks_cardinal_and_currency() {
        let out = engine().normalize("15/08/2024", &ALL);
        assert_eq!(out.diagnostics.len(), 1);
        assert_eq!(out.diagnostics[0].category, Category::Date);
        assert_eq!(out.normalized_text, "पंद्रह अगस्त दो हज़ार चौबीस");
    }

    #[test]
    fn test_meridiem_lookahead_merges_tokens() {
        let out = engine().normalize("10:30 PM", &ALL);
        assert_eq!(out.diagnostics.len(), 1);
        assert_eq!(out.diagnostics[0].category, Category::Time);
        assert_eq!(out.diagnostics[0].original, "10:30 PM");
        assert_eq!(out.normalized_text, "रात दस बजकर तीस मिनट");
    }

    #[test]
    fn test_meridiem_lookahead_dotted_form() {
        let out = engine().normalize("10:30 p.m.", &ALL);
        assert_eq!(out.normalized_text, "रात दस बजकर तीस मिनट");
    }

    #[test]
    fn test_non_meridiem_word_not_consumed() {
        let out = engine().normalize("10:30 बजे", &ALL);
        assert_eq!(out.normalized_text, "दस बजकर तीस मिनट बजे");
    }

    #[test]
    fn test_bare_number_is_currency_when_currency_active() {
        let out = engine().normalize("500", &ALL);
        assert_eq!(out.diagnostics[0].category, Category::Currency);
        assert_eq!(out.normalized_text, "पाँच सौ रुपये");
    }

    #[test]
    fn test_bare_number_is_cardinal_without_currency() {
        let out = engine().normalize("500", &[Category::Cardinal]);
        assert_eq!(out.diagnostics[0].category, Category::Cardinal);
        assert_eq!(out.normalized_text, "पाँच सौ");
    }

    #[test]
    fn test_inactive_categories_skipped() {
        let out = engine().normalize("15/08/2024", &[Category::Cardinal]);
        // The date token is not a plain digit sequence, so nothing matches
        assert_eq!(out.normalized_text, "15/08/2024");
        assert!(out.diagnostics.is_empty());
    }

    #[test]
    fn test_mixed_sentence() {
        let out = engine().normalize("डॉ. शर्मा ने ₹500 दिए", &ALL);
        assert_eq!(
            out.normalized_text,
            "डॉक्टर शर्मा ने पाँच सौ रुपये दिए"
        );
        assert_eq!(out.diagnostics.len(), 2);
        assert_eq!(out.diagnostics[0].category, Category::NamedEntity);
        assert_eq!(out.diagnostics[1].category, Category::Currency);
    }

    #[test]
    fn test_diagnostics_in_token_order() {
        let out = engine().normalize("5kg और 10:30 और 3rd", &ALL);
        let cats: Vec<Category> = out.diagnostics.iter().map(|d| d.category).collect();
        assert_eq!(cats, vec![Category::Unit, Category::Time, Category::Ordinal]);
    }

    #[test]
    fn test_ssml_emitted_for_every_run() {
        let out = engine().normalize("₹500", &ALL);
        assert!(out.ssml.contains("<speak"));
        assert!(out.ssml.contains("</speak>"));
    }

    #[test]
    fn test_unknown_language_is_error() {
        assert!(NormalizationEngine::new("xx-YY").is_err());
    }

    #[test]
    fn test_empty_input() {
        let out = engine().normalize("", &ALL);
        assert_eq!(out.normalized_text, "");
        assert!(out.diagnostics.is_empty());
    }
}
