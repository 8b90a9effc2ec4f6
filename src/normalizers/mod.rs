/// Per-category normalizers
///
/// Each normalizer turns a matched token (plus the recognizer's captured
/// fields, when the caller passes them) into spoken-form text using the
/// resource bundle and the numeral converter. Lookup misses never abort a
/// request: the deterministic fallback is to echo the raw symbol or token.
pub mod cardinal;
pub mod currency;
pub mod date;
pub mod named_entity;
pub mod ordinal;
pub mod time;
pub mod unit;

pub use cardinal::CardinalNormalizer;
pub use currency::CurrencyNormalizer;
pub use date::DateNormalizer;
pub use named_entity::NamedEntityNormalizer;
pub use ordinal::OrdinalNormalizer;
pub use time::TimeNormalizer;
pub use unit::UnitNormalizer;
