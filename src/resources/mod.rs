/// Language resource bundles
///
/// A bundle is a read-only set of lexical lookup tables for one language:
/// numeral words, currency unit names, measurement units, month names,
/// time words, ordinal mappings, and abbreviation expansions. The primary
/// locale ships embedded in the binary; additional languages can be loaded
/// from `{lang}.json` files in the directory named by `VAANI_RESOURCE_DIR`.
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::config::constants::RESOURCE_DIR_ENV;
use crate::error::{NormalizationError, Result};

/// Bundles compiled into the binary, keyed by language identifier
const BUILTIN_BUNDLES: &[(&str, &str)] = &[("hi-IN", include_str!("hi-IN.json"))];

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceBundle {
    pub numbers: NumberTables,
    pub currency: CurrencyWords,
    #[serde(default)]
    pub units: HashMap<String, String>,
    #[serde(default)]
    pub dates: DateWords,
    #[serde(default)]
    pub time: TimeWords,
    #[serde(default)]
    pub ordinals: OrdinalWords,
    #[serde(default)]
    pub named_entities: NamedEntityWords,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NumberTables {
    /// Digit words, keyed "0".."9"
    pub ones: HashMap<String, String>,
    /// Teens, decades, and irregular two-digit compounds, keyed "10".."99"
    pub tens: HashMap<String, String>,
    pub scales: ScaleWords,
    #[serde(default = "default_negative_word")]
    pub negative: String,
    #[serde(default = "default_decimal_word")]
    pub decimal_point: String,
}

fn default_negative_word() -> String {
    "माइनस".to_string()
}

fn default_decimal_word() -> String {
    "दशमलव".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScaleWords {
    pub hundred: String,
    pub thousand: String,
    pub lakh: String,
    pub crore: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyWords {
    pub main_unit: UnitForms,
    pub sub_unit: UnitForms,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnitForms {
    pub singular: String,
    pub plural: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DateWords {
    /// Month names keyed by numeric month without leading zero ("1".."12")
    #[serde(default)]
    pub months: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeWords {
    #[serde(default = "default_hour_marker")]
    pub hour_marker: String,
    #[serde(default = "default_hour_minute_connector")]
    pub hour_minute_connector: String,
    #[serde(default = "default_minute_word")]
    pub minute_word: String,
    #[serde(default = "default_second_word")]
    pub second_word: String,
    /// Keys: AM, PM_afternoon, PM_evening, PM_night
    #[serde(default)]
    pub periods: HashMap<String, String>,
}

fn default_hour_marker() -> String {
    "बजे".to_string()
}

fn default_hour_minute_connector() -> String {
    "बजकर".to_string()
}

fn default_minute_word() -> String {
    "मिनट".to_string()
}

fn default_second_word() -> String {
    "सेकंड".to_string()
}

impl Default for TimeWords {
    fn default() -> Self {
        TimeWords {
            hour_marker: default_hour_marker(),
            hour_minute_connector: default_hour_minute_connector(),
            minute_word: default_minute_word(),
            second_word: default_second_word(),
            periods: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrdinalWords {
    /// Irregular ordinal forms keyed by numeric string ("1" → "पहला")
    #[serde(default)]
    pub mapping: HashMap<String, String>,
    #[serde(default = "default_ordinal_suffix")]
    pub generic_suffix: String,
}

fn default_ordinal_suffix() -> String {
    "वाँ".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedEntityWords {
    #[serde(default)]
    pub abbreviations: HashMap<String, String>,
}

impl ResourceBundle {
    /// Parse and structurally validate a bundle from JSON text
    fn from_json(language: &str, json: &str) -> Result<Self> {
        let bundle: ResourceBundle = serde_json::from_str(json).map_err(|e| {
            NormalizationError::MalformedResourceBundle {
                language: language.to_string(),
                reason: e.to_string(),
            }
        })?;
        bundle.validate(language)?;
        Ok(bundle)
    }

    /// Check that every table the normalizers depend on is complete.
    ///
    /// A bundle failing here is unusable for its language; other languages
    /// are unaffected.
    fn validate(&self, language: &str) -> Result<()> {
        let malformed = |reason: String| NormalizationError::MalformedResourceBundle {
            language: language.to_string(),
            reason,
        };

        for d in 0..=9 {
            if !self.numbers.ones.contains_key(&d.to_string()) {
                return Err(malformed(format!("missing numbers.ones entry for '{}'", d)));
            }
        }
        // Teens and decade words are the minimum; irregular compounds are optional
        for t in (10..=19).chain((20..=90).step_by(10)) {
            if !self.numbers.tens.contains_key(&t.to_string()) {
                return Err(malformed(format!("missing numbers.tens entry for '{}'", t)));
            }
        }
        for m in 1..=12 {
            if !self.dates.months.contains_key(&m.to_string()) {
                return Err(malformed(format!("missing dates.months entry for '{}'", m)));
            }
        }
        Ok(())
    }
}

/// Load the bundle for a language identifier.
///
/// Filesystem bundles (from `VAANI_RESOURCE_DIR`) take precedence over the
/// embedded ones, so deployments can override the shipped tables.
pub fn load(language: &str) -> Result<ResourceBundle> {
    if let Some(path) = resource_file_path(language) {
        if path.is_file() {
            let json = std::fs::read_to_string(&path)?;
            return ResourceBundle::from_json(language, &json);
        }
    }

    if let Some((_, json)) = BUILTIN_BUNDLES.iter().find(|(lang, _)| *lang == language) {
        return ResourceBundle::from_json(language, json);
    }

    Err(NormalizationError::UnsupportedLanguage {
        requested: language.to_string(),
        available: available_languages(),
    })
}

/// All language identifiers a bundle can currently be produced for
pub fn available_languages() -> Vec<String> {
    let mut languages: Vec<String> = BUILTIN_BUNDLES
        .iter()
        .map(|(lang, _)| lang.to_string())
        .collect();

    if let Some(dir) = resource_dir() {
        if let Ok(entries) = std::fs::read_dir(&dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) == Some("json") {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        if !languages.iter().any(|l| l == stem) {
                            languages.push(stem.to_string());
                        }
                    }
                }
            }
        }
    }

    languages.sort();
    languages
}

fn resource_dir() -> Option<PathBuf> {
    std::env::var(RESOURCE_DIR_ENV).ok().map(PathBuf::from)
}

fn resource_file_path(language: &str) -> Option<PathBuf> {
    resource_dir().map(|dir| dir.join(format!("{}.json", language)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_hindi_bundle_loads() {
        let bundle = load("hi-IN").unwrap();
        assert_eq!(bundle.numbers.ones.get("0").unwrap(), "शून्य");
        assert_eq!(bundle.numbers.scales.crore, "करोड़");
        assert_eq!(bundle.currency.main_unit.plural, "रुपये");
    }

    #[test]
    fn test_unknown_language_reports_available() {
        let err = load("xx-YY").unwrap_err();
        match err {
            NormalizationError::UnsupportedLanguage {
                requested,
                available,
            } => {
                assert_eq!(requested, "xx-YY");
                assert!(available.contains(&"hi-IN".to_string()));
            }
            other => panic!("expected UnsupportedLanguage, got {:?}", other),
        }
    }

    #[test]
    fn test_builtin_languages_listed() {
        assert!(available_languages().contains(&"hi-IN".to_string()));
    }

    #[test]
    fn test_bundle_missing_digit_word_rejected() {
        let json = r#"{
            "numbers": {
                "ones": {"0": "शून्य"},
                "tens": {},
                "scales": {"hundred": "सौ", "thousand": "हज़ार", "lakh": "लाख", "crore": "करोड़"}
            },
            "currency": {
                "main_unit": {"singular": "रुपया", "plural": "रुपये"},
                "sub_unit": {"singular": "पैसा", "plural": "पैसे"}
            }
        }"#;
        let err = ResourceBundle::from_json("test", json).unwrap_err();
        match err {
            NormalizationError::MalformedResourceBundle { reason, .. } => {
                assert!(reason.contains("numbers.ones"));
            }
            other => panic!("expected MalformedResourceBundle, got {:?}", other),
        }
    }

    #[test]
    fn test_bundle_missing_table_rejected() {
        let err = ResourceBundle::from_json("test", r#"{"numbers": {}}"#).unwrap_err();
        assert!(matches!(
            err,
            NormalizationError::MalformedResourceBundle { .. }
        ));
    }

    #[test]
    fn test_hindi_month_names_complete() {
        let bundle = load("hi-IN").unwrap();
        assert_eq!(bundle.dates.months.get("8").unwrap(), "अगस्त");
        assert_eq!(bundle.dates.months.len(), 12);
    }
}
