/// SSML generation for TTS engines
///
/// Serializes a classified token sequence as Speech Synthesis Markup
/// Language 1.1. Category mapping:
///   currency     → <say-as interpret-as="currency" format="long"> with emphasis
///   cardinal     → <say-as interpret-as="cardinal">
///   unit         → <say-as interpret-as="unit">
///   date         → <say-as interpret-as="date" format="dmy">
///   time         → <say-as interpret-as="time" format="hms24">
///   ordinal      → <say-as interpret-as="ordinal">
///   named_entity → <sub alias="...">
///   text         → plain content
use crate::engine::Token;
use crate::recognizers::Category;

const SSML_VERSION: &str = "1.1";

#[derive(Debug, Clone)]
pub struct SsmlGenerator {
    language: String,
}

impl SsmlGenerator {
    pub fn new(language: &str) -> Self {
        SsmlGenerator {
            language: language.to_string(),
        }
    }

    /// Full standalone SSML document (XML declaration, namespaces, xml:lang)
    pub fn generate(&self, tokens: &[Token]) -> String {
        let mut parts = vec![
            r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string(),
            format!(
                r#"<speak version="{}" xmlns="http://www.w3.org/2001/10/synthesis""#,
                SSML_VERSION
            ),
            r#"        xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#.to_string(),
            r#"        xsi:schemaLocation="http://www.w3.org/2001/10/synthesis"#.to_string(),
            r#"                            http://www.w3.org/TR/speech-synthesis11/synthesis.xsd""#
                .to_string(),
            format!(r#"        xml:lang="{}">"#, escape_attr(&self.language)),
        ];

        for token in tokens {
            let normalized = escape_text(&token.normalized);
            match token.category {
                Category::Currency => {
                    parts.push(r#"  <say-as interpret-as="currency" format="long">"#.to_string());
                    parts.push(format!(
                        r#"    <emphasis level="moderate">{}</emphasis>"#,
                        normalized
                    ));
                    parts.push("  </say-as>".to_string());
                }
                Category::Cardinal | Category::Unit | Category::Ordinal => {
                    parts.push(format!(
                        r#"  <say-as interpret-as="{}">"#,
                        token.category.as_str()
                    ));
                    parts.push(format!("    {}", normalized));
                    parts.push("  </say-as>".to_string());
                }
                Category::Date => {
                    parts.push(r#"  <say-as interpret-as="date" format="dmy">"#.to_string());
                    parts.push(format!("    {}", normalized));
                    parts.push("  </say-as>".to_string());
                }
                Category::Time => {
                    parts.push(r#"  <say-as interpret-as="time" format="hms24">"#.to_string());
                    parts.push(format!("    {}", normalized));
                    parts.push("  </say-as>".to_string());
                }
                Category::NamedEntity => {
                    parts.push(format!(
                        r#"  <sub alias="{}">{}</sub>"#,
                        escape_attr(&token.normalized),
                        escape_text(&token.original)
                    ));
                }
                Category::Text => {
                    parts.push(format!("  {}", normalized));
                }
            }
        }

        parts.push("</speak>".to_string());
        parts.join("\n")
    }

    /// Inline fragment (no XML declaration) for embedding in a larger document
    pub fn generate_inline(&self, tokens: &[Token]) -> String {
        let mut parts = Vec::with_capacity(tokens.len());

        for token in tokens {
            let normalized = escape_text(&token.normalized);
            match token.category {
                Category::Currency | Category::Cardinal | Category::Unit | Category::Ordinal => {
                    parts.push(format!(
                        r#"<say-as interpret-as="{}">{}</say-as>"#,
                        token.category.as_str(),
                        normalized
                    ));
                }
                Category::Date => {
                    parts.push(format!(
                        r#"<say-as interpret-as="date" format="dmy">{}</say-as>"#,
                        normalized
                    ));
                }
                Category::Time => {
                    parts.push(format!(
                        r#"<say-as interpret-as="time">{}</say-as>"#,
                        normalized
                    ));
                }
                Category::NamedEntity => {
                    parts.push(format!(
                        r#"<sub alias="{}">{}</sub>"#,
                        escape_attr(&token.normalized),
                        escape_text(&token.original)
                    ));
                }
                Category::Text => parts.push(normalized),
            }
        }

        parts.join(" ")
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
