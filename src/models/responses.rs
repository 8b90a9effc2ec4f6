use serde::Serialize;

use crate::engine::Diagnostic;

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub success: bool,
    pub normalized_text: String,
    pub ssml: String,
    pub dfa_info: Vec<Diagnostic>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub language: String,
    pub available_categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizers::Category;

    #[test]
    fn test_normalize_response_shape() {
        let resp = NormalizeResponse {
            success: true,
            normalized_text: "पाँच सौ रुपये".to_string(),
            ssml: "<speak/>".to_string(),
            dfa_info: vec![Diagnostic {
                category: Category::Currency,
                original: "₹500".to_string(),
                states: vec!["START", "CURRENCY_SYMBOL", "INTEGER_PART", "END"],
            }],
        };

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["dfa_info"][0]["category"], "currency");
        assert_eq!(json["dfa_info"][0]["states"][0], "START");
    }
}
