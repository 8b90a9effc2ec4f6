use serde::Deserialize;

use crate::config::constants::DEFAULT_LANGUAGE;
use crate::recognizers::Category;

#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    pub text: String,
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_categories() -> Vec<Category> {
    vec![Category::Currency, Category::Cardinal]
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}
