use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;

#[derive(Debug)]
pub enum NormalizationError {
    // I/O errors (resource directory access)
    Io(std::io::Error),

    // Resource bundle errors
    UnsupportedLanguage {
        requested: String,
        available: Vec<String>,
    },
    MalformedResourceBundle {
        language: String,
        reason: String,
    },

    // Request validation errors
    InvalidRequest(String),
    EmptyText,
    TextTooLong(usize),

    // Internal errors
    Unknown(String),
}

impl fmt::Display for NormalizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizationError::Io(e) => write!(f, "I/O error: {}", e),
            NormalizationError::UnsupportedLanguage {
                requested,
                available,
            } => write!(
                f,
                "Unsupported language '{}' (available: {})",
                requested,
                available.join(", ")
            ),
            NormalizationError::MalformedResourceBundle { language, reason } => {
                write!(f, "Malformed resource bundle for '{}': {}", language, reason)
            }
            NormalizationError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            NormalizationError::EmptyText => write!(f, "Text cannot be empty"),
            NormalizationError::TextTooLong(len) => write!(
                f,
                "Text too long: {} characters (max {})",
                len,
                crate::config::constants::MAX_TEXT_LENGTH
            ),
            NormalizationError::Unknown(msg) => write!(f, "Unknown error: {}", msg),
        }
    }
}

impl std::error::Error for NormalizationError {}

// Conversions
impl From<std::io::Error> for NormalizationError {
    fn from(err: std::io::Error) -> Self {
        NormalizationError::Io(err)
    }
}

impl From<serde_json::Error> for NormalizationError {
    fn from(err: serde_json::Error) -> Self {
        NormalizationError::Unknown(err.to_string())
    }
}

// Axum integration
impl IntoResponse for NormalizationError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            NormalizationError::EmptyText
            | NormalizationError::TextTooLong(_)
            | NormalizationError::InvalidRequest(_) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "success": false,
                    "error": self.to_string()
                }),
            ),
            NormalizationError::UnsupportedLanguage {
                requested,
                available,
            } => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "success": false,
                    "error": self.to_string(),
                    "requested_language": requested,
                    "available_languages": available
                }),
            ),
            _ => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({
                        "success": false,
                        "error": "Internal server error"
                    }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, NormalizationError>;
