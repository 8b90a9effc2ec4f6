/// Maximum allowed text length for normalization requests (in characters)
///
/// This limit helps prevent abuse and ensures reasonable response times.
/// Requests exceeding this limit will be rejected with an error.
pub const MAX_TEXT_LENGTH: usize = 10_000;

/// Language used when a request does not specify one
pub const DEFAULT_LANGUAGE: &str = "hi-IN";

/// Environment variable naming a directory of additional `{lang}.json` bundles
pub const RESOURCE_DIR_ENV: &str = "VAANI_RESOURCE_DIR";
