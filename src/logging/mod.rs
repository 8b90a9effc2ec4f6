pub mod middleware;

pub use middleware::{access_log_middleware, request_id_middleware, RequestId};

/// Initialize console logging with environment-variable control.
///
/// Default level is INFO for this crate, WARN for dependencies; override
/// with RUST_LOG (e.g. RUST_LOG=debug).
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vaani_server=info")),
        )
        .with_target(false)
        .compact()
        .init();
}
