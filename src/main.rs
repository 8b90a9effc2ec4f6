mod cli;
mod config;
mod engine;
mod error;
mod logging;
mod models;
mod normalizers;
mod numerals;
mod recognizers;
mod resources;
mod server;
mod ssml;
mod text_processing;

use engine::cache::engine_for;
use recognizers::Category;
use server::{create_router, parse_categories, AppState};
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() -> error::Result<()> {
    // Load .env file if it exists (silently ignore if it doesn't)
    let _ = dotenvy::dotenv();

    logging::init_logging();

    let args: Vec<String> = env::args().collect();

    if args.contains(&"--help".to_string()) || args.contains(&"-h".to_string()) {
        cli::print_help();
        return Ok(());
    }

    if args.contains(&"--version".to_string()) || args.contains(&"-v".to_string()) {
        cli::print_version();
        return Ok(());
    }

    let server_mode = args.contains(&"--server".to_string());
    let port = args
        .iter()
        .position(|arg| arg == "--port")
        .and_then(|pos| args.get(pos + 1))
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    if server_mode {
        cli::print_version();
        println!("Starting normalization HTTP server on port {}...", port);

        // Warm the default engine so the first request doesn't pay for
        // bundle parsing and regex compilation
        let default_engine = engine_for(config::constants::DEFAULT_LANGUAGE)?;
        println!("Loaded resource bundle for {}", default_engine.language());

        let request_timeout = load_request_timeout();

        let addr = format!("0.0.0.0:{}", port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        println!("\nServer listening on http://{}", addr);
        println!("\nAvailable endpoints:");
        println!("  POST   /api/normalize    - Normalize text into spoken form + SSML");
        println!("  GET    /api/health       - Health check");
        println!("  GET    /api/languages    - List available languages");
        println!("\nRequest Timeout:");
        println!("  Timeout: {} seconds", request_timeout.as_secs());
        println!("  Configure: REQUEST_TIMEOUT_SECONDS (default: 60)");

        let state = AppState { request_timeout };
        let app = create_router(state);

        axum::serve(listener, app).await?;
    } else {
        // CLI mode - normalize the argv text and print the result
        let (language, categories, text) = parse_cli_args(&args[1..])?;

        if text.trim().is_empty() {
            cli::print_help();
            return Ok(());
        }

        let engine = engine_for(&language)?;
        let output = engine.normalize(&text, &categories);

        println!("{}", output.normalized_text);
        println!();
        println!("{}", output.ssml);

        if !output.diagnostics.is_empty() {
            println!();
            println!("Recognized tokens:");
            for diag in &output.diagnostics {
                println!(
                    "  {:12} \"{}\" [{}]",
                    diag.category.to_string(),
                    diag.original,
                    diag.states.join(" -> ")
                );
            }
        }
    }

    Ok(())
}

/// Split CLI-mode arguments into language, category set, and input text
fn parse_cli_args(args: &[String]) -> error::Result<(String, Vec<Category>, String)> {
    let mut language = config::constants::DEFAULT_LANGUAGE.to_string();
    let mut categories = engine::PRIORITY.to_vec();
    let mut text_parts: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--language" => {
                if let Some(tag) = args.get(i + 1) {
                    language = tag.clone();
                    i += 2;
                } else {
                    return Err(error::NormalizationError::InvalidRequest(
                        "--language requires a value".to_string(),
                    ));
                }
            }
            "--categories" => {
                if let Some(list) = args.get(i + 1) {
                    let names: Vec<String> =
                        list.split(',').map(|s| s.trim().to_string()).collect();
                    categories = parse_categories(&names)?;
                    i += 2;
                } else {
                    return Err(error::NormalizationError::InvalidRequest(
                        "--categories requires a value".to_string(),
                    ));
                }
            }
            other => {
                text_parts.push(other.to_string());
                i += 1;
            }
        }
    }

    Ok((language, categories, text_parts.join(" ")))
}

/// Load request timeout configuration from environment variable
fn load_request_timeout() -> Duration {
    let timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60);

    Duration::from_secs(timeout_seconds)
}
