/// CLI argument parsing and help text

pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!("Vaani Normalization Server v{}", version);
    println!("Text normalization HTTP server for Indian-language TTS frontends");
    println!();
    println!("USAGE:");
    println!("    vaani_server [OPTIONS] [TEXT]");
    println!();
    println!("OPTIONS:");
    println!("    --server              Start HTTP server mode");
    println!("    --port <PORT>         Server port (default: 3000)");
    println!("    --language <TAG>      Language for CLI mode (default: hi-IN)");
    println!("    --categories <LIST>   Comma-separated categories for CLI mode");
    println!("                          (default: all)");
    println!("    -h, --help            Print this help message");
    println!("    -v, --version         Print version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Start HTTP server on default port 3000");
    println!("    vaani_server --server");
    println!();
    println!("    # Start server on custom port");
    println!("    vaani_server --server --port 8080");
    println!();
    println!("    # CLI mode: normalize text and print spoken form + SSML");
    println!("    vaani_server \"मीटिंग 15/08/2025 को 10:30 PM बजे है\"");
    println!();
    println!("    # CLI mode with a restricted category set");
    println!("    vaani_server --categories currency,cardinal \"₹1,50,000 मिले\"");
    println!();
    println!("SERVER ENDPOINTS:");
    println!("    POST   /api/normalize    - Normalize text into spoken form + SSML");
    println!("    GET    /api/health       - Health check");
    println!("    GET    /api/languages    - List available languages");
    println!();
    println!("CATEGORIES:");
    println!("    date, time, currency, unit, ordinal, named_entity, cardinal");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    VAANI_RESOURCE_DIR               - Directory of extra language bundles");
    println!("    REQUEST_TIMEOUT_SECONDS          - Request timeout in seconds (default: 60)");
    println!("    LOG_SLOW_REQUEST_THRESHOLD_MS    - Slow request warning threshold (default: 5000)");
    println!("    RUST_LOG                         - Log level (error/warn/info/debug/trace)");
    println!();
    println!("CONFIGURATION:");
    println!("    Settings can be configured via .env file in the current working directory");
}

pub fn print_version() {
    println!("Vaani Normalization Server v{}", env!("CARGO_PKG_VERSION"));
}
