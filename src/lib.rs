// Library modules for integration tests
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod models;
pub mod normalizers;
pub mod numerals;
pub mod recognizers;
pub mod resources;
pub mod server;
pub mod ssml;
pub mod text_processing;
