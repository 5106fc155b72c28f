/// Command-line parsing and session dispatch
pub mod cli;
/// Defaults and fixed names
pub mod configuration;
/// Error types
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Pipeline progress display
pub mod progress;
