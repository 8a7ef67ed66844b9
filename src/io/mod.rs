//! Command line, codec, configuration, and error handling

/// Command-line parsing and command execution
pub mod cli;
/// Constants and size limits
pub mod configuration;
/// Error types shared by every module
pub mod error;
/// Image decoding and encoding
pub mod image;
/// Terminal progress display
pub mod progress;
