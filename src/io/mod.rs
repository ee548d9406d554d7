/// JSON catalog file loading
pub mod catalog_file;
/// Command-line interface and batch catalog processing
pub mod cli;
/// Constants and generation parameters
pub mod configuration;
/// Error types
pub mod error;
/// Terminal progress display
pub mod progress;
/// Scene renderer collaborators
pub mod renderer;
