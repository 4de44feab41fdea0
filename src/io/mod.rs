//! Command-line surface, configuration, errors and file export

/// Command-line parsing and run orchestration
pub mod cli;
/// Default limits and export settings
pub mod configuration;
/// Error types
pub mod error;
/// Page rasterisation and PNG export
pub mod image;
/// Bitmap lettering for page labels
pub mod label;
/// Logger initialisation
pub mod logging;
/// Page export progress display
pub mod progress;
/// Vector outline export
pub mod svg;
