//! Rendering, export, command-line handling and error types

/// Command-line parsing and the generation driver
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Raster rendering and PNG export
pub mod image;
/// Progress bar reporting
pub mod progress;
/// ASCII rendering and terminal animation
pub mod render;
/// Generation capture and GIF export
pub mod visualization;
