//! This module aggregates various utility submodules used throughout the application.

/// JSON key/value stores and typed bot settings.
pub mod config;
/// Help text generation for the command tree.
pub mod help;
