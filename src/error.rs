//! Error types for rule discovery.
//!
//! This module defines [`DisableAutofixError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every discovery fault is fatal: callers get an error, never a partial registry
//! - Use `anyhow::Error` (via `DisableAutofixError::Other`) for unexpected errors
//! - Namespace collisions are not errors and never surface here

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for discovery and registry operations.
#[derive(Debug, Error)]
pub enum DisableAutofixError {
    /// The directory providers are installed into does not exist.
    #[error("Packages directory not found: {path}")]
    PackagesDirNotFound { path: PathBuf },

    /// A provider could not be loaded.
    #[error("Failed to load provider '{provider}' from {path}: {message}")]
    ProviderLoad {
        provider: String,
        path: PathBuf,
        message: String,
    },

    /// A provider's rule table is not a mapping of name to rule.
    #[error("Malformed rule table in provider '{provider}': {message}")]
    MalformedRuleTable { provider: String, message: String },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A rule was requested by a name the registry does not contain.
    #[error("Unknown rule: {name}")]
    UnknownRule { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for discovery operations.
pub type Result<T> = std::result::Result<T, DisableAutofixError>;
