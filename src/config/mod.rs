//! Project configuration for disable-autofix.
//!
//! Settings live in an optional `.disable-autofix.yml` in the project root:
//!
//! ```yaml
//! packages_dir: node_modules
//! builtins: true
//! exclude: []
//! shared_settings: {}
//! rule_options:
//!   react/jsx-key: [{ checkFragmentShorthand: true }]
//! ```
//!
//! # Example
//!
//! ```
//! use disable_autofix::config::load_settings;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".disable-autofix.yml"), "builtins: false").unwrap();
//!
//! let settings = load_settings(temp.path()).unwrap();
//! assert!(!settings.builtins);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{config_path, load_settings, parse_settings, CONFIG_FILE};
pub use schema::{Settings, DEFAULT_PACKAGES_DIR};
