//! disable-autofix - Every discovered lint rule, with auto-fixing turned off.
//!
//! The crate discovers rule providers (the engine's built-in rules and any
//! installed `eslint-plugin-*` packages), wraps every rule so that it still
//! reports problems but never offers a fix, and exposes the result as one
//! flat [`Plugin`] registry keyed by namespaced rule name.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Project settings loading
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Rule model, problems and output formatting
//! - [`registry`] - Provider discovery and the rule registry
//! - [`wrapper`] - The fix-disabling rule wrapper
//!
//! # Example
//!
//! ```
//! use disable_autofix::registry::{BuiltinSource, Discovery};
//!
//! let plugin = Discovery::new().with_source(BuiltinSource::new()).discover().unwrap();
//! let messages = plugin
//!     .check(std::path::Path::new("app.js"), "var x = 1;", &[])
//!     .unwrap();
//!
//! assert_eq!(messages[0].rule_id, "no-var");
//! assert!(messages[0].problem.fix.is_none());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod registry;
pub mod wrapper;

pub use error::{DisableAutofixError, Result};
pub use registry::{Discovery, Plugin};
pub use wrapper::{disable_fix, FixDisabledRule};
