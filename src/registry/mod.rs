//! Rule registry for disable-autofix.
//!
//! This module discovers rule providers and builds the flat registry of
//! fix-disabled rules:
//! - Built-in engine rules (embedded in binary), registered by bare name
//! - Provider packages (`<packages_dir>/eslint-plugin-*`, `<packages_dir>/@scope/eslint-plugin*`),
//!   registered as `namespace/rule`
//! - Any other [`ProviderSource`], such as an in-memory provider list
//!
//! # Example
//!
//! ```
//! use disable_autofix::registry::{BuiltinSource, Discovery};
//!
//! let plugin = Discovery::new().with_source(BuiltinSource::new()).discover().unwrap();
//!
//! let rule = plugin.get("no-var").unwrap();
//! assert!(rule.meta().fixable.is_none());
//! ```

pub mod builtin;
pub mod discovery;
pub mod manifest;
pub mod naming;
pub mod packages;
pub mod plugin;
pub mod source;

// Re-exports
pub use builtin::BuiltinSource;
pub use discovery::Discovery;
pub use manifest::{load_manifest, parse_manifest, PluginManifest, MANIFEST_FILE};
pub use naming::{namespaced_rule_name, provider_namespace};
pub use packages::PackageDirSource;
pub use plugin::{Plugin, PluginMeta};
pub use source::{Provider, ProviderId, ProviderSource, RuleTable};
