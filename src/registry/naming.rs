//! Provider namespaces and registry names.
//!
//! Provider packages follow a naming convention: unscoped packages start
//! with `eslint-plugin-`, scoped packages live under `@scope/` and either
//! are `eslint-plugin` or start with `eslint-plugin-`. The namespace a
//! provider's rules are registered under drops that scaffolding:
//!
//! | package                                 | namespace                  |
//! |-----------------------------------------|----------------------------|
//! | `eslint-plugin-react`                   | `react`                    |
//! | `@angular-eslint/eslint-plugin`         | `@angular-eslint`          |
//! | `@angular-eslint/eslint-plugin-template`| `@angular-eslint/template` |

use regex::Regex;
use std::sync::LazyLock;

/// Prefix every provider package name (or scoped sub-package) starts with.
pub const PROVIDER_PREFIX: &str = "eslint-plugin";

/// Package name of this plugin; never treated as a provider of itself.
pub const SELF_PACKAGE: &str = "eslint-plugin-disable-autofix";

/// Scope of the host engine's own packages.
pub const ENGINE_SCOPE: &str = "@eslint";

/// Scope of type-declaration-only packages.
pub const TYPES_SCOPE: &str = "@types";

static SCOPED_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new("eslint-plugin-?").unwrap());

/// Namespace for a provider's raw package id.
pub fn provider_namespace(raw_id: &str) -> String {
    if raw_id.contains('@') {
        let stripped = SCOPED_PREFIX.replace(raw_id, "");
        let stripped: &str = &stripped;
        stripped.strip_suffix('/').unwrap_or(stripped).to_string()
    } else {
        raw_id
            .strip_prefix("eslint-plugin-")
            .unwrap_or(raw_id)
            .to_string()
    }
}

/// Registry name of a provider rule.
pub fn namespaced_rule_name(namespace: &str, rule: &str) -> String {
    format!("{}/{}", namespace, rule)
}

/// Whether a top-level package directory may hold providers.
///
/// Type-declaration scopes, the engine's own scope and this plugin itself
/// are excluded.
pub fn is_provider_candidate(name: &str) -> bool {
    (name.starts_with(PROVIDER_PREFIX) || is_scope(name))
        && !name.starts_with(TYPES_SCOPE)
        && name != SELF_PACKAGE
        && name != ENGINE_SCOPE
}

/// Whether a package directory name is an organization scope.
pub fn is_scope(name: &str) -> bool {
    name.starts_with('@')
}

/// Whether a directory nested under a scope is a provider.
pub fn is_scoped_provider(name: &str) -> bool {
    name.starts_with(PROVIDER_PREFIX)
}
