//! Providers and provider sources.
//!
//! A [`Provider`] is a named bundle of rules. A [`ProviderSource`] is
//! anything that can list the providers available in an environment:
//! the rules embedded in the binary, a packages directory on disk, or a
//! fixed in-memory list.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::lint::Rule;

use super::naming::{namespaced_rule_name, provider_namespace};

/// Rule table of a provider, keyed by short rule name.
pub type RuleTable = BTreeMap<String, Arc<dyn Rule>>;

/// Identity of a provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProviderId {
    /// Rules bundled with the engine itself, registered without namespace.
    Builtin,
    /// An installed package, by raw package id (`scope/name` when scoped).
    Package(String),
}

impl ProviderId {
    /// Create a package provider id.
    pub fn package(raw_id: impl Into<String>) -> Self {
        Self::Package(raw_id.into())
    }

    /// Namespace the provider's rules are registered under.
    pub fn namespace(&self) -> Option<String> {
        match self {
            Self::Builtin => None,
            Self::Package(raw_id) => Some(provider_namespace(raw_id)),
        }
    }

    /// Registry name of one of this provider's rules.
    pub fn qualify(&self, rule: &str) -> String {
        match self.namespace() {
            Some(namespace) => namespaced_rule_name(&namespace, rule),
            None => rule.to_string(),
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "builtin"),
            Self::Package(raw_id) => write!(f, "{}", raw_id),
        }
    }
}

/// A named bundle of rules.
#[derive(Clone)]
pub struct Provider {
    pub id: ProviderId,
    pub rules: RuleTable,
}

impl Provider {
    /// Create a provider with an empty rule table.
    pub fn new(id: ProviderId) -> Self {
        Self {
            id,
            rules: RuleTable::new(),
        }
    }

    /// Create the built-in provider.
    pub fn builtin() -> Self {
        Self::new(ProviderId::Builtin)
    }

    /// Create a package provider.
    pub fn package(raw_id: impl Into<String>) -> Self {
        Self::new(ProviderId::package(raw_id))
    }

    /// Add a rule.
    pub fn with_rule(mut self, name: impl Into<String>, rule: Arc<dyn Rule>) -> Self {
        self.rules.insert(name.into(), rule);
        self
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("id", &self.id)
            .field("rules", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Lists the providers available in an environment.
///
/// Sources must list providers in a stable order so that registries built
/// from the same environment are identical.
pub trait ProviderSource {
    fn providers(&self) -> Result<Vec<Provider>>;
}

impl ProviderSource for Vec<Provider> {
    fn providers(&self) -> Result<Vec<Provider>> {
        Ok(self.clone())
    }
}
