//! Registry construction from provider sources.
//!
//! Sources are consulted in the order they were added, providers in the
//! order each source lists them. Every rule is wrapped with
//! [`disable_fix`] and inserted under its registry name; a later provider
//! producing an existing name replaces the earlier entry.
//!
//! Any source error aborts the whole build. No partial registry is ever
//! returned.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use crate::config::Settings;
use crate::error::Result;
use crate::lint::Rule;
use crate::wrapper::disable_fix;

use super::builtin::BuiltinSource;
use super::packages::PackageDirSource;
use super::plugin::Plugin;
use super::source::ProviderSource;

/// Builds a [`Plugin`] from an ordered list of provider sources.
#[derive(Default)]
pub struct Discovery {
    sources: Vec<Box<dyn ProviderSource>>,
}

impl Discovery {
    /// Create a discovery with no sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source.
    pub fn with_source(mut self, source: impl ProviderSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Built-in rules followed by the packages installed for a project.
    pub fn for_project(project_root: &Path, settings: &Settings) -> Self {
        let mut discovery = Self::new();
        if settings.builtins {
            discovery = discovery.with_source(BuiltinSource::new());
        }
        let packages = PackageDirSource::new(project_root.join(&settings.packages_dir))
            .with_exclusions(settings.exclude.iter().cloned());
        discovery.with_source(packages)
    }

    /// Number of configured sources.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Build the registry.
    pub fn discover(&self) -> Result<Plugin> {
        let mut rules: BTreeMap<String, Arc<dyn Rule>> = BTreeMap::new();
        let mut provider_count = 0;

        for source in &self.sources {
            for provider in source.providers()? {
                provider_count += 1;
                for (short_name, rule) in &provider.rules {
                    let name = provider.id.qualify(short_name);
                    tracing::debug!("Wrapping rule {} from {}", name, provider.id);
                    if rules.insert(name.clone(), disable_fix(rule.clone())).is_some() {
                        tracing::warn!(
                            "Rule '{}' from {} replaces an earlier registration",
                            name,
                            provider.id
                        );
                    }
                }
            }
        }

        tracing::info!(
            "Registered {} rules from {} providers",
            rules.len(),
            provider_count
        );
        Ok(Plugin::new(rules))
    }
}
