//! Provider discovery in an installed-packages directory.
//!
//! The directory is laid out like `node_modules/`: one directory per
//! package, scoped packages nested one level under `@scope/`. Every level
//! is read in sorted order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DisableAutofixError, Result};

use super::manifest::load_manifest;
use super::naming::{is_provider_candidate, is_scope, is_scoped_provider};
use super::source::{Provider, ProviderId, ProviderSource};

/// Source of providers installed in a packages directory.
#[derive(Debug, Clone)]
pub struct PackageDirSource {
    dir: PathBuf,
    exclude: Vec<String>,
}

impl PackageDirSource {
    /// Discover providers under `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            exclude: Vec::new(),
        }
    }

    /// Skip additional packages by raw id.
    pub fn with_exclusions(mut self, exclude: impl IntoIterator<Item = String>) -> Self {
        self.exclude.extend(exclude);
        self
    }

    /// The packages directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Raw ids of every provider package, in enumeration order.
    pub fn package_ids(&self) -> Result<Vec<String>> {
        if !self.dir.is_dir() {
            return Err(DisableAutofixError::PackagesDirNotFound {
                path: self.dir.clone(),
            });
        }

        let mut ids = Vec::new();
        for name in sorted_dir_names(&self.dir, is_provider_candidate)? {
            if is_scope(&name) {
                for nested in sorted_dir_names(&self.dir.join(&name), is_scoped_provider)? {
                    ids.push(format!("{}/{}", name, nested));
                }
            } else {
                ids.push(name);
            }
        }

        ids.retain(|id| !self.exclude.contains(id));
        Ok(ids)
    }
}

impl ProviderSource for PackageDirSource {
    fn providers(&self) -> Result<Vec<Provider>> {
        let mut providers = Vec::new();
        for raw_id in self.package_ids()? {
            let package_dir = self.dir.join(&raw_id);
            let provider = load_manifest(ProviderId::package(raw_id), &package_dir)?;
            tracing::debug!(
                "Loaded provider {} with {} rules",
                provider.id,
                provider.rules.len()
            );
            providers.push(provider);
        }
        Ok(providers)
    }
}

/// Names of the directories directly under `dir` accepted by `keep`, sorted.
///
/// A directory whose name is not valid UTF-8 but would be kept under its
/// lossy spelling cannot be loaded and fails the listing.
fn sorted_dir_names(dir: &Path, keep: fn(&str) -> bool) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) if keep(&name) => names.push(name),
            Ok(_) => {}
            Err(raw) => {
                let lossy = raw.to_string_lossy().into_owned();
                if keep(&lossy) {
                    return Err(DisableAutofixError::ProviderLoad {
                        provider: lossy,
                        path,
                        message: "package name is not valid UTF-8".to_string(),
                    });
                }
            }
        }
    }
    names.sort();
    Ok(names)
}
