//! Optional module view directories.
//!
//! Applications split into modules keep per-module templates at
//! `<location>/<module>/views/`. When a request is served by a module, those
//! directories join the search path between the theme and the base views.
//! Deployments without modules simply pass no provider.

use std::fmt;
use std::path::PathBuf;

const VIEWS_DIR: &str = "views";

/// Supplies candidate view directories for the active module.
///
/// Candidates need not exist; the resolver drops those that do not.
pub trait ModuleDirectoryProvider: fmt::Debug + Send + Sync {
    fn module_view_dirs(&self) -> Vec<PathBuf>;
}

/// Provider backed by a list of module base locations.
#[derive(Debug, Clone, Default)]
pub struct ModuleLocations {
    locations: Vec<PathBuf>,
    active_module: Option<String>,
}

impl ModuleLocations {
    pub fn new(locations: Vec<PathBuf>) -> Self {
        Self {
            locations,
            active_module: None,
        }
    }

    /// Set the module serving the current request.
    pub fn with_active_module(mut self, module: impl Into<String>) -> Self {
        self.set_active_module(Some(module.into()));
        self
    }

    pub fn set_active_module(&mut self, module: Option<String>) {
        self.active_module = module.filter(|m| !m.trim().is_empty());
    }

    pub fn active_module(&self) -> Option<&str> {
        self.active_module.as_deref()
    }

    pub fn locations(&self) -> &[PathBuf] {
        &self.locations
    }

    /// Names of module directories present under any location, sorted and unique.
    pub fn list_modules(&self) -> Vec<String> {
        let mut names = Vec::new();

        for base in &self.locations {
            let entries = match std::fs::read_dir(base) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::debug!(?base, error = %e, "Cannot read module location");
                    continue;
                }
            };

            for entry in entries.filter_map(Result::ok) {
                let path = entry.path();
                if !path.is_dir() {
                    continue;
                }
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }

        names.sort();
        names.dedup();
        names
    }
}

impl ModuleDirectoryProvider for ModuleLocations {
    fn module_view_dirs(&self) -> Vec<PathBuf> {
        // Only a page served from a module gets extra locations.
        let Some(module) = &self.active_module else {
            return Vec::new();
        };
        self.locations
            .iter()
            .map(|location| location.join(module).join(VIEWS_DIR))
            .collect()
    }
}
