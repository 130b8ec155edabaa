//! Config file discovery and loading for `themed-views.toml`.
//!
//! Checks two locations in precedence order:
//! 1. `./themed-views.toml` (project-local)
//! 2. `~/.config/themed-views.toml` (user-global)
//!
//! A missing file yields defaults. A file that exists but cannot be read or
//! parsed is a [`ViewError::Configuration`], fatal at startup.

use std::path::{Path, PathBuf};

use super::ViewsConfig;
use crate::error::{ViewError, ViewResult};

const CONFIG_FILENAME: &str = "themed-views.toml";
const GLOBAL_CONFIG_DIR: &str = ".config";

/// Load config from the first discovered location, or return defaults.
pub(crate) fn load_views_config() -> ViewResult<ViewsConfig> {
    match find_config_file() {
        Some(path) => load_from_path(&path),
        None => {
            tracing::debug!("No themed-views.toml found, using defaults");
            Ok(ViewsConfig::default())
        }
    }
}

/// Load and validate config from an explicit file.
pub fn load_from_path(path: &Path) -> ViewResult<ViewsConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        tracing::error!(?path, error = %e, "Failed to read views config");
        ViewError::configuration(format!("failed to read {}: {e}", path.display()))
    })?;
    let config = ViewsConfig::from_toml(&contents).map_err(|e| {
        tracing::error!(?path, error = %e, "Failed to parse views config");
        e
    })?;
    tracing::debug!(?path, "Loaded views config");
    Ok(config)
}

/// Search for config file in precedence order.
fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILENAME);
    if local.is_file() {
        return Some(local);
    }

    if let Some(home) = home_dir() {
        let global = home.join(GLOBAL_CONFIG_DIR).join(CONFIG_FILENAME);
        if global.is_file() {
            return Some(global);
        }
    }

    None
}

/// Expand configured paths, resolving `~` to the home directory.
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_expand_path_tilde() {
        let expanded = expand_path("~/sites/blog/themes");
        assert!(expanded.to_str().unwrap().contains("sites/blog/themes"));
        assert!(!expanded.to_str().unwrap().starts_with('~'));
    }

    #[test]
    fn test_expand_path_absolute() {
        let expanded = expand_path("/srv/app/views");
        assert_eq!(expanded, PathBuf::from("/srv/app/views"));
    }

    #[test]
    fn test_expand_path_relative() {
        let expanded = expand_path("./views");
        assert_eq!(expanded, PathBuf::from("./views"));
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "default-theme = \"dark\"\ndefault-layout = \"wide\"\n").unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.default_theme, "dark");
        assert_eq!(config.default_layout, "wide");
    }

    #[test]
    fn test_load_from_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_path(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ViewError::Configuration(_)));
    }

    #[test]
    fn test_load_from_malformed_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "module-locations = \"not-a-list\"\n").unwrap();

        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ViewError::Configuration(_)));
    }
}
