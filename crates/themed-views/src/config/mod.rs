//! View layer configuration.
//!
//! Read once at startup; resolution and rendering never re-read it.

pub(crate) mod loader;

pub use loader::{expand_path, load_from_path};

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{ViewError, ViewResult};

fn default_theme_dir() -> String {
    "themes/".to_string()
}

fn default_base_dir() -> String {
    ".".to_string()
}

fn default_base_views_dir() -> String {
    "views/".to_string()
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_layout() -> String {
    "index".to_string()
}

fn default_template() -> String {
    "index".to_string()
}

fn default_file_extension() -> String {
    "twig".to_string()
}

fn default_true() -> bool {
    true
}

/// Engine options forwarded to Tera.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct EnvironmentConfig {
    /// Escape HTML in `.html`, `.htm`, `.xml` and configured-extension templates.
    #[serde(default = "default_true")]
    pub autoescape: bool,

    /// Re-read the search paths before every render.
    #[serde(default)]
    pub auto_reload: bool,

    /// Debug mode. Implies `auto_reload`.
    #[serde(default)]
    pub debug: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            autoescape: true,
            auto_reload: false,
            debug: false,
        }
    }
}

impl EnvironmentConfig {
    /// Whether templates are reloaded from disk before rendering.
    pub fn reloads(&self) -> bool {
        self.auto_reload || self.debug
    }
}

/// Configuration for theme resolution and rendering.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct ViewsConfig {
    /// Directory holding one sub-directory per theme, relative to `base_dir`.
    ///
    /// The raw value doubles as the marker used to keep theme-managed paths out
    /// of the module path pass, so keep the trailing slash.
    #[serde(default = "default_theme_dir")]
    pub theme_dir: String,

    /// Front-controller directory. Relative `theme_dir`, `base_views_dir` and
    /// `module_locations` entries are resolved against it.
    #[serde(default = "default_base_dir")]
    pub base_dir: String,

    /// Application views directory, always searched last. Relative to `base_dir`
    /// unless absolute.
    #[serde(default = "default_base_views_dir")]
    pub base_views_dir: String,

    /// Theme bound at construction.
    #[serde(default = "default_theme")]
    pub default_theme: String,

    /// Layout applied at construction.
    #[serde(default = "default_layout")]
    pub default_layout: String,

    /// Template rendered when none is named.
    #[serde(default = "default_template")]
    pub default_template: String,

    /// Extension of template files, without the dot.
    #[serde(default = "default_file_extension")]
    pub file_extension: String,

    /// Base directories that contain `<module>/views/` directories, relative to
    /// `base_dir` unless absolute.
    #[serde(default)]
    pub module_locations: Vec<String>,

    /// Helper functions to expose to templates (see [`crate::helpers::catalog`]).
    #[serde(default)]
    pub functions: Vec<String>,

    #[serde(default)]
    pub environment: EnvironmentConfig,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            theme_dir: default_theme_dir(),
            base_dir: default_base_dir(),
            base_views_dir: default_base_views_dir(),
            default_theme: default_theme(),
            default_layout: default_layout(),
            default_template: default_template(),
            file_extension: default_file_extension(),
            module_locations: Vec::new(),
            functions: Vec::new(),
            environment: EnvironmentConfig::default(),
        }
    }
}

impl ViewsConfig {
    /// Load from the first discovered config file, or defaults when none exists.
    pub fn load() -> ViewResult<Self> {
        loader::load_views_config()
    }

    /// Parse configuration from a TOML string and validate it.
    pub fn from_toml(contents: &str) -> ViewResult<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| ViewError::configuration(format!("invalid configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make every later resolution fail.
    pub fn validate(&self) -> ViewResult<()> {
        if self.default_theme.trim().is_empty() {
            return Err(ViewError::configuration("default-theme is empty"));
        }
        if self.file_extension.trim().is_empty() {
            return Err(ViewError::configuration("file-extension is empty"));
        }
        if self.file_extension.starts_with('.') {
            return Err(ViewError::configuration(format!(
                "file-extension '{}' must not start with a dot",
                self.file_extension
            )));
        }
        Ok(())
    }

    /// Absolute-or-relative directory holding the themes.
    pub fn theme_root_dir(&self) -> PathBuf {
        expand_path(&self.base_dir).join(&self.theme_dir)
    }

    /// Application views directory.
    pub fn base_views_path(&self) -> PathBuf {
        expand_path(&self.base_dir).join(expand_path(&self.base_views_dir))
    }

    /// Expanded module locations.
    pub fn module_location_paths(&self) -> Vec<PathBuf> {
        let base = expand_path(&self.base_dir);
        self.module_locations
            .iter()
            .map(|p| base.join(expand_path(p)))
            .collect()
    }

    /// File name of a template including the configured extension.
    pub fn template_file(&self, template: &str) -> String {
        format!("{template}.{}", self.file_extension)
    }
}
