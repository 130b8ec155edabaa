//! Theme path resolution.
//!
//! Builds the ordered template search path for a theme:
//!
//! 1. `<theme root>/<theme>` (always first)
//! 2. existing module view directories, minus anything under the theme marker
//! 3. the application's base views directory (always last)
//!
//! The list is rebuilt from scratch on every theme change and pushed to the
//! [`TemplateLoader`] wholesale.

mod search_paths;

pub use search_paths::SearchPathList;

use std::path::{Component, Path, PathBuf};

use crate::config::ViewsConfig;
use crate::error::{ViewError, ViewResult};
use crate::loader::TemplateLoader;

/// Compute the search path list for `theme`.
///
/// Fails with [`ViewError::ThemeNotFound`] when `theme_root_dir/theme` is not a
/// directory. Module directories that do not exist are skipped silently, as are
/// those whose path contains `theme_dir_marker`.
pub fn resolve(
    theme: &str,
    module_view_dirs: &[PathBuf],
    base_views_dir: &Path,
    theme_root_dir: &Path,
    theme_dir_marker: &str,
) -> ViewResult<SearchPathList> {
    let theme_path = theme_directory(theme_root_dir, theme)?;

    let mut paths = SearchPathList::new();
    for dir in module_view_dirs {
        if !dir.is_dir() {
            tracing::debug!(?dir, "Module views directory does not exist, skipping");
            continue;
        }
        // Substring match on the raw path, so a module whose name merely contains
        // the marker is dropped too.
        if !theme_dir_marker.is_empty() && dir.to_string_lossy().contains(theme_dir_marker) {
            tracing::debug!(?dir, marker = theme_dir_marker, "Skipping theme-managed path");
            continue;
        }
        paths.push(dir.clone());
    }
    paths.dedupe();

    paths.push(base_views_dir);
    paths.prepend(theme_path);
    // The base views dir may also have been offered as a module dir.
    paths.dedupe();

    Ok(paths)
}

/// `theme_root_dir/theme`, provided it names an existing theme directory.
fn theme_directory(theme_root_dir: &Path, theme: &str) -> ViewResult<PathBuf> {
    let path = theme_root_dir.join(theme);
    if !is_plain_name(theme) || !path.is_dir() {
        tracing::error!(
            theme,
            ?path,
            "Requested theme has not been loaded because it does not exist"
        );
        return Err(ViewError::theme_not_found(theme, path));
    }
    Ok(path)
}

/// A theme name must be a single normal path component.
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Resolver lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResolverState {
    #[default]
    Uninitialized,
    Bound {
        theme: String,
        paths: SearchPathList,
    },
}

/// Owns the current theme and its search path list.
#[derive(Debug)]
pub struct ThemeResolver {
    theme_root_dir: PathBuf,
    base_views_dir: PathBuf,
    theme_dir_marker: String,
    state: ResolverState,
}

impl ThemeResolver {
    pub fn new(
        theme_root_dir: impl Into<PathBuf>,
        base_views_dir: impl Into<PathBuf>,
        theme_dir_marker: impl Into<String>,
    ) -> Self {
        Self {
            theme_root_dir: theme_root_dir.into(),
            base_views_dir: base_views_dir.into(),
            theme_dir_marker: theme_dir_marker.into(),
            state: ResolverState::Uninitialized,
        }
    }

    pub fn from_config(config: &ViewsConfig) -> Self {
        Self::new(
            config.theme_root_dir(),
            config.base_views_path(),
            config.theme_dir.clone(),
        )
    }

    pub fn state(&self) -> &ResolverState {
        &self.state
    }

    pub fn current_theme(&self) -> Option<&str> {
        match &self.state {
            ResolverState::Bound { theme, .. } => Some(theme),
            ResolverState::Uninitialized => None,
        }
    }

    pub fn search_paths(&self) -> Option<&SearchPathList> {
        match &self.state {
            ResolverState::Bound { paths, .. } => Some(paths),
            ResolverState::Uninitialized => None,
        }
    }

    pub fn theme_root_dir(&self) -> &Path {
        &self.theme_root_dir
    }

    /// Theme directory names under the theme root, sorted.
    pub fn available_themes(&self) -> ViewResult<Vec<String>> {
        let mut themes: Vec<String> = std::fs::read_dir(&self.theme_root_dir)?
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().to_str().map(String::from))
            .collect();
        themes.sort();
        Ok(themes)
    }

    /// Fail unless `theme` exists under the theme root.
    pub fn ensure_theme_exists(&self, theme: &str) -> ViewResult<PathBuf> {
        theme_directory(&self.theme_root_dir, theme)
    }

    /// Resolve `theme` unconditionally and hand the result to `loader`.
    ///
    /// The resolver only moves to `Bound(theme, ..)` once the loader has
    /// accepted the new list.
    pub fn bind<L: TemplateLoader + ?Sized>(
        &mut self,
        theme: &str,
        module_view_dirs: &[PathBuf],
        loader: &mut L,
    ) -> ViewResult<()> {
        let paths = resolve(
            theme,
            module_view_dirs,
            &self.base_views_dir,
            &self.theme_root_dir,
            &self.theme_dir_marker,
        )?;
        loader
            .set_search_paths(paths.as_slice())
            .inspect_err(|e| tracing::error!(theme, error = %e, "Template loader rejected search paths"))?;

        tracing::debug!(theme, paths = ?paths.as_slice(), "Bound theme search paths");
        self.state = ResolverState::Bound {
            theme: theme.to_string(),
            paths,
        };
        Ok(())
    }

    /// Switch to `theme`.
    ///
    /// The theme directory is checked first. Switching to the already bound
    /// theme leaves the list untouched and returns `Ok(false)`.
    pub fn switch<L: TemplateLoader + ?Sized>(
        &mut self,
        theme: &str,
        module_view_dirs: &[PathBuf],
        loader: &mut L,
    ) -> ViewResult<bool> {
        self.ensure_theme_exists(theme)?;
        if self.current_theme() == Some(theme) {
            return Ok(false);
        }
        self.bind(theme, module_view_dirs, loader)?;
        Ok(true)
    }
}
