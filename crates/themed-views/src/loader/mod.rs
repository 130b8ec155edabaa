//! Search-path template loader.
//!
//! Tera has no notion of multiple template roots, so the loader flattens the
//! search path list into a single Tera instance: each root is walked in order
//! and a template name is registered from the first root that provides it.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use tera::{Context, Tera};
use walkdir::WalkDir;

use crate::error::{ViewError, ViewResult};

/// Sink for resolved search paths. The loader replaces its path list wholesale.
pub trait TemplateLoader: fmt::Debug {
    fn set_search_paths(&mut self, paths: &[PathBuf]) -> ViewResult<()>;
}

/// Tera-backed loader over an ordered list of template roots.
#[derive(Debug)]
pub struct SearchPathLoader {
    tera: Tera,
    /// Template-free instance holding registered filters and functions.
    registry: Tera,
    extension: String,
    autoescape: bool,
    paths: Vec<PathBuf>,
}

impl SearchPathLoader {
    /// Create an empty loader for `*.<extension>` templates.
    pub fn new(extension: impl Into<String>, autoescape: bool) -> Self {
        let mut tera = Tera::default();
        apply_autoescape(&mut tera, autoescape);
        Self {
            tera,
            registry: Tera::default(),
            extension: extension.into(),
            autoescape,
            paths: Vec::new(),
        }
    }

    /// Current search paths, highest priority first.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Names of every loaded template, sorted.
    pub fn template_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tera.get_template_names().map(String::from).collect();
        names.sort();
        names
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Register a filter that survives search path changes.
    pub fn register_filter<F>(&mut self, name: &str, filter: F)
    where
        F: tera::Filter + Clone + 'static,
    {
        self.registry.register_filter(name, filter.clone());
        self.tera.register_filter(name, filter);
    }

    /// Register a function that survives search path changes.
    pub fn register_function<F>(&mut self, name: &str, function: F)
    where
        F: tera::Function + Clone + 'static,
    {
        self.registry.register_function(name, function.clone());
        self.tera.register_function(name, function);
    }

    /// Re-read every template from the current search paths.
    pub fn reload(&mut self) -> ViewResult<()> {
        let paths = self.paths.clone();
        self.rebuild(&paths)
    }

    /// Render a template by its name relative to a search root (e.g. `blog/index.twig`).
    pub fn render(&self, name: &str, context: &Context) -> ViewResult<String> {
        self.tera
            .render(name, context)
            .map_err(|e| ViewError::from_render(name, e))
    }

    fn rebuild(&mut self, paths: &[PathBuf]) -> ViewResult<()> {
        let files = collect_template_files(paths, &self.extension);

        // Start from the registry so registered filters keep shadowing Tera's built-ins.
        let mut tera = self.registry.clone();
        apply_autoescape(&mut tera, self.autoescape);
        tera.add_template_files(files).map_err(|e| ViewError::Load {
            path: paths.first().cloned().unwrap_or_default(),
            source: e,
        })?;

        tracing::debug!(
            roots = paths.len(),
            templates = tera.get_template_names().count(),
            "Rebuilt template loader"
        );
        self.tera = tera;
        self.paths = paths.to_vec();
        Ok(())
    }
}

impl TemplateLoader for SearchPathLoader {
    fn set_search_paths(&mut self, paths: &[PathBuf]) -> ViewResult<()> {
        self.rebuild(paths)
    }
}

fn apply_autoescape(tera: &mut Tera, enabled: bool) {
    // Only configured-extension files are loaded, so an empty suffix means "every template".
    if enabled {
        tera.autoescape_on(vec![""]);
    } else {
        tera.autoescape_on(vec![]);
    }
}

/// Walk `roots` in order, keeping the first file seen for each template name.
fn collect_template_files(roots: &[PathBuf], extension: &str) -> Vec<(PathBuf, Option<String>)> {
    let suffix = format!(".{extension}");
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for root in roots {
        if !root.is_dir() {
            tracing::debug!(?root, "Template root does not exist, skipping");
            continue;
        }

        let walker = WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(?root, error = %e, "Cannot read template directory entry");
                    None
                }
            });

        for entry in walker {
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = template_name(root, entry.path()) else {
                continue;
            };
            if !name.ends_with(&suffix) {
                continue;
            }
            if seen.insert(name.clone()) {
                files.push((entry.path().to_path_buf(), Some(name)));
            }
        }
    }

    files
}

/// Path of `file` relative to `root`, joined with `/`.
fn template_name(root: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}
