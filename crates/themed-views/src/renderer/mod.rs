//! The [`Views`] entry point.
//!
//! One `Views` owns the resolver, the loader and the per-request view state
//! (layout, template, data). Switching themes rebuilds the loader's search
//! paths; everything else only affects the next render.

mod shared;

pub use shared::SharedViews;

use std::io::Write;
use std::path::PathBuf;

use serde_json::{Map, Value};
use tera::Context;

use crate::config::ViewsConfig;
use crate::error::ViewResult;
use crate::helpers;
use crate::loader::SearchPathLoader;
use crate::modules::ModuleDirectoryProvider;
use crate::resolver::ThemeResolver;
use crate::site::{RouteInfo, SiteUrls};

/// Directory, relative to each search root, holding layout templates.
const LAYOUTS_DIR: &str = "_layouts";

/// Template variable naming the active layout file.
pub const LAYOUT_VARIABLE: &str = "_layout";

/// Theme-aware renderer.
#[derive(Debug)]
pub struct Views {
    config: ViewsConfig,
    resolver: ThemeResolver,
    loader: SearchPathLoader,
    modules: Option<Box<dyn ModuleDirectoryProvider>>,
    layout: String,
    layout_file: String,
    template: String,
    data: Map<String, Value>,
    globals: Map<String, Value>,
    route: Option<(RouteInfo, String)>,
}

impl Views {
    /// Build the loader, register helpers and bind the default theme.
    ///
    /// Fails when the configuration is invalid, names an unknown helper
    /// function, or the default theme does not exist.
    pub fn new(
        config: ViewsConfig,
        modules: Option<Box<dyn ModuleDirectoryProvider>>,
    ) -> ViewResult<Self> {
        config.validate()?;

        let mut loader =
            SearchPathLoader::new(&config.file_extension, config.environment.autoescape);
        helpers::register_filters(&mut loader);
        for name in &config.functions {
            helpers::catalog(&mut loader, name)?;
        }

        let mut views = Self {
            resolver: ThemeResolver::from_config(&config),
            loader,
            modules,
            layout: String::new(),
            layout_file: String::new(),
            template: config.default_template.clone(),
            data: Map::new(),
            globals: Map::new(),
            route: None,
            config,
        };

        let default_theme = views.config.default_theme.clone();
        let module_dirs = views.module_view_dirs();
        views
            .resolver
            .bind(&default_theme, &module_dirs, &mut views.loader)?;

        let default_layout = views.config.default_layout.clone();
        views.layout(&default_layout);

        tracing::debug!(
            theme = %default_theme,
            templates = views.loader.template_names().len(),
            "Views initialized"
        );
        Ok(views)
    }

    /// Switch to `theme`, returning `&mut self` for chaining.
    pub fn theme(&mut self, theme: &str) -> ViewResult<&mut Self> {
        self.switch_theme(theme)?;
        Ok(self)
    }

    /// Switch to `theme`. Returns whether the search paths were rebuilt.
    ///
    /// A missing theme leaves the current binding in place.
    pub fn switch_theme(&mut self, theme: &str) -> ViewResult<bool> {
        let module_dirs = self.module_view_dirs();
        let changed = self.resolver.switch(theme, &module_dirs, &mut self.loader)?;
        if changed {
            tracing::info!(theme, "Switched theme");
        }
        Ok(changed)
    }

    /// Use `_layouts/<layout>.<file extension>` as the layout.
    pub fn layout(&mut self, layout: &str) -> &mut Self {
        let extension = self.config.file_extension.clone();
        self.layout_with_extension(layout, &extension)
    }

    /// Use `_layouts/<layout>.<extension>` as the layout.
    pub fn layout_with_extension(&mut self, layout: &str, extension: &str) -> &mut Self {
        self.layout = layout.to_string();
        self.layout_file = format!("{LAYOUTS_DIR}/{layout}.{extension}");
        self
    }

    /// Template rendered when `render` is called without one.
    pub fn template(&mut self, template: &str) -> &mut Self {
        self.template = template.to_string();
        self
    }

    pub fn current_theme(&self) -> Option<&str> {
        self.resolver.current_theme()
    }

    pub fn current_layout(&self) -> &str {
        &self.layout
    }

    /// Layout path as seen by templates through `_layout`.
    pub fn layout_file(&self) -> &str {
        &self.layout_file
    }

    pub fn current_template(&self) -> &str {
        &self.template
    }

    /// Current search paths, highest priority first.
    pub fn search_paths(&self) -> &[PathBuf] {
        self.resolver
            .search_paths()
            .map(|paths| paths.as_slice())
            .unwrap_or_default()
    }

    /// Themes available under the theme root.
    pub fn available_themes(&self) -> ViewResult<Vec<String>> {
        self.resolver.available_themes()
    }

    /// Names of every template reachable through the current search paths.
    pub fn template_names(&self) -> Vec<String> {
        self.loader.template_names()
    }

    pub fn config(&self) -> &ViewsConfig {
        &self.config
    }

    /// Set a variable for subsequent renders.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.data.insert(name.into(), value.into());
        self
    }

    /// Set a variable visible to every render, below data in precedence.
    pub fn set_global(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.globals.insert(name.into(), value.into());
        self
    }

    /// Set every entry of `values`, as globals when `global` is true.
    pub fn set_many(&mut self, values: Map<String, Value>, global: bool) -> &mut Self {
        let target = if global {
            &mut self.globals
        } else {
            &mut self.data
        };
        target.extend(values);
        self
    }

    /// Remove a variable from both data and globals.
    pub fn unset(&mut self, name: &str) -> &mut Self {
        self.data.remove(name);
        self.globals.remove(name);
        self
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn globals(&self) -> &Map<String, Value> {
        &self.globals
    }

    /// Register a function callable from templates.
    pub fn register_function<F>(&mut self, name: &str, function: F) -> &mut Self
    where
        F: tera::Function + Clone + 'static,
    {
        self.loader.register_function(name, function);
        self
    }

    /// Register a filter usable from templates.
    pub fn register_filter<F>(&mut self, name: &str, filter: F) -> &mut Self
    where
        F: tera::Filter + Clone + 'static,
    {
        self.loader.register_filter(name, filter);
        self
    }

    /// Expose `route` and `url` to every render.
    ///
    /// `url.theme` follows the theme bound at render time.
    pub fn with_route(&mut self, route: RouteInfo, base_url: impl Into<String>) -> &mut Self {
        self.route = Some((route, base_url.into()));
        self
    }

    /// Render `template` (or the current template) with `data` merged over
    /// the stored variables.
    ///
    /// Passing a template also makes it the current template.
    pub fn render(&mut self, template: Option<&str>, data: &Map<String, Value>) -> ViewResult<String> {
        if let Some(template) = template {
            self.template(template);
        }

        if self.config.environment.reloads() {
            self.loader.reload()?;
        }

        let name = self.config.template_file(&self.template);
        let context = self.context(data);
        self.loader.render(&name, &context).inspect_err(|e| {
            tracing::error!(template = %name, error = %e, "Failed to render template");
        })
    }

    /// Render and write the result to `out`.
    pub fn display<W: Write + ?Sized>(
        &mut self,
        template: Option<&str>,
        data: &Map<String, Value>,
        out: &mut W,
    ) -> ViewResult<()> {
        let rendered = self.render(template, data)?;
        out.write_all(rendered.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn module_view_dirs(&self) -> Vec<PathBuf> {
        self.modules
            .as_ref()
            .map(|provider| provider.module_view_dirs())
            .unwrap_or_default()
    }

    /// `_layout`, then globals, then route context, then stored data, then `data`.
    fn context(&self, data: &Map<String, Value>) -> Context {
        let mut context = Context::new();
        context.insert(LAYOUT_VARIABLE, &self.layout_file);
        for (key, value) in &self.globals {
            context.insert(key.as_str(), value);
        }

        if let (Some((route, base_url)), Some(theme)) = (&self.route, self.current_theme()) {
            let urls = SiteUrls::build(base_url, route, &self.config.theme_dir, theme);
            context.insert("route", route);
            context.insert("url", &urls);
        }

        for (key, value) in self.data.iter().chain(data.iter()) {
            context.insert(key.as_str(), value);
        }
        context
    }
}
