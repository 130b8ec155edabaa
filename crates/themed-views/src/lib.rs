//! Theme-aware view layer on top of Tera.
//!
//! `themed-views` resolves an ordered template search path from a theme
//! directory, optional module view directories, and the application's base
//! views directory, then renders templates through a Tera instance built from
//! that path list (first match wins).
//!
//! # Modules
//!
//! - [`resolver`]: theme path resolution and the `Uninitialized`/`Bound` state machine
//! - [`modules`]: optional module view directory provider
//! - [`loader`]: search-path backed Tera loader
//! - [`renderer`]: the [`Views`] entry point (theme switching, layouts, data, render/display)
//! - [`helpers`]: pagination, formatting and download helpers, also exposed as Tera filters/functions
//! - [`site`]: route and URL context injected into displayed views
//! - [`config`]: `themed-views.toml` loading
//! - [`error`]: the [`ViewError`] taxonomy
//!
//! # Example
//!
//! ```ignore
//! use themed_views::{Views, ViewsConfig};
//!
//! let config = ViewsConfig::load()?;
//! let mut views = Views::new(config, None)?;
//! views.switch_theme("dark")?;
//! let html = views.render(Some("blog/index"), &serde_json::Map::new())?;
//! ```

pub mod config;
pub mod error;
pub mod helpers;
pub mod loader;
pub mod modules;
pub mod renderer;
pub mod resolver;
pub mod site;

pub use config::ViewsConfig;
pub use error::{ViewError, ViewResult};
pub use loader::{SearchPathLoader, TemplateLoader};
pub use modules::{ModuleDirectoryProvider, ModuleLocations};
pub use renderer::{SharedViews, Views};
pub use resolver::{resolve, ResolverState, SearchPathList, ThemeResolver};
pub use site::{RouteInfo, SiteUrls};
