//! Command handlers for `themed-views-ctl`.

pub(crate) mod modules;
pub(crate) mod paths;
pub(crate) mod render;
pub(crate) mod themes;

use themed_views::{ModuleLocations, ViewResult, Views, ViewsConfig};

use crate::Commands;

pub(crate) fn handle_command(cmd: Commands, config: ViewsConfig) -> ViewResult<()> {
    match cmd {
        Commands::Render {
            template,
            theme,
            layout,
            module,
            data,
            set,
            route,
            base_url,
        } => render::render(
            config,
            &render::RenderArgs {
                template: &template,
                theme: theme.as_deref(),
                layout: layout.as_deref(),
                module: module.as_deref(),
                data: data.as_deref(),
                set: &set,
                route: route.as_deref(),
                base_url: &base_url,
            },
        ),
        Commands::Paths { theme, module } => {
            paths::show_paths(config, theme.as_deref(), module.as_deref())
        }
        Commands::Themes => themes::list_themes(config),
        Commands::Modules => modules::list_modules(&config),
    }
}

/// Build a [`Views`] with `module` active, then switch to `theme` if given.
fn build_views(config: ViewsConfig, theme: Option<&str>, module: Option<&str>) -> ViewResult<Views> {
    let provider = module.map(|module| {
        let locations = ModuleLocations::new(config.module_location_paths()).with_active_module(module);
        Box::new(locations) as Box<dyn themed_views::ModuleDirectoryProvider>
    });

    let mut views = Views::new(config, provider)?;
    if let Some(theme) = theme {
        views.switch_theme(theme)?;
    }
    Ok(views)
}
