//! `modules`: list modules under the configured locations.

use themed_views::{ModuleLocations, ViewResult, ViewsConfig};

use crate::output;

pub(crate) fn list_modules(config: &ViewsConfig) -> ViewResult<()> {
    let locations = ModuleLocations::new(config.module_location_paths());
    let modules = locations.list_modules();

    if modules.is_empty() {
        output::warning("No modules found.");
        if config.module_locations.is_empty() {
            output::hint("Set `module-locations` in themed-views.toml to enable module views.");
        }
        return Ok(());
    }

    output::header("Modules:");
    for module in &modules {
        output::item(module, false);
    }
    Ok(())
}
