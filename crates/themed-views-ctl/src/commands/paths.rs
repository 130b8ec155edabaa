//! `paths`: show the search path list for a theme.

use themed_views::{ViewResult, ViewsConfig};

use crate::output;

pub(crate) fn show_paths(
    config: ViewsConfig,
    theme: Option<&str>,
    module: Option<&str>,
) -> ViewResult<()> {
    let views = super::build_views(config, theme, module)?;

    output::header(format!(
        "Search paths for theme '{}':",
        views.current_theme().unwrap_or_default()
    ));
    for (index, path) in views.search_paths().iter().enumerate() {
        output::numbered(index + 1, path.display());
    }
    Ok(())
}
