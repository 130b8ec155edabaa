//! `themes`: list theme directories.

use themed_views::{ThemeResolver, ViewResult, ViewsConfig};

use crate::output;

pub(crate) fn list_themes(config: ViewsConfig) -> ViewResult<()> {
    let resolver = ThemeResolver::from_config(&config);
    let themes = resolver.available_themes().map_err(|e| {
        tracing::error!(root = ?resolver.theme_root_dir(), error = %e, "Cannot read theme directory");
        e
    })?;

    if themes.is_empty() {
        output::warning(format!(
            "No themes found in {}.",
            resolver.theme_root_dir().display()
        ));
        return Ok(());
    }

    output::header("Available themes:");
    for theme in &themes {
        output::item(theme, *theme == config.default_theme);
    }
    Ok(())
}
