//! # View Error Types
//!
//! Unified error handling for theme resolution, template loading and rendering.

use std::path::PathBuf;

use thiserror::Error;

/// View operation result type
pub type ViewResult<T> = Result<T, ViewError>;

/// Errors surfaced by the view layer.
///
/// None of these are transient: every failure is a deterministic consequence of
/// what is on disk or in the configuration, so nothing is retried.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Theme '{theme}' does not exist in {}", path.display())]
    ThemeNotFound { theme: String, path: PathBuf },

    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("render error for '{template}': {source}")]
    Render {
        template: String,
        #[source]
        source: tera::Error,
    },

    #[error("failed to load templates from {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: tera::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ViewError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a theme-not-found error for the given theme and missing directory
    pub fn theme_not_found(theme: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::ThemeNotFound {
            theme: theme.into(),
            path: path.into(),
        }
    }

    /// Map a Tera render failure, lifting "template not found" into its own variant.
    pub(crate) fn from_render(template: &str, source: tera::Error) -> Self {
        if let tera::ErrorKind::TemplateNotFound(name) = &source.kind {
            return Self::TemplateNotFound { name: name.clone() };
        }
        Self::Render {
            template: template.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_not_found_message() {
        let err = ViewError::theme_not_found("missing", "/app/themes/missing");
        let msg = err.to_string();
        assert!(msg.contains("missing"));
        assert!(msg.contains("/app/themes/missing"));
    }

    #[test]
    fn test_configuration_constructor() {
        let err = ViewError::configuration("default-theme is empty");
        assert!(matches!(err, ViewError::Configuration(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: default-theme is empty"
        );
    }

    #[test]
    fn test_from_render_lifts_template_not_found() {
        let tera_err = tera::Error::template_not_found("blog/index.twig");
        let err = ViewError::from_render("blog/index.twig", tera_err);
        match err {
            ViewError::TemplateNotFound { name } => assert_eq!(name, "blog/index.twig"),
            other => panic!("expected TemplateNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_from_render_keeps_other_errors() {
        let err = ViewError::from_render("index.twig", tera::Error::msg("boom"));
        assert!(matches!(err, ViewError::Render { .. }));
    }
}
