//! Route and URL context handed to every displayed view as `route` and `url`.

use serde::{Deserialize, Serialize};

use crate::error::{ViewError, ViewResult};

/// The module, controller and action that handled the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    pub controller: String,
    pub action: String,
}

impl RouteInfo {
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            module: None,
            controller: controller.into(),
            action: action.into(),
        }
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Parse `controller`, `controller/action` or `module/controller/action`.
    ///
    /// A missing action defaults to `index`.
    pub fn parse(route: &str) -> ViewResult<Self> {
        let segments: Vec<&str> = route.trim_matches('/').split('/').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(ViewError::configuration(format!(
                "invalid route '{route}': empty segment"
            )));
        }
        match segments.as_slice() {
            [controller] => Ok(Self::new(*controller, "index")),
            [controller, action] => Ok(Self::new(*controller, *action)),
            [module, controller, action] => Ok(Self::new(*controller, *action).with_module(*module)),
            _ => Err(ViewError::configuration(format!(
                "invalid route '{route}': expected at most module/controller/action"
            ))),
        }
    }
}

/// Absolute URLs derived from the base URL, route and active theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteUrls {
    pub base: String,
    #[serde(rename = "self")]
    pub self_url: String,
    pub theme: String,
}

impl SiteUrls {
    /// `self` is `base[module/]controller/action/`; `theme` is `base<theme_dir><theme>/`.
    pub fn build(base_url: &str, route: &RouteInfo, theme_dir: &str, theme: &str) -> Self {
        let base = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let mut self_url = base.clone();
        if let Some(module) = &route.module {
            self_url.push_str(module);
            self_url.push('/');
        }
        self_url.push_str(&format!("{}/{}/", route.controller, route.action));

        let theme_dir = theme_dir.trim_matches('/');
        let theme_url = if theme_dir.is_empty() {
            format!("{base}{theme}/")
        } else {
            format!("{base}{theme_dir}/{theme}/")
        };

        Self {
            base,
            self_url,
            theme: theme_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_route_forms() {
        assert_eq!(RouteInfo::parse("home").unwrap(), RouteInfo::new("home", "index"));
        assert_eq!(
            RouteInfo::parse("posts/show").unwrap(),
            RouteInfo::new("posts", "show")
        );
        assert_eq!(
            RouteInfo::parse("/blog/posts/show/").unwrap(),
            RouteInfo::new("posts", "show").with_module("blog")
        );
    }

    #[test]
    fn test_parse_route_rejects_bad_input() {
        assert!(RouteInfo::parse("").is_err());
        assert!(RouteInfo::parse("a//b").is_err());
        assert!(RouteInfo::parse("a/b/c/d").is_err());
    }

    #[test]
    fn test_urls_with_module() {
        let route = RouteInfo::new("posts", "show").with_module("blog");
        let urls = SiteUrls::build("http://example.com/", &route, "themes/", "dark");
        assert_eq!(urls.base, "http://example.com/");
        assert_eq!(urls.self_url, "http://example.com/blog/posts/show/");
        assert_eq!(urls.theme, "http://example.com/themes/dark/");
    }

    #[test]
    fn test_urls_without_module_and_trailing_slash() {
        let route = RouteInfo::new("home", "index");
        let urls = SiteUrls::build("http://example.com", &route, "skins", "default");
        assert_eq!(urls.self_url, "http://example.com/home/index/");
        assert_eq!(urls.theme, "http://example.com/skins/default/");
    }

    #[test]
    fn test_serialized_field_names() {
        let route = RouteInfo::new("home", "index");
        let urls = SiteUrls::build("http://x/", &route, "themes/", "default");
        let value = serde_json::to_value(&urls).unwrap();
        assert_eq!(value["self"], "http://x/home/index/");

        let route_value = serde_json::to_value(&route).unwrap();
        assert!(route_value.get("module").is_none());
    }
}
