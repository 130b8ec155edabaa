//! Lock-guarded [`Views`] for sharing across threads.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::{Map, Value};

use super::Views;
use crate::error::ViewResult;

/// Cloneable handle to a single [`Views`].
///
/// Every operation holds the lock for its whole duration, so a render never
/// observes a half-rebuilt search path list.
#[derive(Debug, Clone)]
pub struct SharedViews {
    inner: Arc<Mutex<Views>>,
}

impl SharedViews {
    pub fn new(views: Views) -> Self {
        Self {
            inner: Arc::new(Mutex::new(views)),
        }
    }

    pub fn switch_theme(&self, theme: &str) -> ViewResult<bool> {
        self.lock().switch_theme(theme)
    }

    pub fn render(&self, template: Option<&str>, data: &Map<String, Value>) -> ViewResult<String> {
        self.lock().render(template, data)
    }

    /// Switch to `theme` and render under one lock acquisition.
    pub fn render_with_theme(
        &self,
        theme: &str,
        template: Option<&str>,
        data: &Map<String, Value>,
    ) -> ViewResult<String> {
        let mut views = self.lock();
        views.switch_theme(theme)?;
        views.render(template, data)
    }

    pub fn current_theme(&self) -> Option<String> {
        self.lock().current_theme().map(String::from)
    }

    pub fn search_paths(&self) -> Vec<PathBuf> {
        self.lock().search_paths().to_vec()
    }

    /// Run `f` with exclusive access.
    pub fn with<R>(&self, f: impl FnOnce(&mut Views) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Views> {
        self.inner.lock().unwrap_or_else(|p| p.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewsConfig;
    use std::fs;
    use std::thread;

    fn setup() -> (tempfile::TempDir, ViewsConfig) {
        let dir = tempfile::tempdir().unwrap();
        for theme in ["default", "dark", "light"] {
            let theme_dir = dir.path().join("themes").join(theme);
            fs::create_dir_all(&theme_dir).unwrap();
            fs::write(theme_dir.join("name.twig"), theme).unwrap();
        }
        fs::create_dir_all(dir.path().join("views")).unwrap();

        let config = ViewsConfig {
            base_dir: dir.path().to_string_lossy().into_owned(),
            base_views_dir: dir.path().join("views/").to_string_lossy().into_owned(),
            ..ViewsConfig::default()
        };
        (dir, config)
    }

    #[test]
    fn test_switch_and_render_stay_consistent_across_threads() {
        let (_dir, config) = setup();
        let shared = SharedViews::new(Views::new(config, None).unwrap());

        let handles: Vec<_> = ["dark", "light", "default", "dark"]
            .into_iter()
            .map(|theme| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..10 {
                        let out = shared
                            .render_with_theme(theme, Some("name"), &Map::new())
                            .unwrap();
                        assert_eq!(out, theme);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn test_shared_accessors() {
        let (dir, config) = setup();
        let shared = SharedViews::new(Views::new(config, None).unwrap());

        assert!(shared.switch_theme("light").unwrap());
        assert_eq!(shared.current_theme().as_deref(), Some("light"));
        assert_eq!(shared.search_paths()[0], dir.path().join("themes/").join("light"));
        assert_eq!(shared.render(Some("name"), &Map::new()).unwrap(), "light");
        assert_eq!(shared.with(|views| views.current_template().to_string()), "name");
    }
}
