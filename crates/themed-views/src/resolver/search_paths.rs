//! Ordered template search path list.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Ordered, duplicate-free list of template directories. Earlier entries win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPathList(Vec<PathBuf>);

impl SearchPathList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append at the lowest priority.
    pub fn push(&mut self, path: impl Into<PathBuf>) {
        self.0.push(path.into());
    }

    /// Insert at the highest priority.
    pub fn prepend(&mut self, path: impl Into<PathBuf>) {
        self.0.insert(0, path.into());
    }

    /// Drop repeated entries, keeping the first occurrence of each.
    pub fn dedupe(&mut self) {
        let mut seen = HashSet::new();
        self.0.retain(|p| seen.insert(p.clone()));
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.0
    }

    pub fn first(&self) -> Option<&Path> {
        self.0.first().map(PathBuf::as_path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.0.iter().any(|p| p == path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        self.0
    }
}

impl<'a> IntoIterator for &'a SearchPathList {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<PathBuf>> for SearchPathList {
    fn from(paths: Vec<PathBuf>) -> Self {
        Self(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_prepend_order() {
        let mut list = SearchPathList::new();
        list.push("/app/modules/blog/views");
        list.push("/app/views");
        list.prepend("/app/themes/default");

        assert_eq!(list.first(), Some(Path::new("/app/themes/default")));
        assert_eq!(list.len(), 3);
        assert_eq!(list.as_slice()[2], PathBuf::from("/app/views"));
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let mut list = SearchPathList::from(vec![
            PathBuf::from("/a"),
            PathBuf::from("/b"),
            PathBuf::from("/a"),
            PathBuf::from("/c"),
            PathBuf::from("/b"),
        ]);
        list.dedupe();
        assert_eq!(
            list.into_vec(),
            vec![
                PathBuf::from("/a"),
                PathBuf::from("/b"),
                PathBuf::from("/c")
            ]
        );
    }

    #[test]
    fn test_dedupe_treats_trailing_slash_as_same_dir() {
        let mut list = SearchPathList::from(vec![
            PathBuf::from("/app/views/"),
            PathBuf::from("/app/views"),
        ]);
        list.dedupe();
        assert_eq!(list.len(), 1);
        assert!(list.contains(Path::new("/app/views")));
    }
}
