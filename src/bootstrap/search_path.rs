//! Explicit module search path.
//!
//! # Responsibilities
//! - Hold the ordered list of root directories consulted during module
//!   resolution
//! - Give the project root priority over every other entry
//!
//! # Design Decisions
//! - Owned value handed to the loader by constructor, not process-global
//!   state with teardown concerns
//! - `register` prepends; duplicates are permitted and harmless because
//!   resolution stops at the first match
//! - Front-to-back order is the shadowing rule: earlier roots win

use std::path::{Path, PathBuf};

/// Ordered list of root directories consulted, front to back, when
/// resolving a module by name.
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    entries: Vec<PathBuf>,
}

impl SearchPath {
    /// Create an empty search path.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Prepend `root`, giving it priority over all existing entries so that
    /// modules under it shadow identically named modules under later roots.
    ///
    /// Registering the same root twice inserts two identical entries at the
    /// front; subsequent resolution is unaffected.
    pub fn register(&mut self, root: impl Into<PathBuf>) {
        self.entries.insert(0, root.into());
    }

    /// Roots in resolution order.
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Whether `root` appears anywhere on the path.
    pub fn contains(&self, root: &Path) -> bool {
        self.entries.iter().any(|entry| entry == root)
    }

    /// Number of registered entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no roots are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_prepends_at_highest_priority() {
        let mut path = SearchPath::new();
        path.register("/opt/vendored");
        path.register("/srv/project");

        assert_eq!(path.entries()[0], PathBuf::from("/srv/project"));
        assert_eq!(path.entries()[1], PathBuf::from("/opt/vendored"));
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_duplicate_registration_inserts_twice() {
        let mut path = SearchPath::new();
        path.register("/srv/project");
        path.register("/srv/project");

        assert_eq!(path.len(), 2);
        assert_eq!(path.entries()[0], path.entries()[1]);
        assert!(path.contains(Path::new("/srv/project")));
    }

    #[test]
    fn test_new_path_is_empty() {
        let path = SearchPath::new();
        assert!(path.is_empty());
        assert!(!path.contains(Path::new("/srv/project")));
    }
}
