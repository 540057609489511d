//! Project root resolution.
//!
//! # Responsibilities
//! - Locate the absolute directory containing the running executable
//! - Stay independent of the caller's working directory
//!
//! # Design Decisions
//! - Canonicalize before taking the parent, so symlinked install paths
//!   resolve to the real project directory
//! - Resolution failures are fatal; there is nothing to serve without a root

use std::path::{Path, PathBuf};

use super::BootstrapError;

/// Resolve the project root: the absolute directory containing the running
/// executable.
///
/// Deterministic for a fixed executable location. Performs no side effects
/// beyond filesystem metadata lookups.
pub fn resolve_project_root() -> Result<PathBuf, BootstrapError> {
    let exe = std::env::current_exe().map_err(BootstrapError::PathResolution)?;
    root_of(&exe)
}

/// The directory containing `program`, as an absolute path.
///
/// Factored out of [`resolve_project_root`] so the derivation rule can be
/// exercised against arbitrary file locations.
pub fn root_of(program: &Path) -> Result<PathBuf, BootstrapError> {
    let canonical = program
        .canonicalize()
        .map_err(BootstrapError::PathResolution)?;

    let parent = canonical.parent().ok_or_else(|| {
        BootstrapError::PathResolution(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "program path has no parent directory",
        ))
    })?;

    Ok(parent.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_containing_directory() {
        let exe = std::env::current_exe().unwrap();
        let root = root_of(&exe).unwrap();

        assert!(root.is_absolute());
        assert_eq!(
            root,
            exe.canonicalize().unwrap().parent().unwrap().to_path_buf()
        );
    }

    #[test]
    fn test_relative_program_path_resolves_to_absolute_root() {
        // Cargo runs tests with the package root as working directory.
        let root = root_of(Path::new("Cargo.toml")).unwrap();

        assert!(root.is_absolute());
        assert!(root.join("Cargo.toml").exists());
    }

    #[test]
    fn test_missing_program_fails_with_path_resolution() {
        let err = root_of(Path::new("/nonexistent/program")).unwrap_err();
        assert!(matches!(err, BootstrapError::PathResolution(_)));
    }
}
