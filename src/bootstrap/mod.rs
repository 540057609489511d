//! Bootstrap subsystem.
//!
//! # Data Flow
//! ```text
//! executable path
//!     → root.rs (canonicalize, take parent → project root)
//!     → search_path.rs (root registered at highest priority)
//!     → loader.rs (walk roots front to back, first provider wins)
//!     → SharedApp handed to lifecycle::startup
//! ```
//!
//! # Design Decisions
//! - The search path is an owned value passed to the loader as a
//!   constructor parameter; nothing here mutates process-wide state
//! - Resolution failures are fatal and propagate unchanged; there is no
//!   retry and no fallback application

use thiserror::Error;

use crate::application::AppError;

pub mod loader;
pub mod root;
pub mod search_path;

pub use loader::{Loader, APP_MODULE};
pub use root::resolve_project_root;
pub use search_path::SearchPath;

/// Errors raised while bootstrapping the application.
///
/// All of these are fatal at startup: there is nothing useful to serve
/// without a root and an application, so callers propagate rather than
/// recover.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The running executable's location could not be resolved.
    #[error("failed to resolve project root: {0}")]
    PathResolution(#[source] std::io::Error),

    /// No provider for the requested module anywhere on the search path.
    #[error("module '{module}' not found on the search path")]
    ModuleNotFound {
        /// Module path that failed to resolve.
        module: String,
    },

    /// A provider was found but failed to produce the application.
    #[error("module '{module}' failed to initialize: {reason}")]
    AppInit {
        /// Module path whose factory failed.
        module: String,
        /// The provider's own error, reported verbatim.
        reason: AppError,
    },
}
