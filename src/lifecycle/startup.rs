//! Startup orchestration.
//!
//! # Responsibilities
//! - Resolve the project root and register it at the front of the search
//!   path
//! - Wire the bundled application provider and load the application
//! - Start the listener last, handing over the main thread
//!
//! # Design Decisions
//! - Fail fast: any startup error aborts the launch
//! - Steps execute in order, not concurrently
//! - Listener starts last (traffic only once the application is loaded)

use thiserror::Error;

use crate::application::{AppError, RunOptions, SharedApp};
use crate::bootstrap::loader::{Loader, APP_MODULE};
use crate::bootstrap::root::resolve_project_root;
use crate::bootstrap::search_path::SearchPath;
use crate::bootstrap::BootstrapError;
use crate::service;

/// Errors surfaced by the launch sequence.
///
/// Both variants propagate to the caller without translation: startup
/// failures abort before any listener is bound, and listener failures are
/// the application's own.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Root resolution or application loading failed before the listener
    /// started.
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    /// The application's listener terminated with an error.
    #[error("application terminated: {0}")]
    App(AppError),
}

/// Run the full launch sequence with the fixed listen parameters: resolve
/// the project root, register it on the search path, load the bundled
/// application, and start its listener.
///
/// Blocks for the remainder of the process lifetime under normal
/// operation.
pub fn launch() -> Result<(), LaunchError> {
    let root = resolve_project_root()?;

    let mut search_path = SearchPath::new();
    search_path.register(root.clone());

    tracing::info!(
        root = %root.display(),
        "Project root registered"
    );

    let mut loader = Loader::new(search_path);
    loader.provide(root, APP_MODULE, || Ok(service::app()));

    let app = loader.load_application()?;

    tracing::info!(module = APP_MODULE, "Application loaded");

    start(&app, &RunOptions::default())
}

/// Hand the calling thread to the application's listener.
///
/// Does not return under normal operation. An error here is the
/// listener's own and reaches the caller unwrapped.
pub fn start(app: &SharedApp, options: &RunOptions) -> Result<(), LaunchError> {
    tracing::info!(
        host = %options.host,
        port = options.port,
        debug = options.debug,
        "Starting application listener"
    );

    app.run(options).map_err(LaunchError::App)
}
