//! Bundled application.
//!
//! # Responsibilities
//! - Expose the process-wide, pre-constructed application instance
//! - Bind the TCP listener and serve HTTP on the configured address
//!
//! # Design Decisions
//! - The instance is constructed once; every accessor call returns the
//!   same object identity
//! - The application owns its runtime: the launcher thread stays
//!   synchronous and blocks inside `run` for the process lifetime
//! - No routes are mounted yet; the router's built-in not-found handling
//!   answers every request
//! - No graceful shutdown: stopping the listener is the supervisor's job

use std::sync::{Arc, OnceLock};

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::application::{AppError, Application, RunOptions, SharedApp};

static APP: OnceLock<SharedApp> = OnceLock::new();

/// The process-wide application instance.
///
/// Constructed on first access; later calls hand out the same object.
pub fn app() -> SharedApp {
    APP.get_or_init(|| {
        let app: SharedApp = Arc::new(App::new());
        app
    })
    .clone()
}

/// The bundled HTTP application.
#[derive(Debug)]
pub struct App;

impl App {
    fn new() -> Self {
        Self
    }

    /// Build the router for one serve cycle. With `debug` set, every
    /// request is traced.
    fn router(&self, options: &RunOptions) -> Router {
        let router = Router::new();

        if options.debug {
            router.layer(TraceLayer::new_for_http())
        } else {
            router
        }
    }
}

impl Application for App {
    fn run(&self, options: &RunOptions) -> Result<(), AppError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        let router = self.router(options);
        let addr = options.bind_address();

        runtime.block_on(async move {
            let listener = TcpListener::bind(&addr).await?;
            let local_addr = listener.local_addr()?;

            tracing::info!(
                address = %local_addr,
                debug = options.debug,
                "Application listening"
            );

            axum::serve(listener, router).await?;

            Ok(())
        })
    }
}
