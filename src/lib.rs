//! Process Bootstrap Launcher
//!
//! Resolves the project root, gives project-local modules priority during
//! application resolution, obtains the pre-constructed application object,
//! and hands the main thread to that application's network listener.
//!
//! # Architecture Overview
//!
//! ```text
//!  ┌──────────────────────────────────────────────────────────────────┐
//!  │                           LAUNCHER                               │
//!  │                                                                  │
//!  │  ┌───────────┐    ┌─────────────┐    ┌──────────┐               │
//!  │  │ bootstrap │───▶│  bootstrap  │───▶│bootstrap │               │
//!  │  │   root    │    │ search_path │    │  loader  │               │
//!  │  └───────────┘    └─────────────┘    └────┬─────┘               │
//!  │   resolve the      register root at       │ first root on the   │
//!  │   executable's     highest priority       │ path wins           │
//!  │   directory                               ▼                     │
//!  │                                     ┌──────────┐                │
//!  │                                     │ service  │  blocks the    │
//!  │                                     │App::run()│  main thread   │
//!  │                                     └──────────┘  until exit    │
//!  │                                                                  │
//!  │  Cross-cutting: observability (tracing), lifecycle (startup)     │
//!  └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The launcher itself is single-threaded and synchronous; concurrency
//! begins inside the application's own `run`, which owns its runtime.

// Core subsystems
pub mod application;
pub mod bootstrap;
pub mod service;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use application::{AppError, Application, RunOptions, SharedApp, DEFAULT_HOST, DEFAULT_PORT};
pub use bootstrap::loader::{Loader, APP_MODULE};
pub use bootstrap::root::resolve_project_root;
pub use bootstrap::search_path::SearchPath;
pub use bootstrap::BootstrapError;
pub use lifecycle::startup::{launch, start, LaunchError};
