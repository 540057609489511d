//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Resolve project root → Register on search path → Load application
//!         → Hand the main thread to the application's listener
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Steps run in order on the main thread, never concurrently
//! - The final step does not return under normal operation; stopping the
//!   listener is an operational concern outside this process

pub mod startup;

pub use startup::{launch, start, LaunchError};
