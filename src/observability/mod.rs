//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Log filter configurable through the environment, with a sensible
//!   default for this crate
//! - No metrics surface: startup and listener events are logged, nothing
//!   is exported

pub mod logging;
