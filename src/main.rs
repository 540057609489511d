//! Executable entry point.
//!
//! Depending on the library never starts a listener; only running this
//! binary does. Failures print an error trace to stderr and exit non-zero,
//! with no exit-code translation by the launcher itself.

use app_launcher::lifecycle::startup;
use app_launcher::observability::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("app-launcher v0.1.0 starting");

    startup::launch()?;

    Ok(())
}
