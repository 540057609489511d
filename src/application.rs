//! Application contract consumed by the launcher.
//!
//! The application object is an external collaborator: the launcher obtains
//! it from the loader, invokes [`Application::run`] exactly once, and owns
//! nothing about its internals. Request handling, scheduling, and error
//! semantics all belong to the application.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Default bind address handed to the application listener.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5001;

/// Listen parameters passed to [`Application::run`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RunOptions {
    /// Bind address for the listener (e.g., "0.0.0.0").
    pub host: String,

    /// Listening port.
    pub port: u16,

    /// Developer behavior toggle. Its meaning is defined entirely by the
    /// application; the launcher only forwards it.
    pub debug: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: false,
        }
    }
}

impl RunOptions {
    /// Render `host:port` for listener binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Error surfaced by an application's listener.
///
/// The launcher reports it verbatim: no wrapping, no retry, no exit-code
/// translation.
pub type AppError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An externally defined application exposing a blocking serve loop.
pub trait Application: std::fmt::Debug + Send + Sync {
    /// Start the application's listener and block the calling thread until
    /// the listener terminates. Does not return under normal operation.
    fn run(&self, options: &RunOptions) -> Result<(), AppError>;
}

/// Reference the launcher holds just long enough to invoke
/// [`Application::run`].
pub type SharedApp = Arc<dyn Application>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_match_fixed_parameters() {
        let options = RunOptions::default();
        assert_eq!(options.host, "0.0.0.0");
        assert_eq!(options.port, 5001);
        assert!(!options.debug);
    }

    #[test]
    fn test_bind_address_joins_host_and_port() {
        let options = RunOptions::default();
        assert_eq!(options.bind_address(), "0.0.0.0:5001");

        let options = RunOptions {
            host: "127.0.0.1".to_string(),
            port: 8080,
            debug: true,
        };
        assert_eq!(options.bind_address(), "127.0.0.1:8080");
    }
}
