//! Application resolution against the search path.
//!
//! # Responsibilities
//! - Map (root, module) pairs to application factories
//! - Resolve a module by walking the search path front to back
//! - Surface missing-module and failed-initialization conditions
//!
//! # Design Decisions
//! - The search path is a constructor parameter: resolution priority is
//!   decided by whoever built the path, not by registration order
//! - First matching root wins; factories under later roots never run
//! - Providers hand out pre-constructed instances, so loading a module
//!   twice yields the same application identity

use std::collections::HashMap;
use std::path::PathBuf;

use crate::application::{AppError, SharedApp};

use super::search_path::SearchPath;
use super::BootstrapError;

/// Module path of the bundled application within the project tree.
pub const APP_MODULE: &str = "service";

/// Factory producing the application object for one module under one root.
pub type AppFactory = Box<dyn Fn() -> Result<SharedApp, AppError> + Send + Sync>;

/// Resolves application modules against an explicit search path.
pub struct Loader {
    /// Roots consulted in order during resolution.
    search_path: SearchPath,
    /// Registered factories, keyed by root then module path.
    providers: HashMap<PathBuf, HashMap<String, AppFactory>>,
}

impl Loader {
    /// Create a loader resolving against `search_path`.
    pub fn new(search_path: SearchPath) -> Self {
        Self {
            search_path,
            providers: HashMap::new(),
        }
    }

    /// Register `factory` for `module` under `root`.
    ///
    /// Whether the factory is ever invoked depends on where `root` sits on
    /// the search path at resolution time.
    pub fn provide(
        &mut self,
        root: impl Into<PathBuf>,
        module: impl Into<String>,
        factory: impl Fn() -> Result<SharedApp, AppError> + Send + Sync + 'static,
    ) {
        self.providers
            .entry(root.into())
            .or_default()
            .insert(module.into(), Box::new(factory));
    }

    /// Resolve `module`: walk the search path front to back and invoke the
    /// first matching factory.
    ///
    /// Fails with [`BootstrapError::ModuleNotFound`] when no root on the
    /// path provides the module, and with [`BootstrapError::AppInit`] when
    /// the winning factory itself fails. Neither condition is recovered
    /// here.
    pub fn load(&self, module: &str) -> Result<SharedApp, BootstrapError> {
        for root in self.search_path.entries() {
            let factory = self
                .providers
                .get(root)
                .and_then(|modules| modules.get(module));

            if let Some(factory) = factory {
                return factory().map_err(|reason| BootstrapError::AppInit {
                    module: module.to_string(),
                    reason,
                });
            }
        }

        Err(BootstrapError::ModuleNotFound {
            module: module.to_string(),
        })
    }

    /// Resolve the bundled application module.
    pub fn load_application(&self) -> Result<SharedApp, BootstrapError> {
        self.load(APP_MODULE)
    }

    /// The search path this loader resolves against.
    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }
}
