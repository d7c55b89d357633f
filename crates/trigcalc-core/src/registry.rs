//! Module factory and registry.
//!
//! The registry stands in for a search path of loadable modules: a module
//! is located by name and handed out as a shared backend.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::backend::{BuiltinBackend, TrigBackend, TrigError};
use crate::constants::DEFAULT_MODULE_NAME;
use crate::options::Options;

/// Factory trait for locating trigonometry modules.
pub trait BackendFactory: Send + Sync {
    /// Get or create a backend by module name.
    fn get(&self, name: &str) -> Result<Arc<dyn TrigBackend>, TrigError>;

    /// List all available module names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    opts: Options,
    cache: RwLock<HashMap<String, Arc<dyn TrigBackend>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Create a factory whose backends are built with `opts`.
    #[must_use]
    pub fn with_options(opts: Options) -> Self {
        Self {
            opts,
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_backend(&self, name: &str) -> Result<Arc<dyn TrigBackend>, TrigError> {
        match name {
            DEFAULT_MODULE_NAME | "builtin" => {
                Ok(Arc::new(BuiltinBackend::with_options(&self.opts)))
            }
            _ => Err(TrigError::ModuleNotFound(name.to_string())),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl BackendFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn TrigBackend>, TrigError> {
        // Check cache first
        if let Some(backend) = self.cache.read().get(name) {
            return Ok(Arc::clone(backend));
        }

        // Create and cache
        let backend = self.create_backend(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&backend));
        Ok(backend)
    }

    fn available(&self) -> Vec<&str> {
        vec![DEFAULT_MODULE_NAME]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_creates_builtin() {
        let factory = DefaultFactory::new();
        let backend = factory.get(DEFAULT_MODULE_NAME);
        assert!(backend.is_ok());
        assert_eq!(backend.unwrap().name(), "Builtin");
    }

    #[test]
    fn factory_alias() {
        let factory = DefaultFactory::new();
        assert!(factory.get("builtin").is_ok());
    }

    #[test]
    fn factory_applies_options() {
        let factory = DefaultFactory::with_options(Options {
            range_reduction: true,
            ..Default::default()
        });
        assert_eq!(factory.get("trigonometry").unwrap().name(), "BuiltinReduced");
    }

    #[test]
    fn factory_caches() {
        let factory = DefaultFactory::new();
        let a = factory.get("trigonometry").unwrap();
        let b = factory.get("trigonometry").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn factory_unknown_name() {
        let factory = DefaultFactory::new();
        assert_eq!(
            factory.get("libm").err(),
            Some(TrigError::ModuleNotFound("libm".into()))
        );
    }

    #[test]
    fn factory_available() {
        let factory = DefaultFactory::new();
        assert_eq!(factory.available(), vec!["trigonometry"]);
    }
}
