//! Version information.

use trigcalc_core::registry::{BackendFactory, DefaultFactory};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Full version string with the modules compiled in.
#[must_use]
pub fn full_version() -> String {
    let factory = DefaultFactory::new();
    format!("trigcalc {VERSION} (modules: {})", factory.available().join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_not_empty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn full_version_lists_builtin() {
        let v = full_version();
        assert!(v.starts_with("trigcalc "));
        assert!(v.contains("trigonometry"));
    }
}
