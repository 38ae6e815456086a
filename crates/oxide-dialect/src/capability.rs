//! Write-once registry for optional vendor capabilities.
//!
//! Some converters can only do their work when a vendor component is
//! available. Instead of linking against it, the host installs an
//! implementation of a narrow capability trait into a [`CapabilitySlot`] at
//! startup, and converters ask the slot on every call whether one is present.

use core::fmt;
use std::sync::{Arc, OnceLock};

use tracing::{debug, info};

use crate::error::{DialectError, Result};

/// Holds zero or one implementation of the capability `T`.
///
/// Installation is write-once. Concurrent installs race for the single write;
/// exactly one wins and every other caller gets a configuration error.
pub struct CapabilitySlot<T: ?Sized> {
    name: &'static str,
    inner: OnceLock<Arc<T>>,
}

impl<T: ?Sized> CapabilitySlot<T> {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: OnceLock::new(),
        }
    }

    /// The capability name used in logs and errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the installed implementation, if any.
    #[must_use]
    pub fn get(&self) -> Option<&Arc<T>> {
        self.inner.get()
    }

    /// Returns whether an implementation is installed.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.inner.get().is_some()
    }

    /// Installs `capability`.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::Configuration`] if the slot already holds an
    /// implementation.
    pub fn install(&self, capability: Arc<T>) -> Result<()> {
        match self.inner.set(capability) {
            Ok(()) => {
                info!(capability = self.name, "Installed optional capability");
                Ok(())
            }
            Err(_) => {
                debug!(capability = self.name, "Rejected second install");
                Err(DialectError::configuration(format!(
                    "capability '{}' is already installed",
                    self.name
                )))
            }
        }
    }
}

impl<T: ?Sized> fmt::Debug for CapabilitySlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilitySlot")
            .field("name", &self.name)
            .field("installed", &self.is_installed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Greeter: Send + Sync {
        fn greet(&self) -> String;
    }

    struct Hello;

    impl Greeter for Hello {
        fn greet(&self) -> String {
            "hello".to_string()
        }
    }

    #[test]
    fn test_empty_slot() {
        let slot: CapabilitySlot<dyn Greeter> = CapabilitySlot::new("greeter");
        assert!(!slot.is_installed());
        assert!(slot.get().is_none());
        assert_eq!(slot.name(), "greeter");
    }

    #[test]
    fn test_install_once() {
        let slot: CapabilitySlot<dyn Greeter> = CapabilitySlot::new("greeter");
        slot.install(Arc::new(Hello)).unwrap();
        assert!(slot.is_installed());
        assert_eq!(slot.get().map(|g| g.greet()).as_deref(), Some("hello"));

        let err = slot.install(Arc::new(Hello)).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("greeter"));
    }

    #[test]
    fn test_concurrent_installs_have_one_winner() {
        let slot: Arc<CapabilitySlot<dyn Greeter>> = Arc::new(CapabilitySlot::new("greeter"));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let slot = Arc::clone(&slot);
                std::thread::spawn(move || slot.install(Arc::new(Hello)).is_ok())
            })
            .collect();
        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(winners, 1);
        assert!(slot.is_installed());
    }
}
