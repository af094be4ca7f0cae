//=========================================================================
// Shared Library Initialization
//=========================================================================
//
// A windowing library is initialized once for any number of devices:
//
//   first device created  → backend.init()
//   last device dropped   → backend.quit()
//
// `Library` is a cheap, cloneable handle to the backend and the live
// device count. Devices keep a clone, so the backend outlives every
// device created from it.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::{Cell, RefCell, RefMut};
use std::rc::Rc;

use log::{error, info};

//=== Internal Dependencies ===============================================

use super::backend::{Backend, BackendError};
use super::device::Device;
use super::params::CreationParams;

//=== Library =============================================================

struct LibraryInner<B> {
    backend: RefCell<B>,
    instances: Cell<usize>,
    initialized: Cell<bool>,
}

/// Reference-counted owner of a windowing backend.
pub struct Library<B: Backend> {
    inner: Rc<LibraryInner<B>>,
}

impl<B: Backend> Clone for Library<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<B: Backend> Library<B> {
    pub fn new(backend: B) -> Self {
        Self {
            inner: Rc::new(LibraryInner {
                backend: RefCell::new(backend),
                instances: Cell::new(0),
                initialized: Cell::new(false),
            }),
        }
    }

    /// Creates a device, initializing the library if it is the first.
    pub fn create_device(&self, params: CreationParams) -> Device<B> {
        Device::new(self.clone(), params)
    }

    /// Number of live devices.
    pub fn instance_count(&self) -> usize {
        self.inner.instances.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.initialized.get()
    }

    /// Runs `f` with the backend, e.g. to post user events.
    ///
    /// # Panics
    ///
    /// Panics if called re-entrantly from inside another backend access.
    pub fn with_backend<R>(&self, f: impl FnOnce(&mut B) -> R) -> R {
        f(&mut self.backend())
    }

    //--- Device Lifecycle -------------------------------------------------

    pub(crate) fn backend(&self) -> RefMut<'_, B> {
        self.inner.backend.borrow_mut()
    }

    /// Registers a device. The first registration initializes the backend.
    ///
    /// Fails if initialization failed, now or for an earlier device.
    pub(crate) fn acquire(&self) -> Result<(), BackendError> {
        let count = self.inner.instances.get() + 1;
        self.inner.instances.set(count);

        if count == 1 {
            let mut backend = self.backend();
            match backend.init() {
                Ok(()) => {
                    self.inner.initialized.set(true);
                    info!(target: "platform", "{} initialized", backend.version());
                }
                Err(e) => {
                    error!(target: "platform", "Unable to initialize windowing library: {}", e);
                    return Err(e);
                }
            }
        }

        if self.inner.initialized.get() {
            Ok(())
        } else {
            Err(BackendError::NotInitialized)
        }
    }

    /// Unregisters a device. The last one shuts the backend down.
    pub(crate) fn release(&self) {
        let count = self.inner.instances.get().saturating_sub(1);
        self.inner.instances.set(count);

        if count == 0 && self.inner.initialized.replace(false) {
            self.backend().quit();
            info!(target: "platform", "Windowing library shut down");
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::testing::ScriptedBackend;

    #[test]
    fn first_acquire_initializes_last_release_quits() {
        let backend = ScriptedBackend::new();
        let log = backend.log();
        let library = Library::new(backend);

        assert!(library.acquire().is_ok());
        assert!(library.acquire().is_ok());
        assert_eq!(library.instance_count(), 2);

        library.release();
        assert!(library.is_initialized());
        library.release();
        assert!(!library.is_initialized());

        let calls = log.borrow();
        assert_eq!(calls.iter().filter(|c| *c == "init").count(), 1);
        assert_eq!(calls.iter().filter(|c| *c == "quit").count(), 1);
    }

    #[test]
    fn reacquire_after_shutdown_initializes_again() {
        let backend = ScriptedBackend::new();
        let log = backend.log();
        let library = Library::new(backend);

        assert!(library.acquire().is_ok());
        library.release();
        assert!(library.acquire().is_ok());
        library.release();

        assert_eq!(log.borrow().iter().filter(|c| *c == "init").count(), 2);
    }

    #[test]
    fn failed_init_never_quits() {
        let mut backend = ScriptedBackend::new();
        backend.fail_init = true;
        let log = backend.log();
        let library = Library::new(backend);

        assert!(library.acquire().is_err());
        assert_eq!(library.acquire(), Err(BackendError::NotInitialized));
        library.release();
        library.release();

        assert!(!log.borrow().iter().any(|c| c == "quit"));
        assert_eq!(library.instance_count(), 0);
    }

    #[test]
    fn with_backend_reaches_backend() {
        let library = Library::new(ScriptedBackend::new());
        library.with_backend(|b| b.push_user(1, 2));
        assert_eq!(library.with_backend(|b| b.queued()), 1);
    }
}
