//! Shared display access
//!
//! The matrix has one set of hardware frames, so concurrent drawers must be
//! serialized. `SharedDisplay` puts a [`Display`] behind an embassy-sync
//! blocking mutex; pick `CriticalSectionRawMutex` when interrupts or a
//! second core draw too, `NoopRawMutex` for a single executor.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::display::Display;

/// A [`Display`] that can be reached through a shared reference
pub struct SharedDisplay<M: RawMutex, C, D> {
    inner: Mutex<M, RefCell<Display<C, D>>>,
}

impl<M: RawMutex, C, D> SharedDisplay<M, C, D> {
    /// Wrap a display (usable in a `static`)
    ///
    /// Takes the raw mutex by value, e.g. `CriticalSectionRawMutex::new()`.
    pub const fn new(raw: M, display: Display<C, D>) -> Self {
        Self {
            inner: Mutex::const_new(raw, RefCell::new(display)),
        }
    }

    /// Run `f` with exclusive access to the display
    ///
    /// Must not be called again from inside `f`; the nested call panics
    /// on the already borrowed display.
    pub fn lock<R>(&self, f: impl FnOnce(&mut Display<C, D>) -> R) -> R {
        self.inner.lock(|display| f(&mut display.borrow_mut()))
    }

    /// Take the display back out
    pub fn into_inner(self) -> Display<C, D> {
        self.inner.into_inner().into_inner()
    }
}
