//! Interrupt-safe completion signaling.
//!
//! Transmit peripherals report completion from interrupt context.
//! [`CompletionFlag`] carries that one bit across contexts using
//! critical sections, so channel implementations can latch it from an
//! ISR and poll it from a blocking wait.

use core::cell::Cell;

use critical_section::Mutex;

/// One-bit completion latch, safe to signal from interrupt context.
pub struct CompletionFlag {
    inner: Mutex<Cell<bool>>,
}

impl CompletionFlag {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(false)),
        }
    }

    /// Mark the in-flight transmission as complete.
    pub fn signal(&self) {
        critical_section::with(|cs| self.inner.borrow(cs).set(true));
    }

    /// Re-arm the latch before starting a new transmission.
    pub fn clear(&self) {
        critical_section::with(|cs| self.inner.borrow(cs).set(false));
    }

    /// Check whether completion has been signaled.
    pub fn is_complete(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }
}

impl Default for CompletionFlag {
    fn default() -> Self {
        Self::new()
    }
}
