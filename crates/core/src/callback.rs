//! Callback handles and the process-wide sender sentinel.
//!
//! Handles are compared by identity only. Two callbacks that have seen the
//! same number of invocations are still different subscribers, so `Callback`
//! has no `PartialEq`; use [`Callback::is`] or [`Arc::ptr_eq`].

use std::ptr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

use crate::sink::Sink;

/// Shared handle to a callback, as stored in a traversal sequence.
pub type Subscriber = Arc<Callback>;

static SENDER: LazyLock<Subscriber> = LazyLock::new(|| Arc::new(Callback::new()));

/// The sender sentinel shared by every comparator in the process.
#[must_use]
pub fn sender() -> &'static Subscriber {
    &SENDER
}

/// A unit of work that counts its own invocations.
#[derive(Debug, Default)]
pub struct Callback {
    // Atomic so the sentinel can live in a static; traversals are single-threaded.
    invocations: AtomicU64,
}

impl Callback {
    /// Create a callback that has never been invoked.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            invocations: AtomicU64::new(0),
        }
    }

    /// Create a fresh shared handle.
    #[must_use]
    pub fn subscriber() -> Subscriber {
        Arc::new(Self::new())
    }

    /// Invoke the callback: hand the pre-increment counter to `sink`.
    #[inline]
    pub fn accept<S: Sink + ?Sized>(&self, sink: &mut S) {
        sink.consume(self.invocations.fetch_add(1, Ordering::Relaxed));
    }

    /// Number of times this callback has been invoked.
    #[must_use]
    pub fn invocation_count(&self) -> u64 {
        self.invocations.load(Ordering::Relaxed)
    }

    /// Identity comparison.
    #[must_use]
    pub fn is(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}
