//! Measurement sinks handed to callbacks on every delivery.

use std::hint::black_box;

/// Observes values produced during a traversal.
///
/// A sink only has to make the value observable; it never influences the
/// traversal result.
pub trait Sink {
    /// Register `value` as observed.
    fn consume(&mut self, value: u64);
}

/// Sink that hides consumed values from the optimizer and keeps nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackHole;

impl Sink for BlackHole {
    #[inline]
    fn consume(&mut self, value: u64) {
        black_box(value);
    }
}

/// Sink that records every consumed value in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    values: Vec<u64>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Values consumed so far.
    #[must_use]
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// Number of values consumed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Forget everything consumed so far.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl Sink for RecordingSink {
    fn consume(&mut self, value: u64) {
        self.values.push(value);
    }
}
