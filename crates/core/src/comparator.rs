//! The traversal comparator: one subscriber sequence, three ways to walk it.
//!
//! Every strategy invokes each subscriber except the sender with the same sink,
//! in sequence order, and returns the number of deliveries. They differ only
//! in the shape of the loop, which is what the benchmark measures.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::callback::{Callback, Subscriber, sender};
use crate::error::Error;
use crate::sink::Sink;

/// Loop shape used to walk the subscriber sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Filter out the sender, then `for_each` over the rest.
    Stream,
    /// Sequential iterator with an explicit identity check.
    Iterator,
    /// Integer index from `0` to `len - 1`.
    IndexedForLoop,
}

impl Strategy {
    /// All strategies, in benchmark order.
    pub const ALL: [Self; 3] = [Self::Stream, Self::Iterator, Self::IndexedForLoop];

    /// Stable name used for benchmark ids and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stream => "stream",
            Self::Iterator => "iterator",
            Self::IndexedForLoop => "indexed_for_loop",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| Error::invalid_config(format!("unknown strategy '{s}'")))
    }
}

/// Holds the subscriber sequence and the sender it must skip.
#[derive(Debug, Clone)]
pub struct TraversalComparator {
    sender: Subscriber,
    subscribers: Vec<Subscriber>,
}

impl TraversalComparator {
    /// Build a sequence of the process-wide sender followed by
    /// `subscriber_count` fresh callbacks.
    #[must_use]
    pub fn new(subscriber_count: usize) -> Self {
        Self::with_sender(Arc::clone(sender()), subscriber_count)
    }

    /// Same as [`TraversalComparator::new`] but skipping a caller-supplied sender.
    #[must_use]
    pub fn with_sender(sender: Subscriber, subscriber_count: usize) -> Self {
        let mut comparator = Self {
            sender,
            subscribers: Vec::new(),
        };
        comparator.setup(subscriber_count);
        comparator
    }

    /// Rebuild the sequence as `[sender, h1, .., hN]`, dropping the old one.
    pub fn setup(&mut self, subscriber_count: usize) {
        self.subscribers.clear();
        self.subscribers.reserve(subscriber_count.saturating_add(1));
        self.subscribers.push(Arc::clone(&self.sender));
        self.subscribers
            .extend(std::iter::repeat_with(Callback::subscriber).take(subscriber_count));

        tracing::debug!(
            subscriber_count,
            sequence_len = self.subscribers.len(),
            "subscriber sequence built"
        );
    }

    /// The sender this comparator skips.
    #[must_use]
    pub const fn sender(&self) -> &Subscriber {
        &self.sender
    }

    /// The full sequence, sender included.
    #[must_use]
    pub fn subscribers(&self) -> &[Subscriber] {
        &self.subscribers
    }

    /// Sequence length, sender included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Always false once constructed; the sender is part of the sequence.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    fn is_sender(&self, subscriber: &Subscriber) -> bool {
        Arc::ptr_eq(subscriber, &self.sender)
    }

    /// Walk the sequence with the given strategy.
    pub fn traverse<S: Sink + ?Sized>(&self, strategy: Strategy, sink: &mut S) -> usize {
        match strategy {
            Strategy::Stream => self.stream(sink),
            Strategy::Iterator => self.iterator(sink),
            Strategy::IndexedForLoop => self.indexed_for_loop(sink),
        }
    }

    /// Count deliveries up front, then filter out the sender and deliver.
    #[inline(never)]
    pub fn stream<S: Sink + ?Sized>(&self, sink: &mut S) -> usize {
        let deliveries = if self.subscribers.iter().any(|s| self.is_sender(s)) {
            self.subscribers.len().saturating_sub(1)
        } else {
            self.subscribers.len()
        };

        self.subscribers
            .iter()
            .filter(|subscriber| !self.is_sender(subscriber))
            .for_each(|subscriber| subscriber.accept(sink));

        deliveries
    }

    /// Deliver front to back through a sequential iterator.
    #[inline(never)]
    pub fn iterator<S: Sink + ?Sized>(&self, sink: &mut S) -> usize {
        let mut deliveries = 0;
        for subscriber in &self.subscribers {
            if !self.is_sender(subscriber) {
                subscriber.accept(sink);
                deliveries += 1;
            }
        }

        deliveries
    }

    /// Deliver by integer index.
    #[inline(never)]
    pub fn indexed_for_loop<S: Sink + ?Sized>(&self, sink: &mut S) -> usize {
        let mut deliveries = 0;
        for i in 0..self.subscribers.len() {
            if let Some(subscriber) = self.subscribers.get(i) {
                if !self.is_sender(subscriber) {
                    subscriber.accept(sink);
                    deliveries += 1;
                }
            }
        }

        deliveries
    }
}
