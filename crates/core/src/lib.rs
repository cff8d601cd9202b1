//! # fanout-core
//!
//! Callback handles, measurement sinks, and the traversal comparator used by
//! the fanout benchmark.
//!
//! A [`TraversalComparator`] holds a sequence of subscribers headed by the
//! process-wide sender. Its three strategies ([`Strategy::Stream`],
//! [`Strategy::Iterator`], [`Strategy::IndexedForLoop`]) deliver a [`Sink`] to
//! every subscriber except the sender and return the number of deliveries.
//!
//! ```
//! use fanout_core::{BlackHole, Strategy, TraversalComparator};
//!
//! let comparator = TraversalComparator::new(10);
//! for strategy in Strategy::ALL {
//!     assert_eq!(comparator.traverse(strategy, &mut BlackHole), 10);
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod callback;
pub mod comparator;
pub mod config;
pub mod error;
pub mod result;
pub mod sink;
pub mod verify;

pub use callback::{Callback, Subscriber, sender};
pub use comparator::{Strategy, TraversalComparator};
pub use config::{BenchConfig, CONFIG_ENV_VAR};
pub use error::Error;
pub use result::Result;
pub use sink::{BlackHole, RecordingSink, Sink};
pub use verify::{StrategyDeliveries, VerificationReport, verify, verify_count};
