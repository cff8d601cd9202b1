//! Equivalence check across traversal strategies.
//!
//! Runs each strategy once per subscriber count on a fresh comparator and
//! confirms delivery counts, sender skipping, and per-subscriber counters all
//! line up before anything is benchmarked.

use serde::Serialize;

use crate::comparator::{Strategy, TraversalComparator};
use crate::error::Error;
use crate::result::Result;
use crate::sink::RecordingSink;

/// Deliveries one strategy reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrategyDeliveries {
    /// Strategy name, as in [`Strategy::as_str`]
    pub strategy: &'static str,
    /// Callbacks invoked by one traversal
    pub deliveries: usize,
}

/// Outcome of verifying one subscriber count.
///
/// Only produced when every strategy passed; violations are returned as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    /// Non-sender subscribers in the sequence
    pub subscriber_count: usize,
    /// One entry per strategy, in [`Strategy::ALL`] order
    pub deliveries: Vec<StrategyDeliveries>,
}

/// Verify every strategy for each subscriber count.
///
/// # Errors
///
/// Returns the first contract violation found.
pub fn verify(subscriber_counts: &[usize]) -> Result<Vec<VerificationReport>> {
    subscriber_counts
        .iter()
        .map(|&count| verify_count(&TraversalComparator::new(count), count))
        .collect()
}

/// Verify every strategy against an already built comparator.
///
/// Each subscriber must have been invoked the same number of times before the
/// call; the check relies on counters advancing in lockstep.
///
/// # Errors
///
/// Returns `DeliveryMismatch`, `SentinelInvoked`, or `CounterDrift` on the
/// first violation.
pub fn verify_count(
    comparator: &TraversalComparator,
    subscriber_count: usize,
) -> Result<VerificationReport> {
    let sender_before = comparator.sender().invocation_count();
    let mut deliveries = Vec::with_capacity(Strategy::ALL.len());
    let mut sink = RecordingSink::new();

    for strategy in Strategy::ALL {
        let baseline = lockstep_count(comparator);
        sink.clear();

        let delivered = comparator.traverse(strategy, &mut sink);

        let sender_after = comparator.sender().invocation_count();
        if sender_after != sender_before {
            return Err(Error::SentinelInvoked {
                strategy,
                invocations: sender_after.saturating_sub(sender_before),
            });
        }

        check_deliveries(strategy, subscriber_count, delivered, sink.len())?;

        let expected = baseline.saturating_add(1);
        for (index, subscriber) in delivered_subscribers(comparator).enumerate() {
            let actual = subscriber.invocation_count();
            if actual != expected {
                return Err(Error::CounterDrift {
                    strategy,
                    index,
                    expected,
                    actual,
                });
            }
        }

        if let Some(index) = sink.values().iter().position(|&value| value != baseline) {
            return Err(Error::CounterDrift {
                strategy,
                index,
                expected: baseline,
                actual: sink.values().get(index).copied().unwrap_or_default(),
            });
        }

        deliveries.push(StrategyDeliveries {
            strategy: strategy.as_str(),
            deliveries: delivered,
        });
    }

    tracing::info!(subscriber_count, "all strategies agree");

    Ok(VerificationReport {
        subscriber_count,
        deliveries,
    })
}

/// Both the returned count and the values the sink observed must equal
/// `subscriber_count`; the reported figure is whichever one is off.
fn check_deliveries(
    strategy: Strategy,
    subscriber_count: usize,
    returned: usize,
    observed: usize,
) -> Result<()> {
    if returned != subscriber_count {
        Err(Error::delivery_mismatch(strategy, subscriber_count, returned))
    } else if observed != subscriber_count {
        Err(Error::delivery_mismatch(strategy, subscriber_count, observed))
    } else {
        Ok(())
    }
}

fn delivered_subscribers(
    comparator: &TraversalComparator,
) -> impl Iterator<Item = &crate::callback::Subscriber> {
    comparator
        .subscribers()
        .iter()
        .filter(|s| !s.is(comparator.sender()))
}

fn lockstep_count(comparator: &TraversalComparator) -> u64 {
    delivered_subscribers(comparator)
        .next()
        .map_or(0, |s| s.invocation_count())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]
    #![allow(clippy::panic)]

    use super::*;
    use crate::callback::Callback;
    use crate::sink::BlackHole;

    #[test]
    fn test_verify_default_counts() {
        let reports = verify(&[0, 1, 10, 100, 1000]).unwrap();
        assert_eq!(reports.len(), 5);
        for report in &reports {
            assert_eq!(report.deliveries.len(), 3);
            assert!(
                report
                    .deliveries
                    .iter()
                    .all(|d| d.deliveries == report.subscriber_count)
            );
        }
    }

    #[test]
    fn test_verify_count_after_warm_traversals() {
        let comparator = TraversalComparator::with_sender(Callback::subscriber(), 4);
        comparator.iterator(&mut BlackHole);
        comparator.stream(&mut BlackHole);

        let report = verify_count(&comparator, 4).unwrap();
        assert!(report.deliveries.iter().all(|d| d.deliveries == 4));
    }

    #[test]
    fn test_wrong_expected_count_is_reported() {
        let comparator = TraversalComparator::with_sender(Callback::subscriber(), 3);
        let result = verify_count(&comparator, 2);
        assert!(matches!(
            result,
            Err(Error::DeliveryMismatch {
                strategy: Strategy::Stream,
                subscriber_count: 2,
                deliveries: 3,
            })
        ));
    }

    #[test]
    fn test_uncounted_sink_deliveries_report_observed_count() {
        // Returned count looks right, but the sink saw an extra value.
        let result = check_deliveries(Strategy::Iterator, 5, 5, 6);
        match result {
            Err(Error::DeliveryMismatch {
                strategy,
                subscriber_count,
                deliveries,
            }) => {
                assert_eq!(strategy, Strategy::Iterator);
                assert_eq!(subscriber_count, 5);
                assert_eq!(deliveries, 6);
            }
            other => panic!("expected delivery mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_returned_count_is_checked_first() {
        let result = check_deliveries(Strategy::Stream, 5, 4, 6);
        assert!(matches!(
            result,
            Err(Error::DeliveryMismatch { deliveries: 4, .. })
        ));
        assert!(check_deliveries(Strategy::Stream, 5, 5, 5).is_ok());
    }

    #[test]
    fn test_uneven_counters_are_reported() {
        let comparator = TraversalComparator::with_sender(Callback::subscriber(), 3);
        comparator.subscribers()[2].accept(&mut BlackHole);
        let result = verify_count(&comparator, 3);
        assert!(matches!(result, Err(Error::CounterDrift { .. })));
    }

    #[test]
    fn test_report_serializes_strategy_names() {
        let comparator = TraversalComparator::with_sender(Callback::subscriber(), 1);
        let report = verify_count(&comparator, 1).unwrap();
        let names: Vec<_> = report.deliveries.iter().map(|d| d.strategy).collect();
        assert_eq!(names, vec!["stream", "iterator", "indexed_for_loop"]);
    }
}
