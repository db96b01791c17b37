//! BulkOutcome - aggregate result of a best-effort bulk call

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One rejected item within a bulk call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFailure {
    /// Position of the item in the list the caller submitted
    pub index: usize,
    pub reason: String,
}

impl ItemFailure {
    pub fn new(index: usize, reason: impl Into<String>) -> Self {
        Self {
            index,
            reason: reason.into(),
        }
    }
}

/// Counts plus per-item failures
///
/// `succeeded + failed == total` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkOutcome {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub failures: Vec<ItemFailure>,
}

impl BulkOutcome {
    /// Every item accepted
    pub fn all_succeeded(total: usize) -> Self {
        Self {
            total,
            succeeded: total,
            failed: 0,
            failures: Vec::new(),
        }
    }

    /// Build from the failures alone; everything else counts as succeeded
    pub fn from_failures(total: usize, failures: Vec<ItemFailure>) -> Self {
        Self::reconcile(total, total, failures)
    }

    /// Combine a reported success count with reported failures
    ///
    /// Failures outside `0..total` are dropped and duplicate indices are
    /// collapsed. Items the service neither confirmed nor rejected count as
    /// failed.
    pub fn reconcile(total: usize, reported_succeeded: usize, failures: Vec<ItemFailure>) -> Self {
        let mut by_index = BTreeMap::new();
        for failure in failures.into_iter().filter(|f| f.index < total) {
            by_index.entry(failure.index).or_insert(failure);
        }
        let failures: Vec<ItemFailure> = by_index.into_values().collect();

        let unconfirmed = total - reported_succeeded.min(total);
        let failed = unconfirmed.max(failures.len());

        Self {
            total,
            succeeded: total - failed,
            failed,
            failures,
        }
    }

    /// Fold in the outcome of a chunk that started at `offset`
    pub fn absorb(&mut self, chunk: BulkOutcome, offset: usize) {
        self.total += chunk.total;
        self.succeeded += chunk.succeeded;
        self.failed += chunk.failed;
        self.failures.extend(
            chunk
                .failures
                .into_iter()
                .map(|f| ItemFailure::new(f.index + offset, f.reason)),
        );
    }

    pub fn is_complete_success(&self) -> bool {
        self.failed == 0
    }

    /// Indices of failed items
    pub fn failed_indices(&self) -> Vec<usize> {
        self.failures.iter().map(|f| f.index).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_failures_conserves_count() {
        let outcome = BulkOutcome::from_failures(10, vec![ItemFailure::new(4, "schema violation")]);

        assert_eq!(outcome.total, 10);
        assert_eq!(outcome.succeeded, 9);
        assert_eq!(outcome.failed, 1);
        assert_eq!(outcome.succeeded + outcome.failed, outcome.total);
        assert_eq!(outcome.failed_indices(), vec![4]);
    }

    #[test]
    fn test_reconcile_unconfirmed_items_fail() {
        // Service claims 7 successes and only explains one failure
        let outcome = BulkOutcome::reconcile(10, 7, vec![ItemFailure::new(2, "bad")]);

        assert_eq!(outcome.succeeded, 7);
        assert_eq!(outcome.failed, 3);
        assert_eq!(outcome.failures.len(), 1);
    }

    #[test]
    fn test_reconcile_trusts_failures_over_counts() {
        let outcome = BulkOutcome::reconcile(
            5,
            5,
            vec![ItemFailure::new(0, "x"), ItemFailure::new(3, "y")],
        );

        assert_eq!(outcome.succeeded, 3);
        assert_eq!(outcome.failed, 2);
    }

    #[test]
    fn test_reconcile_drops_out_of_range_and_duplicates() {
        let outcome = BulkOutcome::reconcile(
            3,
            3,
            vec![
                ItemFailure::new(1, "first"),
                ItemFailure::new(1, "again"),
                ItemFailure::new(9, "nonsense"),
            ],
        );

        assert_eq!(outcome.failed, 1);
        assert_eq!(outcome.failures, vec![ItemFailure::new(1, "first")]);
    }

    #[test]
    fn test_reconcile_overreported_success_clamped() {
        let outcome = BulkOutcome::reconcile(4, 40, Vec::new());
        assert_eq!(outcome, BulkOutcome::all_succeeded(4));
    }

    #[test]
    fn test_absorb_rebases_indices() {
        let mut total = BulkOutcome::default();
        total.absorb(BulkOutcome::from_failures(3, vec![ItemFailure::new(1, "a")]), 0);
        total.absorb(BulkOutcome::from_failures(3, vec![ItemFailure::new(0, "b")]), 3);

        assert_eq!(total.total, 6);
        assert_eq!(total.succeeded, 4);
        assert_eq!(total.failed_indices(), vec![1, 3]);
    }
}
