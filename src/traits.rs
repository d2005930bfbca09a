//! Core traits for streaming aggregates
//!
//! Every aggregate implements the base [`Accumulate`] trait; aggregates that
//! can report a central value also implement [`MeanAccumulate`].

use core::fmt::Debug;

/// Core trait for constant-memory streaming aggregates
pub trait Accumulate: Clone + Debug {
    /// The type of item this aggregate processes
    type Item: ?Sized;

    /// Fold an item into the aggregate
    fn update(&mut self, item: &Self::Item);

    /// Merge another aggregate into this one
    ///
    /// The result is the aggregate that would have been produced by feeding
    /// both streams into a single instance.
    fn merge(&mut self, other: &Self);

    /// Reset to the empty state
    fn clear(&mut self);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of items processed
    fn count(&self) -> u64;

    /// Check if nothing has been processed
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Aggregates that track an arithmetic mean
pub trait MeanAccumulate: Accumulate {
    /// Current mean, `0.0` when empty
    fn mean(&self) -> f64;

    /// Total reconstructed from the mean and the count
    fn sum(&self) -> f64 {
        self.mean() * self.count() as f64
    }
}
