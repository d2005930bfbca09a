//! Running arithmetic mean in constant memory
//!
//! Every new value is folded into the mean with
//! `mean = (mean * count + value) / (count + 1)`, so only the mean and the
//! count are ever stored.

use core::fmt;
use core::ops::ShlAssign;

use crate::traits::{Accumulate, MeanAccumulate};

/// Running mean over a stream of `f64` values
///
/// Holds exactly two fields, the mean so far and the number of values folded
/// into it. Mutating calls return `&mut Self` so they can be chained; the
/// returned reference is the accumulator itself, not a copy.
///
/// NaN and infinities are not filtered. Once one reaches the mean it stays
/// there, following IEEE-754 rules, until [`reset`](Self::reset).
///
/// # Example
///
/// ```
/// use efficient_averager::statistics::Accumulator;
///
/// let mut avg = Accumulator::new();
/// avg.add(13.0).add_all([55.0, 712.197, 18.0, 99.0]);
///
/// assert_eq!(avg.count(), 5);
/// assert!((avg.mean() - 179.4394).abs() < 1e-9);
///
/// avg.reset();
/// assert_eq!(avg.mean(), 0.0);
/// assert_eq!(avg.count(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Accumulator {
    /// Running mean
    mean: f64,
    /// Number of values folded into `mean`
    count: u64,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self {
            mean: 0.0,
            count: 0,
        }
    }

    /// Create an accumulator that has already seen one value
    ///
    /// ```
    /// use efficient_averager::statistics::Accumulator;
    ///
    /// let avg = Accumulator::with_start(13.0);
    /// assert_eq!(avg.mean(), 13.0);
    /// assert_eq!(avg.count(), 1);
    /// ```
    pub const fn with_start(start: f64) -> Self {
        Self {
            mean: start,
            count: 1,
        }
    }

    /// Fold one value into the mean
    #[inline]
    pub fn add(&mut self, value: f64) -> &mut Self {
        let count = self.count as f64;
        self.mean = (self.mean * count + value) / (count + 1.0);
        self.count += 1;
        self
    }

    /// Fold every value into the mean, in iteration order
    pub fn add_all<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = f64>,
    {
        for value in values {
            self.add(value);
        }
        self
    }

    /// Get the mean, `0.0` when empty
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Get the number of values folded into the mean
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the total implied by the mean and the count
    pub fn sum(&self) -> f64 {
        self.mean * self.count as f64
    }

    /// Discard everything seen so far
    pub fn reset(&mut self) -> &mut Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            mean = self.mean,
            count = self.count,
            "resetting accumulator"
        );

        *self = Self::new();
        self
    }

    /// Fold another accumulator into this one
    ///
    /// Weights both means by their counts, so the result matches adding the
    /// other stream's values here, up to rounding.
    pub fn merge_mean(&mut self, other: &Self) -> &mut Self {
        if other.count == 0 {
            return self;
        }

        if self.count == 0 {
            *self = *other;
            return self;
        }

        let combined_count = self.count + other.count;
        self.mean = (self.sum() + other.sum()) / combined_count as f64;
        self.count = combined_count;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            mean = self.mean,
            count = self.count,
            merged = other.count,
            "merged accumulator"
        );

        self
    }
}

impl Accumulate for Accumulator {
    type Item = f64;

    fn update(&mut self, item: &Self::Item) {
        self.add(*item);
    }

    fn merge(&mut self, other: &Self) {
        self.merge_mean(other);
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl MeanAccumulate for Accumulator {
    fn mean(&self) -> f64 {
        self.mean
    }
}

impl From<f64> for Accumulator {
    fn from(start: f64) -> Self {
        Self::with_start(start)
    }
}

impl From<Accumulator> for f64 {
    fn from(avg: Accumulator) -> Self {
        avg.mean
    }
}

impl From<&Accumulator> for f64 {
    fn from(avg: &Accumulator) -> Self {
        avg.mean
    }
}

impl Extend<f64> for Accumulator {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a> Extend<&'a f64> for Accumulator {
    fn extend<I: IntoIterator<Item = &'a f64>>(&mut self, iter: I) {
        self.add_all(iter.into_iter().copied());
    }
}

impl FromIterator<f64> for Accumulator {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut avg = Self::new();
        avg.add_all(iter);
        avg
    }
}

impl<'a> FromIterator<&'a f64> for Accumulator {
    fn from_iter<I: IntoIterator<Item = &'a f64>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

/// `avg <<= value` folds `value` into the mean, same as [`Accumulator::add`]
impl ShlAssign<f64> for Accumulator {
    fn shl_assign(&mut self, value: f64) {
        self.add(value);
    }
}

impl fmt::Display for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.mean, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let avg = Accumulator::new();

        assert!(avg.is_empty());
        assert_eq!(avg.mean(), 0.0);
        assert_eq!(avg.count(), 0);
        assert_eq!(avg.sum(), 0.0);
        assert_eq!(avg, Accumulator::default());
    }

    #[test]
    fn test_with_start_is_exact() {
        for start in [13.0, -0.1, 1e308, f64::MIN_POSITIVE] {
            let avg = Accumulator::with_start(start);
            assert_eq!(avg.count(), 1);
            assert_eq!(avg.mean().to_bits(), start.to_bits());
        }
    }

    #[test]
    fn test_seeded_then_add() {
        let mut avg = Accumulator::with_start(13.0);
        avg.add(3.0);

        assert_eq!(avg.count(), 2);
        assert_eq!(avg.mean(), 8.0);

        avg.add_all([5.0, 12.0, 8.0, 7.3]);

        assert_eq!(avg.count(), 6);
        assert!((avg.mean() - 8.05).abs() < 1e-9);
    }

    #[test]
    fn test_chaining_returns_self() {
        let mut avg = Accumulator::new();
        let before: *const Accumulator = &avg;

        let returned: *const Accumulator = avg.add(1.0).add_all([2.0, 3.0]).reset().add(4.0);

        assert!(core::ptr::eq(before, returned));
        assert_eq!(avg.count(), 1);
        assert_eq!(avg.mean(), 4.0);
    }

    #[test]
    fn test_add_all_empty_is_noop() {
        let mut avg = Accumulator::with_start(2.5);
        let snapshot = avg;

        avg.add_all(core::iter::empty::<f64>());

        assert_eq!(avg, snapshot);
    }

    #[test]
    fn test_add_all_matches_sequential_add() {
        let values = [0.1, 0.7, -3.3, 1e12, 42.0];

        let mut batched = Accumulator::new();
        batched.add_all(values);

        let mut sequential = Accumulator::new();
        for v in values {
            sequential.add(v);
        }

        assert_eq!(batched.count(), sequential.count());
        assert_eq!(batched.mean().to_bits(), sequential.mean().to_bits());
    }

    #[test]
    fn test_reset() {
        let mut avg = Accumulator::with_start(10.0);
        avg.add_all([1.0, f64::NAN, 3.0]);

        avg.reset();

        assert!(avg.is_empty());
        assert_eq!(avg.mean(), 0.0);
        assert_eq!(avg.count(), 0);

        avg.add(7.0);
        assert_eq!(avg.mean(), 7.0);
    }

    #[test]
    fn test_nan_propagates() {
        let mut avg = Accumulator::new();

        avg.add(1.0).add(f64::NAN).add(2.0);

        assert_eq!(avg.count(), 3);
        assert!(avg.mean().is_nan());
    }

    #[test]
    fn test_infinity_propagates() {
        let mut avg = Accumulator::new();

        avg.add(1.0).add(f64::INFINITY).add(2.0);
        assert_eq!(avg.mean(), f64::INFINITY);

        // inf + -inf
        avg.add(f64::NEG_INFINITY);
        assert!(avg.mean().is_nan());
        assert_eq!(avg.count(), 4);
    }

    #[test]
    fn test_extreme_i32_bounds() {
        let mut avg = Accumulator::new();
        avg.add_all([-2147483648.0, 2147483647.0, 2147483647.0, -2147483648.0]);

        assert_eq!(avg.mean(), -0.5);
        assert_eq!(avg.count(), 4);
    }

    #[test]
    fn test_merge() {
        let mut a: Accumulator = [1.0, 2.0, 3.0].into_iter().collect();
        let b: Accumulator = [4.0, 5.0, 6.0].into_iter().collect();

        a.merge_mean(&b);

        assert_eq!(a.count(), 6);
        assert!((a.mean() - 3.5).abs() < 1e-12);
        assert!((a.sum() - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_merge_empty() {
        let mut a = Accumulator::with_start(4.0);
        a.merge_mean(&Accumulator::new());
        assert_eq!(a, Accumulator::with_start(4.0));

        let mut empty = Accumulator::new();
        empty.merge_mean(&a);
        assert_eq!(empty, a);
    }

    #[test]
    fn test_trait_surface() {
        let mut avg = Accumulator::new();

        Accumulate::update(&mut avg, &2.0);
        Accumulate::update(&mut avg, &4.0);

        assert_eq!(Accumulate::count(&avg), 2);
        assert_eq!(MeanAccumulate::mean(&avg), 3.0);
        assert_eq!(MeanAccumulate::sum(&avg), 6.0);
        assert_eq!(avg.size_bytes(), 16);

        Accumulate::clear(&mut avg);
        assert!(Accumulate::is_empty(&avg));
    }

    #[test]
    fn test_extend_and_collect() {
        let values = [5.0, 12.0, 8.0, 7.3];

        let mut extended = Accumulator::with_start(13.0);
        extended.add(3.0);
        extended.extend(values.iter());

        let mut added = Accumulator::with_start(13.0);
        added.add(3.0).add_all(values);

        assert_eq!(extended, added);

        let collected: Accumulator = values.iter().collect();
        assert_eq!(collected.count(), 4);
        assert!((collected.mean() - 8.075).abs() < 1e-12);
    }

    #[test]
    fn test_shl_assign_matches_add() {
        let mut shifted = Accumulator::with_start(13.0);
        shifted <<= 3.0;
        assert_eq!(shifted.count(), 2);
        assert_eq!(shifted.mean(), 8.0);

        for v in [5.0, 12.0, 8.0, 7.3] {
            shifted <<= v;
        }

        let mut added = Accumulator::with_start(13.0);
        added.add(3.0).add_all([5.0, 12.0, 8.0, 7.3]);

        assert_eq!(shifted.count(), added.count());
        assert_eq!(shifted.mean().to_bits(), added.mean().to_bits());
    }

    #[test]
    fn test_conversions() {
        let avg = Accumulator::from(2.5);
        assert_eq!(avg.count(), 1);

        assert_eq!(f64::from(&avg), 2.5);
        assert_eq!(f64::from(avg), 2.5);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_display() {
        let mut avg = Accumulator::new();
        avg.add_all([1.0, 2.0]);

        assert_eq!(avg.to_string(), "1.5");
        assert_eq!(format!("{:.3}", avg), "1.500");
        assert_eq!(format!("{:>6}", avg), "   1.5");
    }

    #[test]
    fn test_numerical_stability() {
        let mut avg = Accumulator::new();

        let base = 1e12;
        for i in 0..1000 {
            avg.add(base + i as f64);
        }

        let expected_mean = base + 499.5;
        assert!(
            (avg.mean() - expected_mean).abs() < 1.0,
            "Mean: {} expected: {}",
            avg.mean(),
            expected_mean
        );
    }
}
