//! Numeric views of the running mean
//!
//! `f64` is the canonical representation. The narrower views follow Rust's
//! `as` conversion rules and are silently lossy; the `try_` variants report
//! values that do not fit instead.

use super::Accumulator;

/// Error from a checked numeric view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    /// The mean is NaN or infinite
    NotFinite,
    /// The truncated mean does not fit the target type
    OutOfRange { target: &'static str },
}

impl core::fmt::Display for ViewError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ViewError::NotFinite => write!(f, "mean is not finite"),
            ViewError::OutOfRange { target } => {
                write!(f, "mean is out of range for {}", target)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ViewError {}

// Exclusive bounds: any f64 strictly between them truncates into range.
const I32_LOWER: f64 = -2_147_483_649.0;
const I32_UPPER: f64 = 2_147_483_648.0;
// -2^63 is exact and 2^63 - 1 is not representable, so the lower bound is inclusive.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

impl Accumulator {
    /// Mean as `f64`
    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.mean()
    }

    /// Mean narrowed to `f32`
    ///
    /// Rounds to the nearest `f32`; magnitudes past `f32::MAX` become infinite.
    #[inline]
    pub fn as_f32(&self) -> f32 {
        self.mean() as f32
    }

    /// Mean truncated toward zero to `i64`
    ///
    /// Saturates at the `i64` bounds. NaN becomes `0`.
    #[inline]
    pub fn as_i64(&self) -> i64 {
        self.mean() as i64
    }

    /// Mean truncated toward zero to `i64`, then cut to the low 32 bits
    ///
    /// Values outside the `i32` range wrap rather than saturate.
    ///
    /// ```
    /// use efficient_averager::statistics::Accumulator;
    ///
    /// let avg = Accumulator::with_start(-7.9);
    /// assert_eq!(avg.as_i32(), -7);
    ///
    /// let big = Accumulator::with_start(3_000_000_000.0);
    /// assert_eq!(big.as_i32(), -1_294_967_296);
    /// ```
    #[inline]
    pub fn as_i32(&self) -> i32 {
        self.as_i64() as i32
    }

    /// Mean truncated toward zero to `i64`, or an error if it does not fit
    pub fn try_as_i64(&self) -> Result<i64, ViewError> {
        let mean = self.checked_finite()?;
        if (I64_LOWER..I64_UPPER).contains(&mean) {
            Ok(mean as i64)
        } else {
            Err(self.out_of_range("i64"))
        }
    }

    /// Mean truncated toward zero to `i32`, or an error if it does not fit
    pub fn try_as_i32(&self) -> Result<i32, ViewError> {
        let mean = self.checked_finite()?;
        if mean > I32_LOWER && mean < I32_UPPER {
            Ok(mean as i32)
        } else {
            Err(self.out_of_range("i32"))
        }
    }

    fn checked_finite(&self) -> Result<f64, ViewError> {
        let mean = self.mean();
        if mean.is_finite() {
            Ok(mean)
        } else {
            #[cfg(feature = "tracing")]
            tracing::trace!(mean, "rejecting non-finite mean");

            Err(ViewError::NotFinite)
        }
    }

    fn out_of_range(&self, target: &'static str) -> ViewError {
        #[cfg(feature = "tracing")]
        tracing::trace!(mean = self.mean(), target, "mean out of range");

        ViewError::OutOfRange { target }
    }
}
