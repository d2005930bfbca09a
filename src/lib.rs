//! # Efficient Averager
//!
//! Constant-memory running mean for streams of floating-point numbers.
//!
//! An [`Accumulator`] folds every value it sees into a mean using only two
//! scalar fields, an `f64` mean and a `u64` count, no matter how long the
//! stream is. The individual values are never stored.
//!
//! ## Quick Start
//!
//! ```rust
//! use efficient_averager::prelude::*;
//!
//! let mut avg = Accumulator::with_start(13.0);
//! avg.add(3.0).add_all([5.0, 12.0, 8.0, 7.3]);
//!
//! assert_eq!(avg.count(), 6);
//! assert!((avg.mean() - 8.05).abs() < 1e-9);
//! ```
//!
//! ## Combining Workers
//!
//! Accumulators implement [`Accumulate`](traits::Accumulate), whose `merge`
//! folds another accumulator in as if its values had been added directly:
//!
//! ```rust
//! use efficient_averager::statistics::Accumulator;
//! use efficient_averager::traits::Accumulate;
//!
//! let mut worker1: Accumulator = [1.0, 2.0, 3.0].into_iter().collect();
//! let worker2: Accumulator = [4.0, 5.0, 6.0].into_iter().collect();
//!
//! worker1.merge(&worker2);
//! assert_eq!(worker1.count(), 6);
//! assert!((worker1.mean() - 3.5).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support. Without it the crate is `no_std`.
//! - `tracing`: Emit `tracing` events on reset, merge and rejected checked views.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod statistics;
pub mod traits;

pub mod prelude {
    pub use crate::statistics::{Accumulator, ViewError};
    pub use crate::traits::*;
}

pub use statistics::Accumulator;
