//! Running averages for streaming data
//!
//! This module provides a single-pass, constant-memory mean over a stream of
//! `f64` values.
//!
//! # Example
//!
//! ```
//! use efficient_averager::statistics::Accumulator;
//!
//! let mut avg = Accumulator::new();
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     avg.add(value);
//! }
//!
//! println!("Mean: {}", avg.mean());
//! println!("Count: {}", avg.count());
//! println!("As i32: {}", avg.as_i32());
//! ```

mod mean;
mod views;

pub use mean::Accumulator;
pub use views::ViewError;
