//! Overflow-safe tests for whether a floating-point value is close enough to
//! zero to be treated as zero.
//!
//! Checking `value == 0.0` misses values that only differ from zero by
//! accumulated rounding noise, while dividing by an epsilon can overflow
//! large values or underflow subnormal ones. [`NearZero`] compares the
//! magnitude directly against a configured threshold instead.
//!
//! ```
//! use near_zero::NearZero64;
//!
//! let tester = NearZero64::new();
//! assert!(tester.is_zero(0));
//! assert!(!tester.is_zero(1.0));
//! ```

mod zero;

pub use zero::{NearZero, NearZero32, NearZero64, ZeroError, ZeroResult};
