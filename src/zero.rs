use num_traits::{AsPrimitive, Float};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZeroError {
    #[error("The threshold `{0}` is not a non-negative number.")]
    InvalidThreshold(f64),
}

pub type ZeroResult<T> = Result<T, ZeroError>;

/// Decides whether a value's magnitude is small enough to treat as zero.
///
/// The test is a direct magnitude comparison, `abs(value) < threshold`, with
/// no intermediate scaling. Dividing by an epsilon instead would overflow for
/// large values and underflow for subnormal ones; the direct comparison is
/// exact over the full representable range of `T`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct NearZero<T> {
    threshold: T,
}

pub type NearZero32 = NearZero<f32>;
pub type NearZero64 = NearZero<f64>;

impl<T: Float + 'static> NearZero<T> {
    /// Tester with the default threshold of twice the smallest positive
    /// normalized value of `T`.
    pub fn new() -> Self {
        let two = T::one() + T::one();
        Self {
            threshold: two * T::min_positive_value(),
        }
    }

    /// Tester with an explicit threshold. Negative and NaN thresholds are
    /// rejected.
    pub fn with_threshold(threshold: T) -> ZeroResult<Self> {
        if threshold >= T::zero() {
            Ok(Self { threshold })
        } else {
            Err(ZeroError::InvalidThreshold(
                threshold.to_f64().unwrap_or(f64::NAN),
            ))
        }
    }

    pub fn threshold(&self) -> T {
        self.threshold
    }

    /// Returns true if `value` is strictly closer to zero than the threshold.
    ///
    /// Accepts any numeric type castable to `T`, so integer literals work
    /// alongside native floats. NaN and infinite values are never near zero.
    pub fn is_zero<V>(&self, value: V) -> bool
    where
        V: AsPrimitive<T>,
    {
        value.as_().abs() < self.threshold
    }

    /// Snaps values within the threshold to exactly zero and returns all
    /// others unchanged.
    pub fn clamp(&self, value: T) -> T
    where
        T: AsPrimitive<T>,
    {
        if self.is_zero(value) {
            T::zero()
        } else {
            value
        }
    }
}

impl<T: Float + 'static> Default for NearZero<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for NearZero<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.threshold)
    }
}

impl<T: Serialize> Serialize for NearZero<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.threshold.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for NearZero<T>
where
    T: Float + 'static + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let threshold = T::deserialize(deserializer)?;
        Self::with_threshold(threshold).map_err(serde::de::Error::custom)
    }
}
