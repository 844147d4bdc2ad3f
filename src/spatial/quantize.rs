use crate::math::{Real, POSITION_PRECISION};
use na::{Point, SVector};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

/// Scales `value` by `POSITION_PRECISION` and rounds it to the nearest integer.
///
/// Two values quantizing to the same integer are considered equal by every `PartialEq`
/// and `Hash` implementation of this crate.
#[inline]
pub fn quantize(value: Real) -> i64 {
    (value * POSITION_PRECISION).round() as i64
}

/// Values that can be compared and hashed up to the fixed rounding precision.
pub trait Quantize {
    /// The hashable integer key of this value.
    type Key: Copy + Eq + Hash + fmt::Debug;

    /// Computes the quantized key of this value.
    fn quantized(&self) -> Self::Key;

    /// Whether `self` and `other` quantize to the same key.
    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        self.quantized() == other.quantized()
    }
}

impl<const D: usize> Quantize for Point<Real, D> {
    type Key = [i64; D];

    #[inline]
    fn quantized(&self) -> [i64; D] {
        std::array::from_fn(|i| quantize(self[i]))
    }
}

impl<const D: usize> Quantize for SVector<Real, D> {
    type Key = [i64; D];

    #[inline]
    fn quantized(&self) -> [i64; D] {
        std::array::from_fn(|i| quantize(self[i]))
    }
}

/// A wrapper implementing `Eq` and `Hash` through quantization.
///
/// This allows points to be used as keys of hash maps and sets.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RoundedPoint<T>(pub T);

impl<T: Quantize> PartialEq for RoundedPoint<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.approx_eq(&other.0)
    }
}

impl<T: Quantize> Eq for RoundedPoint<T> {}

impl<T: Quantize> Hash for RoundedPoint<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.quantized().hash(state)
    }
}

impl<T> Deref for RoundedPoint<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for RoundedPoint<T> {
    #[inline]
    fn from(value: T) -> Self {
        RoundedPoint(value)
    }
}
