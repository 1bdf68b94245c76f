use crate::data::Point;
use crate::FloatScalar;

/// `min <= value <= max`. NaN is never in range.
#[inline]
pub fn in_range<T: FloatScalar>(value: T, min: T, max: T) -> bool {
  value >= min && value <= max
}

/// Scalars differ by at most [`FloatScalar::NEAR_EPSILON`].
#[inline]
pub fn near_equal_scalar<T: FloatScalar>(a: T, b: T) -> bool {
  (a - b).abs() <= T::NEAR_EPSILON
}

/// Component-wise near-equality of two points.
///
/// Each coordinate is compared on its own against
/// [`FloatScalar::NEAR_EPSILON`]; this is not a distance test. The relation
/// is reflexive and symmetric but not transitive.
#[inline]
pub fn near_equal<T: FloatScalar>(a: &Point<T>, b: &Point<T>) -> bool {
  near_equal_scalar(a.array[0], b.array[0]) && near_equal_scalar(a.array[1], b.array[1])
}
