// Quarter turns and arbitrary rotations.
//
// The cw/ccw names read the formulas in a Y-up frame. Drawn with Y pointing
// down, `rotate_90_cw` turns a vector a quarter counterclockwise on screen.
// All three functions rotate in the same sense: `rotate(v, FRAC_PI_2)` is
// `rotate_90_cw(v)` up to rounding.
use crate::data::Vector;
use crate::FloatScalar;

/// `(x, y) -> (y, -x)`. Exact.
#[inline]
pub fn rotate_90_cw<T: FloatScalar>(v: &Vector<T>) -> Vector<T> {
  let [x, y] = v.0;
  Vector([y, -x])
}

/// `(x, y) -> (-y, x)`. Exact inverse of [`rotate_90_cw`].
#[inline]
pub fn rotate_90_ccw<T: FloatScalar>(v: &Vector<T>) -> Vector<T> {
  let [x, y] = v.0;
  Vector([-y, x])
}

/// Rotate `v` by `angle` radians. Positive angles turn the same way as
/// [`rotate_90_cw`].
///
/// ```rust
/// # use shadowgeom::{rotate, rotate_90_cw};
/// # use shadowgeom::data::Vector;
/// let v = Vector([0.6_f32, -0.8]);
/// let quarter = rotate(&v, std::f32::consts::FRAC_PI_2);
/// assert!(quarter.near_equal(&rotate_90_cw(&v)));
/// ```
#[inline]
pub fn rotate<T: FloatScalar>(v: &Vector<T>, angle: T) -> Vector<T> {
  let (s, c) = angle.sin_cos();
  let [x, y] = v.0;
  Vector([x * c + y * s, -x * s + y * c])
}
