use crate::data::{Point, PointLocation};
use crate::{area, Error, FloatScalar};

/// Weights of a point relative to the corners `(a, b, c)` of a triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarycentricCoords<T> {
  pub u: T,
  pub v: T,
  pub w: T,
}

impl<T: FloatScalar> BarycentricCoords<T> {
  pub fn sum(&self) -> T {
    self.u + self.v + self.w
  }

  pub fn as_array(&self) -> [T; 3] {
    [self.u, self.v, self.w]
  }

  /// Classify the point the weights describe.
  ///
  /// `Inside` when every weight is in `(0, 1)`, `OnBoundary` when a weight is
  /// exactly zero and the others are in `[0, 1]`, `Outside` otherwise.
  /// Non-finite weights are `Outside`.
  pub fn locate(&self) -> PointLocation {
    let weights = self.as_array();
    let zero = T::zero();
    let one = T::one();
    if weights.iter().all(|&x| x > zero && x < one) {
      PointLocation::Inside
    } else if weights.iter().all(|&x| crate::in_range(x, zero, one))
      && weights.iter().any(|&x| x == zero)
    {
      PointLocation::OnBoundary
    } else {
      PointLocation::Outside
    }
  }

  pub fn is_inside(&self) -> bool {
    self.locate() == PointLocation::Inside
  }
}

impl<T> From<BarycentricCoords<T>> for [T; 3] {
  fn from(coords: BarycentricCoords<T>) -> [T; 3] {
    [coords.u, coords.v, coords.w]
  }
}

/// Express `p` as weights on the corners of triangle `(a, b, c)`.
///
/// `u = area(p, b, c) / area(a, b, c)`, `v = area(a, p, c) / area(a, b, c)`
/// and `w = 1 - u - v`. Works for either winding. A degenerate triangle
/// divides by zero and yields non-finite weights; see [`try_barycentric`].
///
/// ```rust
/// # use shadowgeom::barycentric;
/// # use shadowgeom::data::Point;
/// let a = Point::new([0.0_f32, 0.0]);
/// let b = Point::new([4.0, 0.0]);
/// let c = Point::new([0.0, 4.0]);
/// let coords = barycentric(&Point::new([1.0, 1.0]), &a, &b, &c);
/// assert_eq!(coords.as_array(), [0.5, 0.25, 0.25]);
/// ```
pub fn barycentric<T: FloatScalar>(
  p: &Point<T>,
  a: &Point<T>,
  b: &Point<T>,
  c: &Point<T>,
) -> BarycentricCoords<T> {
  let abc = area(a, b, c);
  let u = area(p, b, c) / abc;
  let v = area(a, p, c) / abc;
  let w = T::one() - u - v;
  BarycentricCoords { u, v, w }
}

/// [`barycentric`] that rejects a zero-area triangle instead of producing
/// non-finite weights.
pub fn try_barycentric<T: FloatScalar>(
  p: &Point<T>,
  a: &Point<T>,
  b: &Point<T>,
  c: &Point<T>,
) -> Result<BarycentricCoords<T>, Error> {
  if area(a, b, c).is_zero() {
    tracing::debug!(?a, ?b, ?c, "rejecting degenerate triangle");
    return Err(Error::DegenerateTriangle);
  }
  Ok(barycentric(p, a, b, c))
}
