use super::{Point, PointLocation};
use crate::{BarycentricCoords, Error, FloatScalar, Orientation};
use claims::debug_assert_ok;

// A triangle with non-zero area, in either winding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T>([Point<T, 2>; 3]);

impl<T: FloatScalar> Triangle<T> {
  pub fn new(pts: [Point<T, 2>; 3]) -> Result<Triangle<T>, Error> {
    let triangle = Triangle(pts);
    triangle.validate()?;
    tracing::trace!(points = ?pts, "triangle");
    Ok(triangle)
  }

  /// Caller promises the corners are not collinear. Checked in debug builds.
  pub fn new_unchecked(pts: [Point<T, 2>; 3]) -> Triangle<T> {
    let triangle = Triangle(pts);
    debug_assert_ok!(triangle.validate());
    triangle
  }

  // O(1)
  pub fn validate(&self) -> Result<(), Error> {
    if self.signed_area_2x().is_zero() {
      Err(Error::DegenerateTriangle)
    } else {
      Ok(())
    }
  }

  pub fn points(&self) -> &[Point<T, 2>; 3] {
    &self.0
  }

  pub fn orientation(&self) -> Orientation {
    let [a, b, c] = &self.0;
    Orientation::new(a, b, c)
  }

  pub fn signed_area_2x(&self) -> T {
    let [a, b, c] = &self.0;
    crate::area(a, b, c)
  }

  pub fn signed_area(&self) -> T {
    self.signed_area_2x() / T::from_constant(2)
  }

  /// Mean of the three corners.
  pub fn centroid(&self) -> Point<T, 2> {
    let [a, b, c] = self.0;
    let three = T::from_constant(3);
    Point::new([(a[0] + b[0] + c[0]) / three, (a[1] + b[1] + c[1]) / three])
  }

  pub fn barycentric(&self, pt: &Point<T, 2>) -> BarycentricCoords<T> {
    let [a, b, c] = &self.0;
    crate::barycentric(pt, a, b, c)
  }

  // O(1)
  pub fn locate(&self, pt: &Point<T, 2>) -> PointLocation {
    self.barycentric(pt).locate()
  }
}
