use crate::data::{edges, Point};
use crate::{Error, FloatScalar};

/// Shoelace sum over the closed polyline: twice the signed polygon area.
///
/// Positive for polygons wound clockwise on screen.
pub fn signed_area_2x<T: FloatScalar>(points: &[Point<T>]) -> T {
  edges(points).fold(T::zero(), |acc, edge| acc + edge.shoelace())
}

/// Area centroid of a simple polygon, in either winding.
///
/// Each edge contributes its midpoint weighted by its shoelace term; the sum
/// is normalised by `6 * A` where `A` is the signed area. A polygon with zero
/// area divides by zero and the result is non-finite. Use [`try_centroid`] to
/// reject such input instead.
///
/// ```rust
/// # use shadowgeom::centroid;
/// # use shadowgeom::data::Point;
/// let square = [
///   Point::new([0.0_f32, 0.0]),
///   Point::new([4.0, 0.0]),
///   Point::new([4.0, 4.0]),
///   Point::new([0.0, 4.0]),
/// ];
/// assert_eq!(centroid(&square), Point::new([2.0, 2.0]));
/// ```
pub fn centroid<T: FloatScalar>(points: &[Point<T>]) -> Point<T> {
  let (area_2x, cx, cy) = edges(points).fold(
    (T::zero(), T::zero(), T::zero()),
    |(area_2x, cx, cy), edge| {
      let term = edge.shoelace();
      let [px, py] = edge.src.array;
      let [qx, qy] = edge.dst.array;
      (area_2x + term, cx + (px + qx) * term, cy + (py + qy) * term)
    },
  );
  let area = area_2x / T::from_constant(2);
  let six_area = T::from_constant(6) * area;
  Point::new([cx / six_area, cy / six_area])
}

/// [`centroid`] for input that may not be a proper polygon.
pub fn try_centroid<T: FloatScalar>(points: &[Point<T>]) -> Result<Point<T>, Error> {
  if points.len() < 3 {
    tracing::debug!(vertices = points.len(), "too few vertices for a centroid");
    return Err(Error::InsufficientVertices);
  }
  if signed_area_2x(points).is_zero() {
    tracing::debug!(vertices = points.len(), "polygon has zero area");
    return Err(Error::DegenerateArea);
  }
  Ok(centroid(points))
}
