use super::{Point, Vector};
use crate::FloatScalar;

///////////////////////////////////////////////////////////////////////////////
// DirectedEdge

#[derive(Debug, PartialEq)]
// Directed edge from A to B, including A and excluding B.
pub struct DirectedEdge<'a, T, const N: usize = 2> {
  pub src: &'a Point<T, N>,
  pub dst: &'a Point<T, N>,
}

impl<T, const N: usize> Copy for DirectedEdge<'_, T, N> {}
impl<T, const N: usize> Clone for DirectedEdge<'_, T, N> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T: FloatScalar> DirectedEdge<'_, T, 2> {
  pub fn vector(&self) -> Vector<T, 2> {
    *self.dst - *self.src
  }

  /// The edge's shoelace term `src.x * dst.y - dst.x * src.y`.
  pub fn shoelace(&self) -> T {
    crate::cross(&self.src.as_vec(), &self.dst.as_vec())
  }
}

/// Edges `(p[i], p[(i + 1) % n])`, closing edge included. Yields nothing for
/// an empty slice and a single zero-length edge for one point.
pub fn edges<T, const N: usize>(
  points: &[Point<T, N>],
) -> impl Iterator<Item = DirectedEdge<'_, T, N>> + Clone + '_ {
  points
    .iter()
    .zip(points.iter().cycle().skip(1))
    .map(|(src, dst)| DirectedEdge { src, dst })
}
