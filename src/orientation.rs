use crate::data::{Point, Vector};
use crate::FloatScalar;

/// Turn direction as it appears on screen, with Y growing downward.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// Unlike [`area`], the sign is exact for every finite input: the
  /// predicate falls back to adaptive precision when the determinant is too
  /// close to zero to trust. NaN coordinates classify as
  /// [`Orientation::CoLinear`].
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use shadowgeom::data::Point;
  /// # use shadowgeom::Orientation;
  /// let p1 = Point::new([0.0_f32, 0.0]);
  /// let p2 = Point::new([0.0, 1.0]); // One unit below p1 on screen.
  /// assert!(Orientation::new(&p1, &p2, &Point::new([0.0, 2.0])).is_colinear());
  /// // Walking down the screen, -x is on the walker's right.
  /// assert!(Orientation::new(&p1, &p2, &Point::new([-1.0, 2.0])).is_cw());
  /// assert!(Orientation::new(&p1, &p2, &Point::new([1.0, 2.0])).is_ccw());
  /// ```
  pub fn new<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: FloatScalar,
  {
    let orient = geometry_predicates::predicates::orient2d(
      [p1[0].as_f64(), p1[1].as_f64()],
      [p2[0].as_f64(), p2[1].as_f64()],
      [p3[0].as_f64(), p3[1].as_f64()],
    );
    // orient2d has the same sign as `area`.
    if orient > 0.0 {
      Orientation::ClockWise
    } else if orient < 0.0 {
      Orientation::CounterClockWise
    } else {
      Orientation::CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn then(self, other: Orientation) -> Orientation {
    match self {
      Orientation::CoLinear => other,
      _ => self,
    }
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}

/// Twice the signed area of the triangle `a -> b -> c`.
///
/// Positive when the path turns clockwise on screen, that is when `c` lies
/// to the right of the directed line `a -> b` as drawn with Y pointing down.
/// Zero exactly when the points are exactly collinear. NaN and infinities
/// propagate.
///
/// ```rust
/// # use shadowgeom::area;
/// # use shadowgeom::data::Point;
/// let o = Point::new([0.0_f32, 0.0]);
/// let x = Point::new([1.0, 0.0]);
/// let y = Point::new([0.0, 1.0]);
/// assert_eq!(area(&o, &x, &y), 1.0);
/// assert_eq!(area(&o, &y, &x), -1.0);
/// ```
#[inline]
pub fn area<T: FloatScalar>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> T {
  let [ax, ay] = a.array;
  let [bx, by] = b.array;
  let [cx, cy] = c.array;
  ax * (by - cy) + bx * (cy - ay) + cx * (ay - by)
}

/// Scalar 2D cross product `a.x * b.y - a.y * b.x`. Same sign convention as
/// [`area`]: positive when `b` is clockwise from `a` on screen.
#[inline]
pub fn cross<T: FloatScalar>(a: &Vector<T>, b: &Vector<T>) -> T {
  a.0[0] * b.0[1] - a.0[1] * b.0[0]
}

/// Exact collinearity: `area(a, b, c) == 0`.
#[inline]
pub fn collinear<T: FloatScalar>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> bool {
  collinear_within(a, b, c, T::zero())
}

/// True iff `area(a, b, c)` lies in `[-tolerance, tolerance]`.
///
/// The tolerance is on the doubled signed area, not on a distance.
#[inline]
pub fn collinear_within<T: FloatScalar>(
  a: &Point<T>,
  b: &Point<T>,
  c: &Point<T>,
  tolerance: T,
) -> bool {
  crate::in_range(area(a, b, c), -tolerance, tolerance)
}

/// True iff `dir_test` points further away from `dir_middle` than
/// `dir_against` does, i.e. `dir_middle · dir_test < dir_middle · dir_against`.
///
/// This is an ordering of directions by their projection on `dir_middle`,
/// not a geometric intersection test. Ties are `false`.
#[inline]
pub fn more_opposed<T: FloatScalar>(
  dir_middle: &Vector<T>,
  dir_test: &Vector<T>,
  dir_against: &Vector<T>,
) -> bool {
  dir_middle.dot(dir_test) < dir_middle.dot(dir_against)
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::testing::*;

  use proptest::prelude::*;
  use test_strategy::proptest;

  const O: Point<f32> = Point::new([0.0, 0.0]);
  const X: Point<f32> = Point::new([1.0, 0.0]);
  const Y: Point<f32> = Point::new([0.0, 1.0]);

  #[test]
  fn area_sign_pinned() {
    assert_eq!(area(&O, &X, &Y), 1.0);
    assert_eq!(area(&O, &Y, &X), -1.0);
  }

  #[test]
  fn cross_sign_pinned() {
    assert_eq!(cross(&Vector([1.0_f32, 0.0]), &Vector([0.0, 1.0])), 1.0);
    assert_eq!(cross(&Vector([0.0_f32, 1.0]), &Vector([1.0, 0.0])), -1.0);
  }

  #[test]
  fn cross_matches_area_from_origin() {
    let a = Point::new([3.0_f32, -2.0]);
    let b = Point::new([5.0_f32, 7.0]);
    assert_eq!(cross(&a.as_vec(), &b.as_vec()), area(&O, &a, &b));
  }

  #[test]
  fn orientation_pinned() {
    assert_eq!(Orientation::new(&O, &X, &Y), Orientation::ClockWise);
    assert_eq!(Orientation::new(&O, &Y, &X), Orientation::CounterClockWise);
    assert_eq!(
      Orientation::new(&O, &X, &Point::new([2.0, 0.0])),
      Orientation::CoLinear
    );
  }

  #[test]
  fn orientation_nan_is_colinear() {
    let nan = Point::new([f32::NAN, 0.0]);
    assert_eq!(Orientation::new(&O, &X, &nan), Orientation::CoLinear);
  }

  #[test]
  fn area_propagates_nan() {
    let nan = Point::new([f32::NAN, 0.0]);
    assert!(area(&O, &X, &nan).is_nan());
    assert!(!collinear(&O, &X, &nan));
  }

  #[test]
  fn collinear_exact() {
    let a = Point::new([0.0_f32, 0.0]);
    let b = Point::new([1.0_f32, 1.0]);
    assert!(collinear(&a, &b, &Point::new([5.0, 5.0])));
    assert!(!collinear(&a, &b, &Point::new([5.0, 5.5])));
    assert!(collinear_within(&a, &b, &Point::new([5.0, 5.5]), 0.5));
    assert!(collinear_within(&a, &b, &Point::new([5.0, 4.5]), 0.5));
    assert!(!collinear_within(&a, &b, &Point::new([5.0, 5.5]), 0.49));
  }

  #[test]
  fn more_opposed_unit() {
    let right = Vector([1.0_f32, 0.0]);
    let left = Vector([-1.0_f32, 0.0]);
    let down = Vector([0.0_f32, 1.0]);
    assert!(more_opposed(&right, &left, &down));
    assert!(!more_opposed(&right, &down, &left));
    assert!(!more_opposed(&right, &down, &down));
  }

  #[test]
  fn then_breaks_ties() {
    use Orientation::*;
    assert_eq!(CoLinear.then(ClockWise), ClockWise);
    assert_eq!(CounterClockWise.then(ClockWise), CounterClockWise);
  }

  #[proptest]
  fn area_antisymmetric(
    #[strategy(any_finite())] a: Point<f32>,
    #[strategy(any_finite())] b: Point<f32>,
    #[strategy(any_finite())] c: Point<f32>,
  ) {
    prop_assert_eq!(area(&a, &b, &c), -area(&b, &a, &c));
  }

  #[proptest]
  fn collinear_iff_zero_area(
    #[strategy(any_small())] a: Point<f32>,
    #[strategy(any_small())] b: Point<f32>,
    #[strategy(any_small())] c: Point<f32>,
  ) {
    prop_assert_eq!(collinear(&a, &b, &c), area(&a, &b, &c) == 0.0);
  }

  #[proptest]
  fn collinear_monotonic(
    #[strategy(any_finite())] a: Point<f32>,
    #[strategy(any_finite())] b: Point<f32>,
    #[strategy(any_finite())] c: Point<f32>,
    #[strategy(0.0_f32..1e6)] t1: f32,
    #[strategy(0.0_f32..1e6)] extra: f32,
  ) {
    if collinear_within(&a, &b, &c, t1) {
      prop_assert!(collinear_within(&a, &b, &c, t1 + extra));
    }
  }

  // Small integer coordinates make `area` exact, so both must agree.
  #[proptest]
  fn orientation_matches_area_sign(
    #[strategy(any_small())] a: Point<f32>,
    #[strategy(any_small())] b: Point<f32>,
    #[strategy(any_small())] c: Point<f32>,
  ) {
    let expected = match area(&a, &b, &c) {
      x if x > 0.0 => Orientation::ClockWise,
      x if x < 0.0 => Orientation::CounterClockWise,
      _ => Orientation::CoLinear,
    };
    prop_assert_eq!(Orientation::new(&a, &b, &c), expected);
  }

  #[proptest]
  fn cross_antisymmetric(
    #[strategy(any_small_vec())] a: Vector<f32>,
    #[strategy(any_small_vec())] b: Vector<f32>,
  ) {
    prop_assert_eq!(cross(&a, &b), -cross(&b, &a));
  }

  #[proptest]
  fn more_opposed_is_strict_order(
    #[strategy(any_small_vec())] mid: Vector<f32>,
    #[strategy(any_small_vec())] a: Vector<f32>,
    #[strategy(any_small_vec())] b: Vector<f32>,
  ) {
    prop_assert!(!(more_opposed(&mid, &a, &b) && more_opposed(&mid, &b, &a)));
    prop_assert!(!more_opposed(&mid, &a, &a));
  }
}
