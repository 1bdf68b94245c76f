// This module contains strategies for:
//  * points and vectors
//  * non-degenerate triangles
//  * vertex loops of simple (star-shaped) polygons
// Small-integer coordinates keep area sums exact in f32, which lets the exact
// predicates be tested without tolerances.
use crate::data::{Point, Triangle, Vector};

use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;
use proptest::strategy::*;
use std::convert::TryInto;

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;
type FilterMapped<I, O> = FilterMap<StrategyFor<I>, fn(_: I) -> Option<O>>;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary point

impl<T: Arbitrary, const N: usize> Arbitrary for Point<T, N>
where
  T::Strategy: Clone,
  T::Parameters: Clone,
  T: Clone,
{
  type Strategy = Mapped<Vec<T>, Point<T, N>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    vec(any_with::<T>(params), N).prop_map(|vec: Vec<T>| Point {
      array: vec.try_into().unwrap(),
    })
  }
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary Vector

impl<T: Arbitrary, const N: usize> Arbitrary for Vector<T, N>
where
  T::Strategy: Clone,
  T::Parameters: Clone,
  T: Clone,
{
  type Strategy = Mapped<Point<T, N>, Vector<T, N>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    Point::<T, N>::arbitrary_with(params).prop_map(|pt| pt.into())
  }
}

///////////////////////////////////////////////////////////////////////////////
// Convenience functions

// Arbitrary floats include NaN and infinities. These don't.
pub fn any_small() -> impl Strategy<Value = Point<f32>> {
  any::<Point<i8>>().prop_map(|pt| pt.cast(f32::from))
}

pub fn any_small_vec() -> impl Strategy<Value = Vector<f32>> {
  any_small().prop_map(Vector::from)
}

pub fn any_finite() -> impl Strategy<Value = Point<f32>> {
  (-1000.0_f32..1000.0, -1000.0_f32..1000.0).prop_map(Point::from)
}

pub fn any_unit_box_vec() -> impl Strategy<Value = Vector<f32>> {
  (-1.0_f32..1.0, -1.0_f32..1.0).prop_map(Vector::from)
}

pub fn any_angle() -> impl Strategy<Value = f32> {
  -10.0_f32..10.0
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary triangle

impl Arbitrary for Triangle<f64> {
  type Strategy = FilterMapped<[Point<i8>; 3], Triangle<f64>>;
  type Parameters = ();
  fn arbitrary_with(_params: ()) -> Self::Strategy {
    any::<[Point<i8>; 3]>().prop_filter_map("Ensure non-degenerate", |pts| {
      Triangle::new([
        pts[0].cast(f64::from),
        pts[1].cast(f64::from),
        pts[2].cast(f64::from),
      ])
      .ok()
    })
  }
}

///////////////////////////////////////////////////////////////////////////////
// Polygon strategy

// Vertices at strictly increasing angles around the origin form a
// star-shaped, and therefore simple, polygon. Always wound clockwise on
// screen.
pub fn polygon_star() -> impl Strategy<Value = Vec<Point<f64>>> {
  vec((100u16..1000, 10u8..100), 3..16).prop_filter_map("Ensure valid polygon", |steps| {
    let total: f64 = steps.iter().map(|(step, _)| f64::from(*step)).sum();
    let mut angle = 0.0_f64;
    let mut points = Vec::with_capacity(steps.len());
    for (step, radius) in steps {
      angle += f64::from(step) / total * std::f64::consts::TAU * 0.999;
      let (sin, cos) = angle.sin_cos();
      points.push(Point::new([cos * f64::from(radius), sin * f64::from(radius)]));
    }
    crate::try_centroid(&points).ok().map(|_| points)
  })
}
