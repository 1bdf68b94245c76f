use array_init::array_init;
use num_traits::identities::Zero;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::iter::Sum;
use std::ops::AddAssign;
use std::ops::Index;
use std::ops::Neg;

use crate::data::Point;
use crate::FloatScalar;

/// A displacement or direction in screen space. Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Vector<T, const N: usize = 2>(pub [T; N]);

impl<T, const N: usize> Distribution<Vector<T, N>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector<T, N> {
    Vector(array_init(|_| rng.gen()))
  }
}

impl<T: FloatScalar, const N: usize> Vector<T, N> {
  pub fn dot(&self, other: &Vector<T, N>) -> T {
    self
      .0
      .iter()
      .zip(other.0.iter())
      .fold(T::zero(), |acc, (a, b)| acc + *a * *b)
  }

  pub fn squared_magnitude(&self) -> T {
    self.dot(self)
  }

  pub fn magnitude(&self) -> T {
    self.squared_magnitude().sqrt()
  }

  /// Component of `self` along `onto`, as a vector parallel to `onto`.
  ///
  /// A zero `onto` yields NaN components.
  pub fn project_onto(&self, onto: &Vector<T, N>) -> Vector<T, N> {
    *onto * (onto.dot(self) / onto.squared_magnitude())
  }

  /// Signed length of [`project_onto`](Self::project_onto). Negative when
  /// `self` points away from `onto`.
  pub fn project_length(&self, onto: &Vector<T, N>) -> T {
    onto.dot(self) / onto.magnitude()
  }
}

impl<T: FloatScalar> Vector<T, 2> {
  pub fn cross(&self, other: &Vector<T, 2>) -> T {
    crate::cross(self, other)
  }

  #[must_use]
  pub fn rotate_90_cw(&self) -> Vector<T, 2> {
    crate::rotate_90_cw(self)
  }

  #[must_use]
  pub fn rotate_90_ccw(&self) -> Vector<T, 2> {
    crate::rotate_90_ccw(self)
  }

  #[must_use]
  pub fn rotate(&self, angle: T) -> Vector<T, 2> {
    crate::rotate(self, angle)
  }

  pub fn near_equal(&self, other: &Vector<T, 2>) -> bool {
    crate::near_equal(&Point::from(*self), &Point::from(*other))
  }
}

impl<T> Vector<T, 2> {
  pub fn x_coord(&self) -> &T {
    &self.0[0]
  }
  pub fn y_coord(&self) -> &T {
    &self.0[1]
  }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

impl<T, const N: usize> From<Point<T, N>> for Vector<T, N> {
  fn from(point: Point<T, N>) -> Vector<T, N> {
    Vector(point.array)
  }
}

impl<T> From<(T, T)> for Vector<T, 2> {
  fn from(vector: (T, T)) -> Vector<T, 2> {
    Vector([vector.0, vector.1])
  }
}

mod add;
mod div;
mod mul;
mod sub;

impl<T, const N: usize> Zero for Vector<T, N>
where
  T: Zero + Copy,
{
  fn zero() -> Vector<T, N> {
    Vector(array_init(|_| Zero::zero()))
  }
  fn is_zero(&self) -> bool {
    self.0.iter().all(Zero::is_zero)
  }
}

impl<T, const N: usize> Sum for Vector<T, N>
where
  T: Zero + AddAssign + Copy,
{
  fn sum<I>(iter: I) -> Vector<T, N>
  where
    I: Iterator<Item = Vector<T, N>>,
  {
    let mut acc = Zero::zero();
    for vec in iter {
      acc += vec;
    }
    acc
  }
}

impl<T, const N: usize> Neg for Vector<T, N>
where
  T: Neg<Output = T> + Copy,
{
  type Output = Self;
  fn neg(self) -> Self {
    Vector(array_init(|i| -self.0[i]))
  }
}
