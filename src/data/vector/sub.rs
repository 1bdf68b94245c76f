use array_init::array_init;
use std::ops::Sub;

use super::Vector;

impl<T, const N: usize> Sub<Vector<T, N>> for Vector<T, N>
where
  T: Sub<T, Output = T> + Copy,
{
  type Output = Vector<T, N>;

  fn sub(self: Vector<T, N>, other: Vector<T, N>) -> Self::Output {
    Vector(array_init(|i| self.0[i] - other.0[i]))
  }
}

impl<'a, 'b, T, const N: usize> Sub<&'a Vector<T, N>> for &'b Vector<T, N>
where
  T: Sub<T, Output = T> + Copy,
{
  type Output = Vector<T, N>;

  fn sub(self: &'b Vector<T, N>, other: &'a Vector<T, N>) -> Self::Output {
    *self - *other
  }
}
