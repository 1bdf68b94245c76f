use array_init::array_init;
use std::ops::Add;
use std::ops::AddAssign;

use super::Vector;

impl<T, const N: usize> Add<Vector<T, N>> for Vector<T, N>
where
  T: Add<T, Output = T> + Copy,
{
  type Output = Vector<T, N>;

  fn add(self: Vector<T, N>, other: Vector<T, N>) -> Self::Output {
    Vector(array_init(|i| self.0[i] + other.0[i]))
  }
}

impl<T, const N: usize> AddAssign<Vector<T, N>> for Vector<T, N>
where
  T: AddAssign<T> + Copy,
{
  fn add_assign(&mut self, other: Vector<T, N>) {
    for i in 0..N {
      self.0[i] += other.0[i]
    }
  }
}
