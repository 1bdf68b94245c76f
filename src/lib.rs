//! Screen-space 2D geometry for building shadow and light volumes.
//!
//! Everything in this crate works in an inverted-Y frame: the Y axis grows
//! downward, as it does in raster space. Under that convention a positive
//! [`area`] means the path `a -> b -> c` turns clockwise on screen.
//!
//! ```rust
//! # use shadowgeom::*;
//! # use shadowgeom::data::{Point, Vector};
//! let a = Point::new([0.0_f32, 0.0]);
//! let b = Point::new([1.0, 0.0]);
//! let c = Point::new([0.0, 1.0]);
//! assert_eq!(area(&a, &b, &c), 1.0);
//! assert_eq!(cross(&Vector([1.0_f32, 0.0]), &Vector([0.0, 1.0])), 1.0);
//! ```
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
use num_traits::Float;
use std::fmt::Debug;

mod barycentric;
mod centroid;
pub mod data;
mod orientation;
mod rotation;
mod tolerance;

pub use barycentric::{barycentric, try_barycentric, BarycentricCoords};
pub use centroid::{centroid, signed_area_2x, try_centroid};
pub use data::PointLocation;
pub use orientation::{area, collinear, collinear_within, cross, more_opposed, Orientation};
pub use rotation::{rotate, rotate_90_ccw, rotate_90_cw};
pub use tolerance::{in_range, near_equal, near_equal_scalar};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  /// The shoelace sum of a vertex loop is exactly zero.
  DegenerateArea,
  /// The three corners of a triangle are collinear.
  DegenerateTriangle,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::DegenerateArea => write!(f, "Polygon has zero area"),
      Error::DegenerateTriangle => write!(f, "Triangle has zero area"),
    }
  }
}

impl std::error::Error for Error {}

/// Floating point coordinate type.
///
/// `NEAR_EPSILON` is the one tolerance used by [`near_equal`]. Everything else
/// is either exact or takes its tolerance as an argument.
pub trait FloatScalar: Float + Debug + Default + Send + Sync + 'static {
  const NEAR_EPSILON: Self;

  fn as_f64(self) -> f64;

  fn from_constant(val: i8) -> Self;
}

macro_rules! floating_precision {
  ( $( $ty:ty => $eps:expr ),* ) => {
    $(
      impl FloatScalar for $ty {
        const NEAR_EPSILON: $ty = $eps;

        #[inline]
        fn as_f64(self) -> f64 {
          f64::from(self)
        }

        #[inline]
        fn from_constant(val: i8) -> Self {
          <$ty>::from(val)
        }
      }
    )*
  };
}

floating_precision!(f32 => 1e-5, f64 => 1e-9);

#[cfg(test)]
pub mod testing;
