// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Points, rectangles, circles and triangles in the plane, and the two
//! questions you can ask about them: does a shape contain a point, and do
//! two shapes overlap?
//!
//! ```rust
//! # use figures::data::*;
//! # use figures::{Contains, Overlaps};
//! let rect = Rectangle::new(Point::new([0.0, 0.0]), 10.0, 10.0).unwrap();
//! let circle = Circle::new(Point::new([12.0, 12.0]), 5.0).unwrap();
//! assert!(rect.contains(&Point::new([10.0, 5.0])));
//! assert!(rect.overlaps(&circle));
//! ```
use num_traits::{Float, FloatConst};
use std::fmt::Debug;

pub mod data;
mod predicates;

pub use predicates::{Contains, Overlaps};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// The three vertices of a triangle are colinear, or one of them has a
  /// coordinate that is NaN or infinite.
  DegenerateTriangle,
  /// A rectangle with a width or height that isn't strictly positive.
  InvalidExtent,
  /// A circle with a negative (or NaN) radius.
  InvalidRadius,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::DegenerateTriangle => write!(f, "The given points cannot form a triangle"),
      Error::InvalidExtent => write!(f, "Width and height must be positive"),
      Error::InvalidRadius => write!(f, "Radius must not be negative"),
    }
  }
}

impl std::error::Error for Error {}

/// Coordinate type shared by all shapes.
pub trait ShapeScalar: Float + FloatConst + Debug {
  /// Absolute error bound for the area comparison in triangle containment.
  /// It does not scale with the triangle, so very large or very small
  /// triangles will see false negatives or false positives near the edges.
  ///
  /// `1e-9` for `f64`. For `f32` that is below the rounding step of the
  /// areas involved, so it uses `8 * f32::EPSILON` (about `9.5e-7`) instead.
  const TOLERANCE: Self;

  fn from_constant(val: i8) -> Self;
}

macro_rules! floating_precision {
  ( $( $ty:ty => $tolerance:expr ),* ) => {
    $(
      impl ShapeScalar for $ty {
        const TOLERANCE: Self = $tolerance;

        fn from_constant(val: i8) -> Self {
          <$ty>::from(val)
        }
      }
    )*
  };
}

floating_precision!(f32 => 8.0 * f32::EPSILON, f64 => 1e-9);

#[cfg(test)]
pub mod testing;
