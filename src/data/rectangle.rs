use claims::debug_assert_ok;
use log::debug;

use super::{Circle, Point, Triangle};
use crate::{Contains, Error, Overlaps, ShapeScalar};

/// Axis-aligned rectangle anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle<T = f64> {
  bottom_left: Point<T>,
  width: T,
  height: T,
}

impl<T: ShapeScalar> Rectangle<T> {
  pub fn new(bottom_left: Point<T>, width: T, height: T) -> Result<Rectangle<T>, Error> {
    let rect = Rectangle {
      bottom_left,
      width,
      height,
    };
    if let Err(err) = rect.validate() {
      debug!(
        "rejected rectangle at {:?} with width {:?} and height {:?}",
        bottom_left.array, width, height
      );
      return Err(err);
    }
    Ok(rect)
  }

  // NaN fails both comparisons.
  pub fn validate(&self) -> Result<(), Error> {
    if self.width > T::zero() && self.height > T::zero() {
      Ok(())
    } else {
      Err(Error::InvalidExtent)
    }
  }

  pub fn bottom_left(&self) -> &Point<T> {
    &self.bottom_left
  }

  pub fn width(&self) -> T {
    self.width
  }

  pub fn height(&self) -> T {
    self.height
  }

  pub fn top_right(&self) -> Point<T> {
    Point::new([
      self.bottom_left.array[0] + self.width,
      self.bottom_left.array[1] + self.height,
    ])
  }

  /// Corners in counter-clockwise order, starting at the bottom-left.
  pub fn corners(&self) -> [Point<T>; 4] {
    let [x0, y0] = self.bottom_left.array;
    let [x1, y1] = self.top_right().array;
    [
      Point::new([x0, y0]),
      Point::new([x1, y0]),
      Point::new([x1, y1]),
      Point::new([x0, y1]),
    ]
  }

  pub fn area(&self) -> T {
    self.width * self.height
  }

  /// The point on or inside the rectangle nearest to `pt`.
  pub fn closest_point(&self, pt: &Point<T>) -> Point<T> {
    debug_assert_ok!(self.validate());
    let bl = self.bottom_left.array;
    let tr = self.top_right().array;
    Point::new([
      bl[0].max(pt.array[0].min(tr[0])),
      bl[1].max(pt.array[1].min(tr[1])),
    ])
  }
}

impl<T: ShapeScalar> Contains<T> for Rectangle<T> {
  fn contains(&self, pt: &Point<T>) -> bool {
    let [x, y] = pt.array;
    let [x0, y0] = self.bottom_left.array;
    let [x1, y1] = self.top_right().array;
    x0 <= x && x <= x1 && y0 <= y && y <= y1
  }
}

impl<T: ShapeScalar> Overlaps for Rectangle<T> {
  fn overlaps(&self, other: &Rectangle<T>) -> bool {
    let [ax0, ay0] = self.bottom_left.array;
    let [ax1, ay1] = self.top_right().array;
    let [bx0, by0] = other.bottom_left.array;
    let [bx1, by1] = other.top_right().array;
    !(ax1 < bx0 || ax0 > bx1 || ay1 < by0 || ay0 > by1)
  }
}

impl<T: ShapeScalar> Overlaps<Circle<T>> for Rectangle<T> {
  fn overlaps(&self, other: &Circle<T>) -> bool {
    let closest = self.closest_point(other.center());
    let radius = other.radius();
    other.center().squared_euclidean_distance(&closest) <= radius * radius
  }
}

// Vertex-only test, see `Triangle`.
impl<T: ShapeScalar> Overlaps<Triangle<T>> for Rectangle<T> {
  fn overlaps(&self, other: &Triangle<T>) -> bool {
    other.overlaps(self)
  }
}
