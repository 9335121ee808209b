use log::debug;

use super::{Point, Rectangle, Triangle};
use crate::{Contains, Error, Overlaps, ShapeScalar};

/// A closed disk. A radius of zero is allowed and describes a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle<T = f64> {
  center: Point<T>,
  radius: T,
}

impl<T: ShapeScalar> Circle<T> {
  pub fn new(center: Point<T>, radius: T) -> Result<Circle<T>, Error> {
    let circle = Circle { center, radius };
    if let Err(err) = circle.validate() {
      debug!("rejected circle at {:?} with radius {:?}", center.array, radius);
      return Err(err);
    }
    Ok(circle)
  }

  pub fn validate(&self) -> Result<(), Error> {
    if self.radius >= T::zero() {
      Ok(())
    } else {
      Err(Error::InvalidRadius)
    }
  }

  pub fn center(&self) -> &Point<T> {
    &self.center
  }

  pub fn radius(&self) -> T {
    self.radius
  }

  pub fn area(&self) -> T {
    T::PI() * self.radius * self.radius
  }
}

impl<T: ShapeScalar> Contains<T> for Circle<T> {
  fn contains(&self, pt: &Point<T>) -> bool {
    self.center.squared_euclidean_distance(pt) <= self.radius * self.radius
  }
}

impl<T: ShapeScalar> Overlaps<Rectangle<T>> for Circle<T> {
  fn overlaps(&self, other: &Rectangle<T>) -> bool {
    other.overlaps(self)
  }
}

// Only the upper bound is checked: a circle nested inside another overlaps it.
impl<T: ShapeScalar> Overlaps for Circle<T> {
  fn overlaps(&self, other: &Circle<T>) -> bool {
    let reach = self.radius + other.radius;
    self.center.squared_euclidean_distance(&other.center) <= reach * reach
  }
}

impl<T: ShapeScalar> Overlaps<Triangle<T>> for Circle<T> {
  fn overlaps(&self, other: &Triangle<T>) -> bool {
    other.overlaps(self)
  }
}
