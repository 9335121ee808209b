use super::{Circle, Point, Rectangle, Triangle};
use crate::{Contains, Overlaps, ShapeScalar};

/// Any of the supported shapes.
///
/// Every predicate is an exhaustive match over the variants, so adding a
/// variant won't compile until each pair has an overlap test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<T = f64> {
  Rectangle(Rectangle<T>),
  Circle(Circle<T>),
  Triangle(Triangle<T>),
}

/// Read-only geometry for drawing a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline<T = f64> {
  /// Closed polygon; the last vertex connects back to the first.
  Polygon(Vec<Point<T>>),
  Disk { center: Point<T>, radius: T },
}

impl<T: ShapeScalar> Shape<T> {
  pub fn outline(&self) -> Outline<T> {
    match self {
      Shape::Rectangle(rect) => Outline::Polygon(rect.corners().to_vec()),
      Shape::Circle(circle) => Outline::Disk {
        center: *circle.center(),
        radius: circle.radius(),
      },
      Shape::Triangle(triangle) => Outline::Polygon(triangle.vertices().to_vec()),
    }
  }

  pub fn area(&self) -> T {
    match self {
      Shape::Rectangle(rect) => rect.area(),
      Shape::Circle(circle) => circle.area(),
      Shape::Triangle(triangle) => triangle.area(),
    }
  }
}

impl<T> From<Rectangle<T>> for Shape<T> {
  fn from(rect: Rectangle<T>) -> Shape<T> {
    Shape::Rectangle(rect)
  }
}

impl<T> From<Circle<T>> for Shape<T> {
  fn from(circle: Circle<T>) -> Shape<T> {
    Shape::Circle(circle)
  }
}

impl<T> From<Triangle<T>> for Shape<T> {
  fn from(triangle: Triangle<T>) -> Shape<T> {
    Shape::Triangle(triangle)
  }
}

impl<T: ShapeScalar> Contains<T> for Shape<T> {
  fn contains(&self, pt: &Point<T>) -> bool {
    match self {
      Shape::Rectangle(rect) => rect.contains(pt),
      Shape::Circle(circle) => circle.contains(pt),
      Shape::Triangle(triangle) => triangle.contains(pt),
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Dispatch on the right-hand operand

impl<T: ShapeScalar> Overlaps<Shape<T>> for Rectangle<T> {
  fn overlaps(&self, other: &Shape<T>) -> bool {
    match other {
      Shape::Rectangle(rect) => self.overlaps(rect),
      Shape::Circle(circle) => self.overlaps(circle),
      Shape::Triangle(triangle) => self.overlaps(triangle),
    }
  }
}

impl<T: ShapeScalar> Overlaps<Shape<T>> for Circle<T> {
  fn overlaps(&self, other: &Shape<T>) -> bool {
    match other {
      Shape::Rectangle(rect) => self.overlaps(rect),
      Shape::Circle(circle) => self.overlaps(circle),
      Shape::Triangle(triangle) => self.overlaps(triangle),
    }
  }
}

impl<T: ShapeScalar> Overlaps<Shape<T>> for Triangle<T> {
  fn overlaps(&self, other: &Shape<T>) -> bool {
    match other {
      Shape::Rectangle(rect) => self.overlaps(rect),
      Shape::Circle(circle) => self.overlaps(circle),
      Shape::Triangle(triangle) => self.overlaps(triangle),
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Dispatch on the left-hand operand

impl<T: ShapeScalar> Overlaps for Shape<T> {
  fn overlaps(&self, other: &Shape<T>) -> bool {
    match self {
      Shape::Rectangle(rect) => rect.overlaps(other),
      Shape::Circle(circle) => circle.overlaps(other),
      Shape::Triangle(triangle) => triangle.overlaps(other),
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
