use claims::debug_assert_ok;
use log::debug;

use super::{Circle, Point, Rectangle};
use crate::{Contains, Error, Overlaps, ShapeScalar};

/// A non-degenerate triangle. Vertices may be given in either winding order.
///
/// Overlap tests involving a triangle only look at vertices: two shapes
/// overlap if a vertex of the triangle lies in the other shape (or, for two
/// triangles, a vertex of either lies in the other). Overlaps caused purely
/// by crossing edges are not detected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T = f64>([Point<T>; 3]);

impl<T: ShapeScalar> Triangle<T> {
  pub fn new(pts: [Point<T>; 3]) -> Result<Triangle<T>, Error> {
    let triangle = Triangle(pts);
    if let Err(err) = triangle.validate() {
      debug!("rejected triangle {:?} {:?} {:?}", pts[0].array, pts[1].array, pts[2].array);
      return Err(err);
    }
    Ok(triangle)
  }

  // Exact comparison. Nearly colinear points are accepted. NaN or infinite
  // coordinates give a non-finite area and are rejected.
  pub fn validate(&self) -> Result<(), Error> {
    let area = self.area();
    if area == T::zero() || !area.is_finite() {
      Err(Error::DegenerateTriangle)
    } else {
      Ok(())
    }
  }

  pub fn vertices(&self) -> &[Point<T>; 3] {
    &self.0
  }

  pub fn area(&self) -> T {
    let [a, b, c] = &self.0;
    area(a, b, c)
  }

  fn any_vertex(&self, pred: impl Fn(&Point<T>) -> bool) -> bool {
    self.0.iter().any(pred)
  }
}

fn area<T: ShapeScalar>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> T {
  signed_area_2x(a, b, c).abs() / T::from_constant(2)
}

// x1*(y2-y3) + x2*(y3-y1) + x3*(y1-y2)
fn signed_area_2x<T: ShapeScalar>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> T {
  let [ax, ay] = a.array;
  let [bx, by] = b.array;
  let [cx, cy] = c.array;
  ax * (by - cy) + bx * (cy - ay) + cx * (ay - by)
}

impl<T: ShapeScalar> Contains<T> for Triangle<T> {
  // The three sub-triangles formed with `pt` cover the triangle exactly when
  // `pt` is inside. Their areas add up to more than the whole otherwise.
  fn contains(&self, pt: &Point<T>) -> bool {
    debug_assert_ok!(self.validate());
    let [a, b, c] = &self.0;
    let whole = area(a, b, c);
    let parts = area(pt, b, c) + area(a, pt, c) + area(a, b, pt);
    (whole - parts).abs() < T::TOLERANCE
  }
}

impl<T: ShapeScalar> Overlaps for Triangle<T> {
  fn overlaps(&self, other: &Triangle<T>) -> bool {
    self.any_vertex(|pt| other.contains(pt)) || other.any_vertex(|pt| self.contains(pt))
  }
}

impl<T: ShapeScalar> Overlaps<Rectangle<T>> for Triangle<T> {
  fn overlaps(&self, other: &Rectangle<T>) -> bool {
    self.any_vertex(|pt| other.contains(pt))
  }
}

impl<T: ShapeScalar> Overlaps<Circle<T>> for Triangle<T> {
  fn overlaps(&self, other: &Circle<T>) -> bool {
    self.any_vertex(|pt| other.contains(pt))
  }
}
