use crate::data::Point;

/// Point containment. Points on the boundary are contained.
pub trait Contains<T> {
  fn contains(&self, pt: &Point<T>) -> bool;
}

/// Shapes overlap when they share at least one point. Touching counts.
///
/// Implemented for every pair of shapes. Some pairs answer by delegating to
/// the reversed pair, so `a.overlaps(&b)` and `b.overlaps(&a)` always agree.
pub trait Overlaps<Other: ?Sized = Self> {
  fn overlaps(&self, other: &Other) -> bool;
}
