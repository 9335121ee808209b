// This module contains strategies for:
//  * points
//  * rectangles, circles and triangles
//  * shapes
// The `Arbitrary` impls use small integer coordinates so every area and
// distance computed in the tests is exact. The `fractional_*` strategies use
// tenths, which aren't exact in binary and exercise rounding.
use crate::data::{Circle, Point, Rectangle, Shape, Triangle};

use proptest::arbitrary::*;
use proptest::prelude::*;
use proptest::strategy::*;

type FilterMapped<I, O> = FilterMap<StrategyFor<I>, fn(_: I) -> Option<O>>;

pub fn coord() -> impl Strategy<Value = f64> + Clone {
  (-100_i16..=100).prop_map(f64::from)
}

pub fn extent() -> impl Strategy<Value = f64> + Clone {
  (1_i16..=50).prop_map(f64::from)
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary point

impl Arbitrary for Point<f64> {
  type Strategy = BoxedStrategy<Point<f64>>;
  type Parameters = ();
  fn arbitrary_with(_params: ()) -> Self::Strategy {
    (coord(), coord())
      .prop_map(|(x, y)| Point::new([x, y]))
      .boxed()
  }
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary rectangle

impl Arbitrary for Rectangle<f64> {
  type Strategy = BoxedStrategy<Rectangle<f64>>;
  type Parameters = ();
  fn arbitrary_with(_params: ()) -> Self::Strategy {
    (any::<Point<f64>>(), extent(), extent())
      .prop_filter_map("Positive extent", |(pt, width, height)| {
        Rectangle::new(pt, width, height).ok()
      })
      .boxed()
  }
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary circle

impl Arbitrary for Circle<f64> {
  type Strategy = BoxedStrategy<Circle<f64>>;
  type Parameters = ();
  fn arbitrary_with(_params: ()) -> Self::Strategy {
    (any::<Point<f64>>(), (0_i16..=50).prop_map(f64::from))
      .prop_filter_map("Non-negative radius", |(center, radius)| {
        Circle::new(center, radius).ok()
      })
      .boxed()
  }
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary triangle

impl Arbitrary for Triangle<f64> {
  type Strategy = FilterMapped<[Point<f64>; 3], Triangle<f64>>;
  type Parameters = ();
  fn arbitrary_with(_params: ()) -> Self::Strategy {
    any::<[Point<f64>; 3]>().prop_filter_map("Ensure non-degenerate", |pts| Triangle::new(pts).ok())
  }
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary shape

impl Arbitrary for Shape<f64> {
  type Strategy = BoxedStrategy<Shape<f64>>;
  type Parameters = ();
  fn arbitrary_with(_params: ()) -> Self::Strategy {
    prop_oneof![
      any::<Rectangle<f64>>().prop_map(Shape::from),
      any::<Circle<f64>>().prop_map(Shape::from),
      any::<Triangle<f64>>().prop_map(Shape::from),
    ]
    .boxed()
  }
}

///////////////////////////////////////////////////////////////////////////////
// Fractional coordinates

pub fn fractional_coord() -> impl Strategy<Value = f64> {
  (-1000_i16..=1000).prop_map(|v| f64::from(v) / 10.0)
}

pub fn fractional_extent() -> impl Strategy<Value = f64> {
  (1_i16..=500).prop_map(|v| f64::from(v) / 10.0)
}

pub fn fractional_point() -> impl Strategy<Value = Point<f64>> {
  (fractional_coord(), fractional_coord()).prop_map(|(x, y)| Point::new([x, y]))
}

pub fn fractional_rectangle() -> impl Strategy<Value = Rectangle<f64>> {
  (fractional_point(), fractional_extent(), fractional_extent()).prop_filter_map(
    "Positive extent",
    |(pt, width, height)| Rectangle::new(pt, width, height).ok(),
  )
}

pub fn fractional_circle() -> impl Strategy<Value = Circle<f64>> {
  (fractional_point(), (0_i16..=500).prop_map(|v| f64::from(v) / 10.0)).prop_filter_map(
    "Non-negative radius",
    |(center, radius)| Circle::new(center, radius).ok(),
  )
}

pub fn fractional_triangle() -> impl Strategy<Value = Triangle<f64>> {
  [fractional_point(), fractional_point(), fractional_point()]
    .prop_filter_map("Ensure non-degenerate", |pts| Triangle::new(pts).ok())
}

pub fn fractional_shape() -> impl Strategy<Value = Shape<f64>> {
  prop_oneof![
    fractional_rectangle().prop_map(Shape::from),
    fractional_circle().prop_map(Shape::from),
    fractional_triangle().prop_map(Shape::from),
  ]
}
