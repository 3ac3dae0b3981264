// This module contains strategies for:
//  * points
//  * point sets with lots of duplicates and collinear triples
// A Strategy is a way to generate a shrinkable value.
use crate::data::Point;

use num_bigint::BigInt;
use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;
use proptest::strategy::*;
use std::fmt::Debug;
use std::ops::{Range, RangeInclusive};

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary Point

impl<T: Arbitrary> Arbitrary for Point<T> {
  type Strategy = Mapped<[T; 2], Point<T>>;
  type Parameters = <[T; 2] as Arbitrary>::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    any_with::<[T; 2]>(params).prop_map(|array: [T; 2]| Point::new(array))
  }
}

// Coordinates of points produced by `any_small`.
pub const SMALL: RangeInclusive<i32> = -50..=50;

// Points from a small grid so that duplicates and collinear points are common.
pub fn any_small() -> impl Strategy<Value = Point<i32>> {
  (SMALL, SMALL).prop_map(|(x, y)| Point::new([x, y]))
}

pub fn any_r() -> impl Strategy<Value = Point<BigInt>> {
  any::<Point<isize>>().prop_map(|pt| pt.cast(BigInt::from))
}

// Between `size.start` and `size.end` points on a single line. A zero direction
// collapses the set into a single point.
pub fn any_collinear(size: Range<usize>) -> impl Strategy<Value = Vec<Point<i32>>> {
  (any_small(), -5..=5i32, -5..=5i32, vec(-10..=10i32, size)).prop_map(|(base, dx, dy, steps)| {
    steps
      .into_iter()
      .map(|k| Point::new([base.x_coord() + k * dx, base.y_coord() + k * dy]))
      .collect()
  })
}

// A value paired with a random permutation of itself.
pub fn shuffled<S, T>(strategy: S) -> impl Strategy<Value = (Vec<T>, Vec<T>)>
where
  S: Strategy<Value = Vec<T>>,
  T: Clone + Debug,
{
  strategy.prop_flat_map(|items| (Just(items.clone()), Just(items).prop_shuffle()))
}
