use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::ops::Index;

use crate::{HullScalar, Orientation};

/// An immutable point in the plane.
///
/// Points are ordered by `y` first and `x` second, so the smallest point of a
/// set is its lowest one, and the leftmost among equally low points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Point<T = i32> {
  array: [T; 2],
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: [f(self.array[0].clone()), f(self.array[1].clone())],
    }
  }
}

impl<T> Point<T>
where
  T: HullScalar,
{
  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  /// Compare the distance from `self` to `p` against the distance from `self` to `q`.
  pub fn cmp_distance_to(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    T::cmp_dist(&self.array, &p.array, &q.array)
  }
}

impl<T: Ord> Ord for Point<T> {
  fn cmp(&self, other: &Point<T>) -> Ordering {
    self
      .y_coord()
      .cmp(other.y_coord())
      .then_with(|| self.x_coord().cmp(other.x_coord()))
  }
}

impl<T: Ord> PartialOrd for Point<T> {
  fn partial_cmp(&self, other: &Point<T>) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.array[0], self.array[1])
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
pub mod tests {
  use super::*;
  use crate::testing::*;

  use num_bigint::BigInt;
  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn y_then_x() {
    let mut pts = vec![
      Point::new([3, 1]),
      Point::new([-5, 2]),
      Point::new([0, 1]),
      Point::new([9, -4]),
    ];
    pts.sort();
    assert_eq!(
      pts,
      vec![
        Point::new([9, -4]),
        Point::new([0, 1]),
        Point::new([3, 1]),
        Point::new([-5, 2]),
      ]
    );
  }

  #[test]
  fn display() {
    assert_eq!(Point::new([-7, -10]).to_string(), "(-7, -10)");
  }

  #[test]
  fn cast_to_bigint() {
    let pt: Point<BigInt> = Point::new([-3_i64, 4]).cast(BigInt::from);
    assert_eq!(pt.x_coord(), &BigInt::from(-3));
    assert_eq!(pt[1], BigInt::from(4));
  }

  #[proptest]
  fn order_is_total(#[strategy(any_small())] a: Point, #[strategy(any_small())] b: Point) {
    prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
    prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
  }

  #[proptest]
  fn distance_to_self_is_smallest(p: Point<i16>, q: Point<i16>) {
    let expected = if p == q {
      Ordering::Equal
    } else {
      Ordering::Greater
    };
    prop_assert_eq!(p.cmp_distance_to(&q, &p), expected);
    prop_assert_eq!(p.cmp_distance_to(&q, &q), Ordering::Equal);
  }
}
