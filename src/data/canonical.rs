use log::debug;
use std::ops::Deref;

use super::Point;
use crate::algorithms::sort::quick_sort_by;
use crate::{Error, HullScalar};

/// Input points sorted by `y` then `x` with duplicates removed.
///
/// The set is never empty: the first element is the lowest point and the
/// last element is the highest point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalPoints<T = i32> {
  points: Vec<Point<T>>,
}

impl<T> CanonicalPoints<T>
where
  T: HullScalar,
{
  /// # Errors
  /// Returns [`Error::EmptyInput`] if `raw` holds no points.
  ///
  /// ```rust
  /// # use rhull::data::{CanonicalPoints, Point};
  /// let canonical = CanonicalPoints::new(vec![
  ///   Point::new([2, 1]),
  ///   Point::new([0, 5]),
  ///   Point::new([2, 1]),
  /// ]).unwrap();
  /// assert_eq!(canonical.as_slice(), &[Point::new([2, 1]), Point::new([0, 5])]);
  /// ```
  pub fn new(raw: Vec<Point<T>>) -> Result<CanonicalPoints<T>, Error> {
    if raw.is_empty() {
      return Err(Error::EmptyInput);
    }
    let raw_len = raw.len();
    let mut points = raw;
    quick_sort_by(&mut points, Ord::cmp);
    points.dedup();
    debug!(
      "canonicalized {} points into {} distinct points",
      raw_len,
      points.len()
    );
    Ok(CanonicalPoints { points })
  }

  pub fn lowest(&self) -> &Point<T> {
    &self.points[0]
  }

  pub fn highest(&self) -> &Point<T> {
    &self.points[self.points.len() - 1]
  }
}

impl<T> CanonicalPoints<T> {
  pub fn as_slice(&self) -> &[Point<T>] {
    &self.points
  }
}

impl<T> Deref for CanonicalPoints<T> {
  type Target = [Point<T>];
  fn deref(&self) -> &[Point<T>] {
    &self.points
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::testing::*;

  use claims::{assert_err_eq, assert_ok};
  use proptest::collection::vec;
  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn empty_input() {
    assert_err_eq!(CanonicalPoints::<i32>::new(vec![]), Error::EmptyInput);
  }

  #[test]
  fn drops_duplicates() {
    let canonical = assert_ok!(CanonicalPoints::new(vec![
      Point::new([-7, -10]),
      Point::new([0, -10]),
      Point::new([10, 5]),
      Point::new([0, 8]),
      Point::new([-10, 0]),
      Point::new([-7, -10]),
    ]));
    assert_eq!(
      canonical.as_slice(),
      &[
        Point::new([-7, -10]),
        Point::new([0, -10]),
        Point::new([-10, 0]),
        Point::new([10, 5]),
        Point::new([0, 8]),
      ]
    );
    assert_eq!(canonical.lowest(), &Point::new([-7, -10]));
    assert_eq!(canonical.highest(), &Point::new([0, 8]));
  }

  #[test]
  fn single_point() {
    let canonical = assert_ok!(CanonicalPoints::new(vec![Point::new([5, 5]); 4]));
    assert_eq!(canonical.len(), 1);
    assert_eq!(canonical.lowest(), canonical.highest());
  }

  #[test]
  fn large_presorted_input() {
    let pts: Vec<Point> = (0..200_000).map(|i| Point::new([i % 500, i / 500])).collect();
    let canonical = assert_ok!(CanonicalPoints::new(pts.clone()));
    assert_eq!(canonical.as_slice(), pts.as_slice());
    let again = assert_ok!(CanonicalPoints::new(canonical.to_vec()));
    assert_eq!(again, canonical);
  }

  #[proptest]
  fn strictly_increasing(#[strategy(vec(any_small(), 1..200))] pts: Vec<Point>) {
    let canonical = CanonicalPoints::new(pts.clone()).unwrap();
    for pair in canonical.windows(2) {
      prop_assert!(pair[0] < pair[1]);
    }
    for pt in pts.iter() {
      prop_assert!(canonical.binary_search(pt).is_ok());
      prop_assert!(canonical.lowest() <= pt && pt <= canonical.highest());
    }
  }

  #[proptest]
  fn idempotent(#[strategy(vec(any_small(), 1..200))] pts: Vec<Point>) {
    let once = CanonicalPoints::new(pts).unwrap();
    let twice = CanonicalPoints::new(once.to_vec()).unwrap();
    prop_assert_eq!(once, twice);
  }
}
