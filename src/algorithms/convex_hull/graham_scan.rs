use log::trace;

use super::{ConvexHull, HullAlgorithm};
use crate::algorithms::sort::quick_sort_by;
use crate::data::{CanonicalPoints, Point, Stack};
use crate::{Error, HullScalar, PolarAngle, TieBreak};

// https://en.wikipedia.org/wiki/Graham_scan

/// $O(n \log n)$ [Graham scan][wiki].
///
/// Sorts the points by polar angle around the lowest point, nearest first on
/// ties, then sweeps them once while keeping the partial hull on a stack.
/// Whenever the newest candidate does not make a left turn with the top two
/// stack entries, the top is popped and the candidate is retried.
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub struct GrahamScan;

impl HullAlgorithm for GrahamScan {
  const LABEL: &'static str = "Graham's scan";

  fn hull_vertices<T: HullScalar>(points: &CanonicalPoints<T>) -> Vec<Point<T>> {
    if points.len() <= 2 {
      return points.to_vec();
    }
    let sorted = angular_order(points);
    let mut scan = Scan::new(&sorted);
    while scan.step() != Step::Done {}
    scan.into_vertices()
  }
}

/// Convex hull of a set of points using Graham's scan.
///
/// # Errors
/// Will return an error iff the input set is empty.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All hull vertices are from the input set.
/// * The hull starts at the lowest (then leftmost) point and runs
///   counter-clockwise.
///
/// # Examples
///
/// ```rust
/// # use rhull::algorithms::convex_hull::graham_scan::convex_hull;
/// # use rhull::data::Point;
/// # use rhull::Error;
/// let empty_set: Vec<Point<i32>> = vec![];
/// assert_eq!(convex_hull(empty_set).err(), Some(Error::EmptyInput));
///
/// let dups = vec![Point::new([5, 5])].repeat(3);
/// assert_eq!(convex_hull(dups).unwrap().vertices(), &[Point::new([5, 5])]);
/// ```
pub fn convex_hull<T>(pts: Vec<Point<T>>) -> Result<ConvexHull<T>, Error>
where
  T: HullScalar,
{
  GrahamScan::convex_hull(pts)
}

// The lowest point stays in front. It is the pivot, so it is never handed to
// the comparator.
fn angular_order<T: HullScalar>(points: &CanonicalPoints<T>) -> Vec<Point<T>> {
  let mut sorted = points.to_vec();
  if let Some((pivot, rest)) = sorted.split_first_mut() {
    let order = PolarAngle::new(&*pivot, TieBreak::Closer);
    quick_sort_by(rest, |a, b| order.cmp(a, b));
  }
  sorted
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
  /// The candidate turned left and was pushed.
  Advance,
  /// The top of the stack was popped; the same candidate is retried.
  Backtrack,
  /// No candidates remain.
  Done,
}

struct Scan<'a, T> {
  stack: Stack<Point<T>>,
  remaining: &'a [Point<T>],
}

impl<'a, T: HullScalar> Scan<'a, T> {
  // `sorted` holds at least two points.
  fn new(sorted: &'a [Point<T>]) -> Scan<'a, T> {
    let mut stack = Stack::with_capacity(sorted.len());
    let (seed, remaining) = sorted.split_at(sorted.len().min(2));
    for pt in seed {
      stack.push(pt.clone());
    }
    Scan { stack, remaining }
  }

  fn step(&mut self) -> Step {
    let (candidate, rest) = match self.remaining.split_first() {
      Some(next) => next,
      None => return Step::Done,
    };
    let left_turn = match (self.stack.peek_second(), self.stack.peek()) {
      (Some(reference), Some(top)) => reference.orientation(top, candidate).is_ccw(),
      // Only the pivot is left.
      _ => true,
    };
    if left_turn {
      self.stack.push(candidate.clone());
      self.remaining = rest;
      Step::Advance
    } else {
      let popped = self.stack.pop();
      trace!("graham scan: {:?} backtracks over {:?}", candidate, popped);
      Step::Backtrack
    }
  }

  fn into_vertices(self) -> Vec<Point<T>> {
    self.stack.into_vec()
  }
}
