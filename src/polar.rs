use std::cmp::Ordering;

use crate::data::Point;
use crate::HullScalar;

/// How to order two points that lie on the same ray from the pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
  /// The point nearer to the pivot comes first.
  Closer,
  /// The point further from the pivot comes first.
  Farther,
}

/// Counter-clockwise ordering of points by polar angle around a pivot.
///
/// Angles are never computed. `a` precedes `b` when the cross product
/// `(a - pivot) × (b - pivot)` is positive, and collinear points are ordered by
/// squared distance according to the [`TieBreak`].
///
/// Neither argument of [`PolarAngle::cmp`] may be the pivot itself. The
/// algorithms in this crate never pass it.
///
/// ```rust
/// # use rhull::data::Point;
/// # use rhull::{PolarAngle, TieBreak};
/// # use std::cmp::Ordering;
/// let pivot = Point::new([0, 0]);
/// let order = PolarAngle::new(&pivot, TieBreak::Closer);
/// assert_eq!(order.cmp(&Point::new([5, 1]), &Point::new([1, 5])), Ordering::Less);
/// assert_eq!(order.cmp(&Point::new([1, 1]), &Point::new([2, 2])), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PolarAngle<'a, T> {
  pivot: &'a Point<T>,
  tie_break: TieBreak,
}

impl<'a, T> PolarAngle<'a, T>
where
  T: HullScalar,
{
  pub fn new(pivot: &'a Point<T>, tie_break: TieBreak) -> PolarAngle<'a, T> {
    PolarAngle { pivot, tie_break }
  }

  pub fn cmp(&self, a: &Point<T>, b: &Point<T>) -> Ordering {
    debug_assert!(a != self.pivot && b != self.pivot);
    if a == b {
      return Ordering::Equal;
    }
    match T::cmp_cross(self.pivot, a, b) {
      Ordering::Greater => Ordering::Less,
      Ordering::Less => Ordering::Greater,
      Ordering::Equal => {
        let by_distance = self.pivot.cmp_distance_to(a, b);
        let a_first = match self.tie_break {
          TieBreak::Closer => by_distance == Ordering::Less,
          TieBreak::Farther => by_distance == Ordering::Greater,
        };
        if a_first {
          Ordering::Less
        } else {
          Ordering::Greater
        }
      }
    }
  }
}
