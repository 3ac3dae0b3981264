use log::trace;
use std::cmp::Ordering;

use super::{ConvexHull, HullAlgorithm};
use crate::data::{CanonicalPoints, Point, Stack};
use crate::{Error, HullScalar, PolarAngle, TieBreak};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

/// $O(nh)$ [gift wrapping][wiki], where $h$ is the number of hull vertices.
///
/// The hull is wrapped in two chains. The right chain climbs from the lowest
/// point to the highest point, the left chain descends back. Each new vertex
/// is the point with the smallest polar angle seen from the current one;
/// among collinear candidates the furthest wins, so points in the middle of
/// an edge are skipped.
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub struct JarvisMarch;

impl HullAlgorithm for JarvisMarch {
  const LABEL: &'static str = "Jarvis' march";

  fn hull_vertices<T: HullScalar>(points: &CanonicalPoints<T>) -> Vec<Point<T>> {
    if points.len() <= 2 {
      return points.to_vec();
    }
    let mut hull = chain(points, points.lowest(), points.highest());
    hull.extend(chain(points, points.highest(), points.lowest()));
    hull
  }
}

/// Convex hull of a set of points using Jarvis' march.
///
/// # Errors
/// Will return an error iff the input set is empty.
///
/// # Examples
///
/// ```rust
/// # use rhull::algorithms::convex_hull::jarvis_march::convex_hull;
/// # use rhull::data::Point;
/// let pts = vec![
///   Point::new([-7, -10]),
///   Point::new([0, -10]),
///   Point::new([10, 5]),
///   Point::new([0, 8]),
///   Point::new([-10, 0]),
///   Point::new([-7, -10]),
/// ];
/// let hull = convex_hull(pts).unwrap();
/// assert_eq!(hull.to_string(), "(-7, -10)   (0, -10)   (10, 5)   (0, 8)   (-10, 0)");
/// ```
pub fn convex_hull<T>(pts: Vec<Point<T>>) -> Result<ConvexHull<T>, Error>
where
  T: HullScalar,
{
  JarvisMarch::convex_hull(pts)
}

// Wrap counter-clockwise from `from` until `to` is reached. The returned chain
// starts with `from` and stops just short of `to`.
fn chain<T: HullScalar>(points: &[Point<T>], from: &Point<T>, to: &Point<T>) -> Vec<Point<T>> {
  let mut stack = Stack::new();
  stack.push(from.clone());
  while let Some(top) = stack.peek() {
    if top == to {
      break;
    }
    let next = match next_vertex(points, top) {
      Some(next) => next.clone(),
      None => break,
    };
    trace!("jarvis march: {:?} -> {:?}", top, next);
    stack.push(next);
  }
  stack.pop();
  stack.into_vec()
}

// The point with the smallest polar angle around `from`, furthest first on
// ties. `from` itself is not a candidate.
fn next_vertex<'a, T: HullScalar>(points: &'a [Point<T>], from: &Point<T>) -> Option<&'a Point<T>> {
  let order = PolarAngle::new(from, TieBreak::Farther);
  points
    .iter()
    .filter(|pt| *pt != from)
    .fold(None, |best, pt| match best {
      Some(best) if order.cmp(best, pt) != Ordering::Greater => Some(best),
      _ => Some(pt),
    })
}
