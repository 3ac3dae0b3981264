use log::debug;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::data::{CanonicalPoints, Point, PointLocation};
use crate::report::StatsTable;
use crate::{Error, HullScalar};

pub mod graham_scan;
pub mod jarvis_march;

pub use graham_scan::GrahamScan;
pub use jarvis_march::JarvisMarch;

/// A strategy for turning a canonical point set into hull vertices.
pub trait HullAlgorithm {
  /// Name used when reporting results.
  const LABEL: &'static str;

  /// Hull vertices in counter-clockwise order, starting at `points.lowest()`.
  ///
  /// One vertex for a single point, the two extreme points for collinear
  /// input. Never repeats a vertex and never keeps a vertex that lies on the
  /// straight line between its neighbours.
  fn hull_vertices<T: HullScalar>(points: &CanonicalPoints<T>) -> Vec<Point<T>>;

  /// Run the algorithm on a shared canonical set and time it.
  fn build<T: HullScalar>(points: &Arc<CanonicalPoints<T>>) -> ConvexHull<T> {
    let start = Instant::now();
    let vertices = Self::hull_vertices(points);
    let elapsed = start.elapsed();
    debug!(
      "{}: {} hull vertices from {} points in {:?}",
      Self::LABEL,
      vertices.len(),
      points.len(),
      elapsed
    );
    ConvexHull {
      label: Self::LABEL,
      canonical: Arc::clone(points),
      elapsed,
      vertices,
    }
  }

  /// Canonicalize `pts` and build its hull.
  ///
  /// # Errors
  /// Returns [`Error::EmptyInput`] if `pts` is empty.
  fn convex_hull<T: HullScalar>(pts: Vec<Point<T>>) -> Result<ConvexHull<T>, Error> {
    let canonical = Arc::new(CanonicalPoints::new(pts)?);
    Ok(Self::build(&canonical))
  }
}

/// A finished convex hull.
///
/// Only produced by [`HullAlgorithm::build`], so vertices, rendering and
/// persistence are always those of a completed construction.
#[derive(Debug, Clone)]
pub struct ConvexHull<T = i32> {
  label: &'static str,
  canonical: Arc<CanonicalPoints<T>>,
  elapsed: Duration,
  vertices: Vec<Point<T>>,
}

impl<T> ConvexHull<T> {
  pub fn label(&self) -> &'static str {
    self.label
  }

  /// The canonical point set the hull was built from.
  pub fn canonical(&self) -> &CanonicalPoints<T> {
    &self.canonical
  }

  pub fn canonical_len(&self) -> usize {
    self.canonical.len()
  }

  /// Wall-clock time spent inside the algorithm.
  pub fn elapsed(&self) -> Duration {
    self.elapsed
  }

  pub fn vertices(&self) -> &[Point<T>] {
    &self.vertices
  }

  /// Polygon edges: every consecutive pair of vertices plus the edge closing
  /// the loop. A single-vertex hull has no edges.
  pub fn edges(&self) -> impl Iterator<Item = (&Point<T>, &Point<T>)> + '_ {
    let n = if self.vertices.len() < 2 {
      0
    } else {
      self.vertices.len()
    };
    self
      .vertices
      .iter()
      .zip(self.vertices.iter().cycle().skip(1))
      .take(n)
  }
}

impl<T> ConvexHull<T>
where
  T: HullScalar,
{
  /// Locate a point relative to the closed hull polygon.
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    match self.vertices.as_slice() {
      [] => PointLocation::Outside,
      [only] => {
        if only == pt {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      [a, b] => {
        let within = |lo: &T, hi: &T, v: &T| lo.min(hi) <= v && v <= lo.max(hi);
        if a.orientation(b, pt).is_colinear()
          && within(a.x_coord(), b.x_coord(), pt.x_coord())
          && within(a.y_coord(), b.y_coord(), pt.y_coord())
        {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      _ => {
        let mut location = PointLocation::Inside;
        for (a, b) in self.edges() {
          match a.orientation(b, pt) {
            crate::Orientation::ClockWise => return PointLocation::Outside,
            crate::Orientation::CoLinear => location = PointLocation::OnBoundary,
            crate::Orientation::CounterClockWise => {}
          }
        }
        location
      }
    }
  }

  pub fn contains(&self, pt: &Point<T>) -> bool {
    self.locate(pt) != PointLocation::Outside
  }

  /// Check the structural invariants of the vertex sequence.
  ///
  /// # Errors
  /// * [`Error::EmptyInput`] if there are no vertices.
  /// * [`Error::WrongStart`] if the sequence does not start at the lowest
  ///   canonical point.
  /// * [`Error::DuplicatePoints`] if a vertex repeats.
  /// * [`Error::ConvexViolation`] if three consecutive vertices (wrapping
  ///   around) fail to turn counter-clockwise.
  pub fn validate(&self) -> Result<(), Error> {
    match self.vertices.first() {
      None => return Err(Error::EmptyInput),
      Some(first) if first != self.canonical.lowest() => return Err(Error::WrongStart),
      Some(_) => {}
    }
    let mut sorted = self.vertices.clone();
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.len() != self.vertices.len() {
      return Err(Error::DuplicatePoints);
    }
    let n = self.vertices.len();
    if n >= 3 {
      for i in 0..n {
        let p1 = &self.vertices[i];
        let p2 = &self.vertices[(i + 1) % n];
        let p3 = &self.vertices[(i + 2) % n];
        if !p1.orientation(p2, p3).is_ccw() {
          return Err(Error::ConvexViolation);
        }
      }
    }
    Ok(())
  }

  /// Write one `x y` line per vertex, in hull order.
  pub fn write_to<W: Write>(&self, mut out: W) -> Result<(), Error> {
    for pt in self.vertices.iter() {
      writeln!(out, "{} {}", pt.x_coord(), pt.y_coord())?;
    }
    out.flush()?;
    Ok(())
  }

  pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
    let file = File::create(path)?;
    self.write_to(BufWriter::new(file))
  }
}

// Five vertices per line, separated by three blanks.
impl<T: fmt::Display> fmt::Display for ConvexHull<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, pt) in self.vertices.iter().enumerate() {
      if i > 0 {
        if i % 5 == 0 {
          writeln!(f)?;
        } else {
          write!(f, "   ")?;
        }
      }
      write!(f, "{}", pt)?;
    }
    Ok(())
  }
}

/// Both algorithms run on the same canonical set.
#[derive(Debug, Clone)]
pub struct Comparison<T = i32> {
  pub graham: ConvexHull<T>,
  pub jarvis: ConvexHull<T>,
}

impl<T> Comparison<T>
where
  T: HullScalar,
{
  /// True when both algorithms produced the same vertex sequence.
  pub fn agree(&self) -> bool {
    self.graham.vertices() == self.jarvis.vertices()
  }

  pub fn stats(&self) -> StatsTable<'_, T> {
    StatsTable::new(vec![&self.graham, &self.jarvis])
  }
}

/// Canonicalize `pts` once, then run Graham's scan followed by Jarvis' march.
///
/// # Errors
/// Returns [`Error::EmptyInput`] if `pts` is empty.
///
/// ```rust
/// # use rhull::algorithms::compare;
/// # use rhull::data::Point;
/// let pts = vec![Point::new([0, 0]), Point::new([1, 0]), Point::new([2, 0]), Point::new([3, 0])];
/// let comparison = compare(pts).unwrap();
/// assert!(comparison.agree());
/// assert_eq!(comparison.jarvis.vertices(), &[Point::new([0, 0]), Point::new([3, 0])]);
/// ```
pub fn compare<T: HullScalar>(pts: Vec<Point<T>>) -> Result<Comparison<T>, Error> {
  let canonical = Arc::new(CanonicalPoints::new(pts)?);
  Ok(Comparison {
    graham: GrahamScan::build(&canonical),
    jarvis: JarvisMarch::build(&canonical),
  })
}
