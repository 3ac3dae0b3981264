// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Convex hulls of integer point sets, built two ways.
//!
//! Both [Graham's scan](algorithms::convex_hull::graham_scan) and
//! [Jarvis' march](algorithms::convex_hull::jarvis_march) consume the same
//! [canonical point set](data::CanonicalPoints) and return a
//! [`ConvexHull`](algorithms::ConvexHull) listing the hull vertices in
//! counter-clockwise order, starting at the lowest point.
//!
//! All geometric predicates are exact: turns and distances are decided with
//! integer cross and dot products, never with floating point.
//!
//! ```rust
//! # use rhull::algorithms::convex_hull;
//! # use rhull::data::Point;
//! let points = vec![
//!   Point::new([0, 0]),
//!   Point::new([4, 0]),
//!   Point::new([4, 4]),
//!   Point::new([0, 4]),
//!   Point::new([2, 2]),
//! ];
//! let hull = convex_hull(points).unwrap();
//! assert_eq!(
//!   hull.vertices(),
//!   &[
//!     Point::new([0, 0]),
//!     Point::new([4, 0]),
//!     Point::new([4, 4]),
//!     Point::new([0, 4]),
//!   ]
//! );
//! ```
use std::cmp::Ordering;

pub mod algorithms;
pub mod data;
pub mod io;
mod orientation;
mod polar;
pub mod random;
pub mod report;

pub use orientation::Orientation;
pub use polar::{PolarAngle, TieBreak};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// A hull was requested for zero points.
  EmptyInput,
  /// A text source held an odd number of integers.
  OddCoordinateCount,
  /// A token in a text source was not an integer.
  InvalidCoordinate(String),
  /// Hull vertices appear more than once.
  DuplicatePoints,
  /// Three consecutive hull vertices do not turn counter-clockwise.
  ConvexViolation,
  /// Hull vertices do not start at the lowest point of the set.
  WrongStart,
  /// Random points were requested from a range with `start > end`.
  EmptyRange,
  Io(std::io::ErrorKind),
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::EmptyInput => write!(f, "Cannot build a convex hull from zero points"),
      Error::OddCoordinateCount => write!(f, "Input contains an odd number of integers"),
      Error::InvalidCoordinate(token) => write!(f, "Not an integer coordinate: {:?}", token),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::ConvexViolation => write!(f, "Convex violation"),
      Error::WrongStart => write!(f, "Hull does not start at the lowest point"),
      Error::EmptyRange => write!(f, "Coordinate range is empty"),
      Error::Io(kind) => write!(f, "I/O error: {}", kind),
    }
  }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
  fn from(err: std::io::Error) -> Error {
    Error::Io(err.kind())
  }
}

/// Coordinate type with exact orientation and distance predicates.
///
/// Fixed-width signed integers never overflow in these predicates: the
/// differences are taken as unsigned magnitudes of twice the width and the
/// signs are tracked separately. `BigInt` is exact by construction.
pub trait HullScalar: std::fmt::Debug + std::fmt::Display + Ord + Clone {
  fn from_constant(val: i8) -> Self;

  /// Sign of the cross product `(a - p) × (b - p)`.
  ///
  /// `Greater` means `p -> a -> b` is a left (counter-clockwise) turn.
  fn cmp_cross(p: &[Self; 2], a: &[Self; 2], b: &[Self; 2]) -> Ordering;

  /// Compare `|a - p|²` against `|b - p|²`.
  fn cmp_dist(p: &[Self; 2], a: &[Self; 2], b: &[Self; 2]) -> Ordering;
}

macro_rules! fixed_precision {
  ( $ty:ty, $uty:ty, $ulong:ty ) => {
    impl HullScalar for $ty {
      fn from_constant(val: i8) -> Self {
        val as $ty
      }

      fn cmp_cross(p: &[Self; 2], a: &[Self; 2], b: &[Self; 2]) -> Ordering {
        // Magnitude of `a - b` and whether it is negative.
        // diff(0, 10) => (10, true)
        // diff(10, 0) => (10, false)
        // diff(i8::MIN, i8::MAX) => (255_u16, true)
        fn diff(a: $ty, b: $ty) -> ($ulong, bool) {
          if b > a {
            (b.wrapping_sub(a) as $uty as $ulong, true)
          } else {
            (a.wrapping_sub(b) as $uty as $ulong, false)
          }
        }
        let (ax, ax_neg) = diff(a[0], p[0]);
        let (ay, ay_neg) = diff(a[1], p[1]);
        let (bx, bx_neg) = diff(b[0], p[0]);
        let (by, by_neg) = diff(b[1], p[1]);
        // cross = ax*by - bx*ay
        let ax_by_neg = (ax_neg ^ by_neg) && ax != 0 && by != 0;
        let bx_ay_neg = (bx_neg ^ ay_neg) && bx != 0 && ay != 0;
        match (ax_by_neg, bx_ay_neg) {
          (true, false) => Ordering::Less,
          (false, true) => Ordering::Greater,
          (true, true) => (bx * ay).cmp(&(ax * by)),
          (false, false) => (ax * by).cmp(&(bx * ay)),
        }
      }

      fn cmp_dist(p: &[Self; 2], a: &[Self; 2], b: &[Self; 2]) -> Ordering {
        fn diff(a: $ty, b: $ty) -> $ulong {
          if b > a {
            b.wrapping_sub(a) as $uty as $ulong
          } else {
            a.wrapping_sub(b) as $uty as $ulong
          }
        }
        let pa_x = diff(p[0], a[0]);
        let pa_y = diff(p[1], a[1]);
        let (pa_dist_squared, pa_overflow) = (pa_x * pa_x).overflowing_add(pa_y * pa_y);
        let pb_x = diff(p[0], b[0]);
        let pb_y = diff(p[1], b[1]);
        let (pb_dist_squared, pb_overflow) = (pb_x * pb_x).overflowing_add(pb_y * pb_y);
        match (pa_overflow, pb_overflow) {
          (true, false) => Ordering::Greater,
          (false, true) => Ordering::Less,
          _ => pa_dist_squared.cmp(&pb_dist_squared),
        }
      }
    }
  };
}

macro_rules! arbitrary_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl HullScalar for $ty {
        fn from_constant(val: i8) -> Self {
          <$ty>::from(val)
        }

        fn cmp_cross(p: &[Self; 2], a: &[Self; 2], b: &[Self; 2]) -> Ordering {
          let ax_by = (&a[0] - &p[0]) * (&b[1] - &p[1]);
          let bx_ay = (&b[0] - &p[0]) * (&a[1] - &p[1]);
          ax_by.cmp(&bx_ay)
        }

        fn cmp_dist(p: &[Self; 2], a: &[Self; 2], b: &[Self; 2]) -> Ordering {
          let pa_x = &a[0] - &p[0];
          let pa_y = &a[1] - &p[1];
          let pa_dist_squared: Self = &pa_x * &pa_x + &pa_y * &pa_y;
          let pb_x = &b[0] - &p[0];
          let pb_y = &b[1] - &p[1];
          let pb_dist_squared: Self = &pb_x * &pb_x + &pb_y * &pb_y;
          pa_dist_squared.cmp(&pb_dist_squared)
        }
      }
    )*
  };
}

fixed_precision!(i8, u8, u16);
fixed_precision!(i16, u16, u32);
fixed_precision!(i32, u32, u64);
fixed_precision!(i64, u64, u128);
fixed_precision!(isize, usize, u128);
arbitrary_precision!(num_bigint::BigInt);

#[cfg(test)]
pub mod testing;
