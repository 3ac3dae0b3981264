//! Reading point sets from text.
//!
//! The format is a whitespace-separated list of integers. Consecutive pairs
//! are the `x` and `y` coordinates of one point. Hulls are written back with
//! [`ConvexHull::write_to`](crate::algorithms::ConvexHull::write_to).
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::data::Point;
use crate::{Error, HullScalar};

/// # Errors
/// * [`Error::InvalidCoordinate`] for the first token that is not an integer.
/// * [`Error::OddCoordinateCount`] if the integers cannot be paired up. No
///   point is built in that case.
///
/// ```rust
/// # use rhull::io::parse_points;
/// # use rhull::data::Point;
/// # use rhull::Error;
/// let pts: Vec<Point<i32>> = parse_points("0 0\n4 0   4 4").unwrap();
/// assert_eq!(pts, vec![Point::new([0, 0]), Point::new([4, 0]), Point::new([4, 4])]);
/// assert_eq!(parse_points::<i32>("1 2 3").err(), Some(Error::OddCoordinateCount));
/// ```
pub fn parse_points<T>(input: &str) -> Result<Vec<Point<T>>, Error>
where
  T: HullScalar + FromStr,
{
  let coords = input
    .split_whitespace()
    .map(|token| {
      token
        .parse::<T>()
        .map_err(|_| Error::InvalidCoordinate(token.to_owned()))
    })
    .collect::<Result<Vec<T>, Error>>()?;
  if coords.len() % 2 != 0 {
    return Err(Error::OddCoordinateCount);
  }
  Ok(
    coords
      .chunks_exact(2)
      .map(|pair| Point::new([pair[0].clone(), pair[1].clone()]))
      .collect(),
  )
}

pub fn read_points<T, R>(mut reader: R) -> Result<Vec<Point<T>>, Error>
where
  T: HullScalar + FromStr,
  R: Read,
{
  let mut input = String::new();
  reader.read_to_string(&mut input)?;
  parse_points(&input)
}

pub fn read_points_from_file<T, P>(path: P) -> Result<Vec<Point<T>>, Error>
where
  T: HullScalar + FromStr,
  P: AsRef<Path>,
{
  let path = path.as_ref();
  let pts = read_points(File::open(path)?)?;
  debug!("read {} points from {}", pts.len(), path.display());
  Ok(pts)
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;

  use claims::{assert_err_eq, assert_ok_eq};
  use num_bigint::BigInt;
  use std::io::Write;

  #[test]
  fn empty_text() {
    assert_ok_eq!(parse_points::<i32>(" \n\t "), Vec::<Point>::new());
  }

  #[test]
  fn odd_count() {
    assert_err_eq!(
      parse_points::<i32>("-7 -10\n0 -10\n10"),
      Error::OddCoordinateCount
    );
  }

  #[test]
  fn bad_token() {
    assert_err_eq!(
      parse_points::<i32>("1 2 x 4"),
      Error::InvalidCoordinate("x".to_owned())
    );
    assert_err_eq!(
      parse_points::<i8>("1 200"),
      Error::InvalidCoordinate("200".to_owned())
    );
  }

  #[test]
  fn bigint_coordinates() {
    let pts = parse_points::<BigInt>("123456789012345678901234567890 -1").unwrap();
    assert_eq!(pts.len(), 1);
    assert_eq!(pts[0].y_coord(), &BigInt::from(-1));
  }

  #[test]
  fn from_reader() {
    assert_ok_eq!(
      read_points::<i64, _>(&b"5 5\n-3 2\n"[..]),
      vec![Point::new([5, 5]), Point::new([-3, 2])]
    );
  }

  #[test]
  fn from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "0 0 1 0\n2 0 3 0\n").unwrap();
    let pts: Vec<Point> = read_points_from_file(file.path()).unwrap();
    assert_eq!(pts.len(), 4);
  }

  #[test]
  fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert_err_eq!(
      read_points_from_file::<i32, _>(dir.path().join("absent.txt")),
      Error::Io(std::io::ErrorKind::NotFound)
    );
  }
}
