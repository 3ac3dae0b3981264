//! Uniformly random point sets.
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::ops::RangeInclusive;

use crate::data::Point;
use crate::{Error, HullScalar};

/// Default half-width of the square random points are drawn from.
pub const DEFAULT_EXTENT: i8 = 50;

/// Generator for `count` points with both coordinates drawn uniformly from
/// `range`, `[-50, 50]` unless configured otherwise.
///
/// ```rust
/// # use rhull::random::RandomPoints;
/// # use rand::SeedableRng;
/// let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
/// let pts = RandomPoints::<i32>::new(100).generate(&mut rng).unwrap();
/// assert_eq!(pts.len(), 100);
/// assert!(pts.iter().all(|pt| (-50..=50).contains(pt.x_coord())));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomPoints<T = i32> {
  pub count: usize,
  pub range: RangeInclusive<T>,
}

impl<T> RandomPoints<T>
where
  T: HullScalar + SampleUniform,
{
  pub fn new(count: usize) -> RandomPoints<T> {
    RandomPoints {
      count,
      range: T::from_constant(-DEFAULT_EXTENT)..=T::from_constant(DEFAULT_EXTENT),
    }
  }

  #[must_use]
  pub fn with_range(self, range: RangeInclusive<T>) -> RandomPoints<T> {
    RandomPoints { range, ..self }
  }

  /// # Errors
  /// * [`Error::EmptyInput`] when asked for zero points.
  /// * [`Error::EmptyRange`] when `range.start() > range.end()`.
  pub fn generate<R>(&self, rng: &mut R) -> Result<Vec<Point<T>>, Error>
  where
    R: Rng + ?Sized,
  {
    if self.count == 0 {
      return Err(Error::EmptyInput);
    }
    if self.range.start() > self.range.end() {
      return Err(Error::EmptyRange);
    }
    Ok(
      (0..self.count)
        .map(|_| {
          Point::new([
            rng.gen_range(self.range.clone()),
            rng.gen_range(self.range.clone()),
          ])
        })
        .collect(),
    )
  }
}
