//! Plain-text comparison tables.
use std::fmt;

use crate::algorithms::ConvexHull;

const RULE: &str = "---------------------------------------";

/// One row per hull: algorithm label, canonical point count, nanoseconds.
///
/// ```text
/// algorithm          size        time (ns)
/// ---------------------------------------
/// Graham's scan      1000        9200867
/// Jarvis' march      1000        5104311
/// ---------------------------------------
/// ```
#[derive(Debug, Clone)]
pub struct StatsTable<'a, T> {
  rows: Vec<&'a ConvexHull<T>>,
}

impl<'a, T> StatsTable<'a, T> {
  pub fn new(rows: Vec<&'a ConvexHull<T>>) -> StatsTable<'a, T> {
    StatsTable { rows }
  }
}

impl<'a, T> fmt::Display for StatsTable<'a, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{:<19}{:<12}{}", "algorithm", "size", "time (ns)")?;
    writeln!(f, "{}", RULE)?;
    for hull in self.rows.iter() {
      writeln!(
        f,
        "{:<19}{:<12}{}",
        hull.label(),
        hull.canonical_len(),
        hull.elapsed().as_nanos()
      )?;
    }
    write!(f, "{}", RULE)
  }
}
