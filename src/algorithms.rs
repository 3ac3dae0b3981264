pub mod convex_hull;
pub mod sort;

pub use convex_hull::{compare, Comparison, ConvexHull, HullAlgorithm};

#[doc(inline)]
pub use convex_hull::graham_scan::convex_hull;
