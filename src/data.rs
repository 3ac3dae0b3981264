mod canonical;
pub(crate) mod point;
mod stack;

pub use canonical::CanonicalPoints;
pub use point::Point;
pub use stack::Stack;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
