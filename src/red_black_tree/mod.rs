//! Persistent self-balancing binary search tree that uses a color per node to ensure that the
//! tree remains approximately balanced during insertions and deletions.
//!
//! Insertion rebalances with Okasaki's four case rotation. Deletion tracks a lost unit of black
//! height with a transient double black color that is pushed towards the root until a rotation
//! absorbs it.

pub mod node;
mod set;
pub mod tree;

pub use self::set::RedBlackSet;
