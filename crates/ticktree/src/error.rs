//! Construction-time errors.
//!
//! Evaluation itself is infallible (`tick` always yields a
//! [`NodeState`](crate::NodeState)); misuse is rejected while the tree is
//! being built, before the first tick runs.

use thiserror::Error;

/// Errors detected while constructing a behavior tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A weighted-random node was given no children, so the total weight
    /// cannot be positive and no draw is possible.
    #[error("weighted-random node has no children")]
    NoWeightedChildren,

    /// Every weight must be positive; a zero weight would make the child
    /// unselectable and a zero total would make the draw range empty.
    #[error("weighted-random child at index {index} has zero weight")]
    ZeroWeight {
        /// Position of the offending child in construction order.
        index: usize,
    },
}
