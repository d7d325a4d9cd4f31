//! Tree driver.

use std::time::Duration;

use crate::{Behavior, BuildError};

/// Owns one root node and advances it once per host tick.
///
/// The tree is built once, before ticking begins, and never restructured;
/// replacing behavior at runtime means building a new `Tree`. The driver does
/// not own a clock or a loop: the host calls [`tick`](Tree::tick) at its own
/// fixed interval and supplies the elapsed time.
pub struct Tree<C> {
    root: Box<dyn Behavior<C>>,
}

impl<C> Tree<C> {
    /// Creates a tree around an already-built root node.
    pub fn new(root: Box<dyn Behavior<C>>) -> Self {
        Self { root }
    }

    /// Builds the root via a one-shot setup hook.
    ///
    /// # Errors
    ///
    /// Construction mistakes (e.g. a zero weight in a
    /// [`WeightedRandom`](crate::WeightedRandom)) surface here, before the
    /// first tick ever runs.
    pub fn build<F>(setup: F) -> Result<Self, BuildError>
    where
        F: FnOnce() -> Result<Box<dyn Behavior<C>>, BuildError>,
    {
        Ok(Self::new(setup()?))
    }

    /// Advances the tree by one tick.
    ///
    /// Call once per fixed interval with the time elapsed since the previous
    /// call. The root's result is fire-and-forget at this level; it is only
    /// recorded as a trace event.
    pub fn tick(&mut self, ctx: &mut C, dt: Duration) {
        let state = self.root.tick(ctx, dt);
        tracing::trace!(target: "ticktree", ?state, "root ticked");
    }
}
