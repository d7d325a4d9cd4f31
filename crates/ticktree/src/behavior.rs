//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, the fundamental abstraction
//! for all behavior tree nodes. The trait is generic over a context type `C`,
//! allowing nodes to read host state and communicate out-of-band (e.g. via a
//! [`Blackboard`](crate::Blackboard) embedded in the context).

use std::time::Duration;

use crate::NodeState;

/// Output polarity applied by [`Behavior::tick`] to a node's own result.
///
/// This is a per-node flag, independent of the
/// [`Invert`](crate::decorator::Invert) decorator: it flips what the node
/// itself reports without introducing an extra node into the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Report the evaluation result unchanged.
    #[default]
    Normal,
    /// Swap `Success` and `Failure`; `Running` passes through.
    Inverted,
}

/// A behavior tree node that can be evaluated against a context.
///
/// Implementors provide [`evaluate`](Behavior::evaluate); callers go through
/// [`tick`](Behavior::tick), which applies the node's [`Polarity`] on top.
/// Evaluation never yields an error: domain failures are translated into
/// [`NodeState::Failure`] at the leaves.
pub trait Behavior<C>: Send {
    /// Evaluate this node for one tick.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the host context. Nodes can read state
    ///   and modify it (e.g., to store intermediate results).
    /// * `dt` - Time elapsed since the previous tick, supplied by the host
    ///   loop. The engine never consults a clock of its own.
    ///
    /// Must be safe to invoke once per tick; may mutate only the node's own
    /// continuation state (and the shared context).
    fn evaluate(&mut self, ctx: &mut C, dt: Duration) -> NodeState;

    /// Output polarity applied to this node's result.
    fn polarity(&self) -> Polarity {
        Polarity::Normal
    }

    /// Evaluates the node and applies its polarity.
    ///
    /// This is the only entry point parents and drivers use.
    fn tick(&mut self, ctx: &mut C, dt: Duration) -> NodeState {
        let state = self.evaluate(ctx, dt);
        match self.polarity() {
            Polarity::Normal => state,
            Polarity::Inverted => state.inverted(),
        }
    }
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes. Only
/// `evaluate` and `polarity` are forwarded, so the provided `tick` applies
/// the inner node's polarity exactly once.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn evaluate(&mut self, ctx: &mut C, dt: Duration) -> NodeState {
        (**self).evaluate(ctx, dt)
    }

    #[inline]
    fn polarity(&self) -> Polarity {
        (**self).polarity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        state: NodeState,
        polarity: Polarity,
    }

    impl Behavior<()> for Fixed {
        fn evaluate(&mut self, _ctx: &mut (), _dt: Duration) -> NodeState {
            self.state
        }

        fn polarity(&self) -> Polarity {
            self.polarity
        }
    }

    fn tick(state: NodeState, polarity: Polarity) -> NodeState {
        let mut node = Fixed { state, polarity };
        node.tick(&mut (), Duration::ZERO)
    }

    #[test]
    fn normal_polarity_passes_result_through() {
        assert_eq!(tick(NodeState::Success, Polarity::Normal), NodeState::Success);
        assert_eq!(tick(NodeState::Failure, Polarity::Normal), NodeState::Failure);
        assert_eq!(tick(NodeState::Running, Polarity::Normal), NodeState::Running);
    }

    #[test]
    fn inverted_polarity_swaps_terminal_results() {
        assert_eq!(tick(NodeState::Success, Polarity::Inverted), NodeState::Failure);
        assert_eq!(tick(NodeState::Failure, Polarity::Inverted), NodeState::Success);
    }

    #[test]
    fn inverted_polarity_keeps_running_suspended() {
        assert_eq!(tick(NodeState::Running, Polarity::Inverted), NodeState::Running);
    }

    #[test]
    fn boxed_behavior_applies_inner_polarity_once() {
        let mut node: Box<dyn Behavior<()>> = Box::new(Fixed {
            state: NodeState::Success,
            polarity: Polarity::Inverted,
        });
        assert_eq!(node.tick(&mut (), Duration::ZERO), NodeState::Failure);
    }
}
