//! Decorator behavior nodes.
//!
//! Decorators wrap exactly one child behavior and modify its result. This
//! module provides [`Invert`] (NOT logic) and [`AlwaysSucceed`] (failure
//! suppression). Both let `Running` through untouched so that a suspended
//! child keeps its activation.

use std::time::Duration;

use crate::{Behavior, NodeState, Polarity};

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - `Success` becomes `Failure` and vice versa
/// - `Running` passes through unchanged
///
/// This is analogous to a logical NOT (!) operation. For flipping a node's
/// own output without an extra tree node, see [`Polarity`].
pub struct Invert<C> {
    child: Box<dyn Behavior<C>>,
    polarity: Polarity,
}

impl<C> Invert<C> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self {
            child,
            polarity: Polarity::Normal,
        }
    }

    /// Sets the output polarity applied to this node's own result.
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }
}

impl<C> Behavior<C> for Invert<C> {
    fn evaluate(&mut self, ctx: &mut C, dt: Duration) -> NodeState {
        self.child.tick(ctx, dt).inverted()
    }

    fn polarity(&self) -> Polarity {
        self.polarity
    }
}

/// Reports `Success` for any terminal result of its child.
///
/// # Semantics
///
/// - `Running` passes through unchanged (the child stays suspended)
/// - `Success` and `Failure` both become `Success`
///
/// Useful for optional sub-goals that should not abort an enclosing
/// [`Sequence`](crate::Sequence).
pub struct AlwaysSucceed<C> {
    child: Box<dyn Behavior<C>>,
    polarity: Polarity,
}

impl<C> AlwaysSucceed<C> {
    /// Creates a new always-succeed wrapper around the given child behavior.
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self {
            child,
            polarity: Polarity::Normal,
        }
    }

    /// Sets the output polarity applied to this node's own result.
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }
}

impl<C> Behavior<C> for AlwaysSucceed<C> {
    fn evaluate(&mut self, ctx: &mut C, dt: Duration) -> NodeState {
        match self.child.tick(ctx, dt) {
            NodeState::Running => NodeState::Running,
            _ => NodeState::Success,
        }
    }

    fn polarity(&self) -> Polarity {
        self.polarity
    }
}
