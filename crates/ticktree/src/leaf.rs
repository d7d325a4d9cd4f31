//! Leaf adapters bridging to externally supplied logic.
//!
//! Leaves are the only place the engine touches host code. The engine imposes
//! no constraint on what the injected callables do, only on the
//! [`NodeState`]/`bool` contract they return. A collaborator that cannot
//! answer (a failed query, an unreachable target) must surface as `Failure`
//! through these adapters; errors never cross the evaluation boundary.

use std::time::Duration;

use crate::{Behavior, NodeState, Polarity};

/// Evaluates a supplied predicate every tick.
///
/// `Success` iff the predicate returns `true`, otherwise `Failure`. Never
/// returns `Running`.
pub struct Condition<C> {
    predicate: Box<dyn FnMut(&mut C) -> bool + Send>,
    polarity: Polarity,
}

impl<C> Condition<C> {
    /// Creates a condition leaf from the given predicate.
    pub fn new(predicate: impl FnMut(&mut C) -> bool + Send + 'static) -> Self {
        Self {
            predicate: Box::new(predicate),
            polarity: Polarity::Normal,
        }
    }

    /// Sets the output polarity applied to this node's own result.
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }
}

impl<C> Behavior<C> for Condition<C> {
    fn evaluate(&mut self, ctx: &mut C, _dt: Duration) -> NodeState {
        if (self.predicate)(ctx) {
            NodeState::Success
        } else {
            NodeState::Failure
        }
    }

    fn polarity(&self) -> Polarity {
        self.polarity
    }
}

/// Invokes a supplied callable that itself reports a [`NodeState`].
///
/// This is the seam for stateful external behaviors (steering, physics
/// queries, animations) that need to span ticks: the callable keeps its own
/// state and reports `Running` until it is done.
pub struct Action<C> {
    action: Box<dyn FnMut(&mut C) -> NodeState + Send>,
    polarity: Polarity,
}

impl<C> Action<C> {
    /// Creates an action leaf from the given callable.
    pub fn new(action: impl FnMut(&mut C) -> NodeState + Send + 'static) -> Self {
        Self {
            action: Box::new(action),
            polarity: Polarity::Normal,
        }
    }

    /// Sets the output polarity applied to this node's own result.
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }
}

impl<C> Behavior<C> for Action<C> {
    fn evaluate(&mut self, ctx: &mut C, _dt: Duration) -> NodeState {
        (self.action)(ctx)
    }

    fn polarity(&self) -> Polarity {
        self.polarity
    }
}

/// A re-arming pulse generator.
///
/// Counts down by `dt` each tick, reporting `Running`; once the countdown is
/// exhausted it reports `Success` exactly once, re-arms to the configured
/// delay, and starts over. The expiry pulse lands on the tick *after* the
/// countdown reaches zero.
pub struct Timer {
    delay: Duration,
    remaining: Duration,
    polarity: Polarity,
}

impl Timer {
    /// Creates a timer that pulses `Success` once per `delay` of accumulated
    /// tick time.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            remaining: delay,
            polarity: Polarity::Normal,
        }
    }

    /// Sets the output polarity applied to this node's own result.
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }
}

impl<C> Behavior<C> for Timer {
    fn evaluate(&mut self, _ctx: &mut C, dt: Duration) -> NodeState {
        if self.remaining.is_zero() {
            self.remaining = self.delay;
            return NodeState::Success;
        }

        self.remaining = self.remaining.saturating_sub(dt);
        NodeState::Running
    }

    fn polarity(&self) -> Polarity {
        self.polarity
    }
}

/// Emits a `tracing` debug event built from the context, then succeeds.
///
/// Handy while shaping a tree: drop one into a composite to see how far an
/// activation gets each tick.
pub struct Trace<C> {
    message: Box<dyn FnMut(&mut C) -> String + Send>,
}

impl<C> Trace<C> {
    /// Creates a trace leaf from the given message builder.
    pub fn new(message: impl FnMut(&mut C) -> String + Send + 'static) -> Self {
        Self {
            message: Box::new(message),
        }
    }
}

impl<C> Behavior<C> for Trace<C> {
    fn evaluate(&mut self, ctx: &mut C, _dt: Duration) -> NodeState {
        tracing::debug!(target: "ticktree", "{}", (self.message)(ctx));
        NodeState::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: Duration = Duration::from_millis(10);

    #[test]
    fn condition_maps_bool_to_terminal_states() {
        let mut ctx = 5i32;

        let mut positive = Condition::new(|value: &mut i32| *value > 0);
        assert_eq!(positive.tick(&mut ctx, DT), NodeState::Success);

        let mut negative = Condition::new(|value: &mut i32| *value < 0);
        assert_eq!(negative.tick(&mut ctx, DT), NodeState::Failure);
    }

    #[test]
    fn inverted_condition_flips_result() {
        let mut node =
            Condition::new(|value: &mut i32| *value > 0).with_polarity(Polarity::Inverted);
        assert_eq!(node.tick(&mut 5, DT), NodeState::Failure);
        assert_eq!(node.tick(&mut -5, DT), NodeState::Success);
    }

    #[test]
    fn action_passes_state_through_and_mutates_context() {
        let mut node = Action::new(|count: &mut u32| {
            *count += 1;
            if *count < 3 {
                NodeState::Running
            } else {
                NodeState::Success
            }
        });

        let mut ctx = 0u32;
        assert_eq!(node.tick(&mut ctx, DT), NodeState::Running);
        assert_eq!(node.tick(&mut ctx, DT), NodeState::Running);
        assert_eq!(node.tick(&mut ctx, DT), NodeState::Success);
        assert_eq!(ctx, 3);
    }

    #[test]
    fn timer_pulses_once_and_rearms() {
        // 30ms delay at 10ms per tick: the pulse lands on the tick after the
        // countdown hits zero.
        let mut timer = Timer::new(Duration::from_millis(30));
        let mut ctx = ();

        for _ in 0..3 {
            assert_eq!(timer.tick(&mut ctx, DT), NodeState::Running);
        }
        assert_eq!(timer.tick(&mut ctx, DT), NodeState::Success);

        // Re-armed: the cycle repeats.
        for _ in 0..3 {
            assert_eq!(timer.tick(&mut ctx, DT), NodeState::Running);
        }
        assert_eq!(timer.tick(&mut ctx, DT), NodeState::Success);
    }

    #[test]
    fn timer_counts_down_by_elapsed_time_not_ticks() {
        let mut timer = Timer::new(Duration::from_millis(30));
        let mut ctx = ();

        assert_eq!(
            timer.tick(&mut ctx, Duration::from_millis(100)),
            NodeState::Running
        );
        // One oversized dt exhausted the whole countdown.
        assert_eq!(timer.tick(&mut ctx, DT), NodeState::Success);
    }

    #[test]
    fn trace_always_succeeds() {
        let mut node = Trace::new(|count: &mut u32| format!("count={count}"));
        assert_eq!(node.tick(&mut 7, DT), NodeState::Success);
    }
}
