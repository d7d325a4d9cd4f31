//! Builder utilities for ergonomic behavior tree construction.
//!
//! These helpers reduce boilerplate when assembling trees. Instead of writing
//! verbose `Box::new(Sequence::new(vec![...]))`, you can use shorter
//! functions like `sequence(vec![...])`.

use std::time::Duration;

use crate::{
    Action, AlwaysSucceed, Behavior, BuildError, Condition, Fallback, Invert, NodeState, Parallel,
    PriorityParallel, Sequence, Timer, Trace, WeightedRandom,
};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

/// Creates a fallback node.
///
/// Shorthand for `Box::new(Fallback::new(children))`.
#[inline]
pub fn fallback<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Fallback::new(children))
}

/// Creates a parallel node.
///
/// Shorthand for `Box::new(Parallel::new(children))`.
#[inline]
pub fn parallel<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Parallel::new(children))
}

/// Creates a priority-parallel node.
///
/// Shorthand for `Box::new(PriorityParallel::new(children))`.
#[inline]
pub fn priority_parallel<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(PriorityParallel::new(children))
}

/// Creates a weighted-random node from `(child, weight)` pairs.
///
/// # Errors
///
/// Fails fast on an empty list or a zero weight, like
/// [`WeightedRandom::new`].
#[inline]
pub fn weighted_random<C: 'static>(
    children: Vec<(Box<dyn Behavior<C>>, u32)>,
) -> Result<Box<dyn Behavior<C>>, BuildError> {
    Ok(Box::new(WeightedRandom::new(children)?))
}

/// Creates an inverter node.
///
/// Shorthand for `Box::new(Invert::new(child))`.
#[inline]
pub fn invert<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Invert::new(child))
}

/// Creates an always-succeed node.
///
/// Shorthand for `Box::new(AlwaysSucceed::new(child))`.
#[inline]
pub fn always_succeed<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(AlwaysSucceed::new(child))
}

/// Creates a condition leaf from a boolean predicate.
#[inline]
pub fn condition<C: 'static>(
    predicate: impl FnMut(&mut C) -> bool + Send + 'static,
) -> Box<dyn Behavior<C>> {
    Box::new(Condition::new(predicate))
}

/// Creates an action leaf from a state-returning callable.
#[inline]
pub fn action<C: 'static>(
    action: impl FnMut(&mut C) -> NodeState + Send + 'static,
) -> Box<dyn Behavior<C>> {
    Box::new(Action::new(action))
}

/// Creates a periodic timer leaf.
#[inline]
pub fn timer<C: 'static>(delay: Duration) -> Box<dyn Behavior<C>> {
    Box::new(Timer::new(delay))
}

/// Creates a trace leaf that logs a debug message each tick.
#[inline]
pub fn trace<C: 'static>(
    message: impl FnMut(&mut C) -> String + Send + 'static,
) -> Box<dyn Behavior<C>> {
    Box::new(Trace::new(message))
}
