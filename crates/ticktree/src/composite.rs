//! Composite behavior nodes.
//!
//! Composite nodes own an ordered collection of children and decide how the
//! children's results combine. Because children may report
//! [`NodeState::Running`], every composite keeps private continuation state
//! between ticks so that a suspended activation resumes where it stopped
//! instead of restarting siblings that already finished. That continuation
//! state is fully reset whenever the composite itself reaches a terminal
//! result.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Behavior, BuildError, NodeState, Polarity};

/// Evaluates child behaviors in order until one fails, suspending across
/// ticks at a `Running` child.
///
/// # Semantics
///
/// On a fresh activation children run left to right:
/// - `Failure` aborts immediately with `Failure`; later children are untouched
/// - `Success` advances to the next child
/// - `Running` stores the child's index and returns `Running`
///
/// On the next tick a stored index resumes that child first. If it succeeds,
/// iteration continues forward through the remaining children under the fresh
/// rules; if it fails, the whole sequence fails; if it is still running, the
/// sequence stays suspended at the same index. Exhausting all children yields
/// `Success`. A sequence with no children trivially succeeds.
///
/// This is the suspendable analogue of a short-circuited logical AND (&&).
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    running: Option<usize>,
    polarity: Polarity,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self {
            children,
            running: None,
            polarity: Polarity::Normal,
        }
    }

    /// Sets the output polarity applied to this node's own result.
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn evaluate(&mut self, ctx: &mut C, dt: Duration) -> NodeState {
        // `take` clears the continuation state up front; only the Running
        // arms below re-establish it.
        let start = match self.running.take() {
            Some(index) => match self.children[index].tick(ctx, dt) {
                NodeState::Running => {
                    self.running = Some(index);
                    return NodeState::Running;
                }
                NodeState::Failure => return NodeState::Failure,
                NodeState::Success => index + 1,
            },
            None => 0,
        };

        for index in start..self.children.len() {
            match self.children[index].tick(ctx, dt) {
                NodeState::Success => continue,
                NodeState::Failure => return NodeState::Failure,
                NodeState::Running => {
                    self.running = Some(index);
                    return NodeState::Running;
                }
            }
        }

        NodeState::Success
    }

    fn polarity(&self) -> Polarity {
        self.polarity
    }
}

/// Evaluates child behaviors in order until one succeeds, suspending across
/// ticks at a `Running` child.
///
/// # Semantics
///
/// Exact dual of [`Sequence`]: `Success` short-circuits, `Failure` advances,
/// `Running` suspends at the stored index and resumes there next tick.
/// Exhausting all children yields `Failure`, as does a fallback with no
/// children.
///
/// This is the suspendable analogue of a short-circuited logical OR (||).
pub struct Fallback<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    running: Option<usize>,
    polarity: Polarity,
}

impl<C> Fallback<C> {
    /// Creates a new fallback with the given child behaviors.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self {
            children,
            running: None,
            polarity: Polarity::Normal,
        }
    }

    /// Sets the output polarity applied to this node's own result.
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }
}

impl<C> Behavior<C> for Fallback<C> {
    fn evaluate(&mut self, ctx: &mut C, dt: Duration) -> NodeState {
        let start = match self.running.take() {
            Some(index) => match self.children[index].tick(ctx, dt) {
                NodeState::Running => {
                    self.running = Some(index);
                    return NodeState::Running;
                }
                NodeState::Success => return NodeState::Success,
                NodeState::Failure => index + 1,
            },
            None => 0,
        };

        for index in start..self.children.len() {
            match self.children[index].tick(ctx, dt) {
                NodeState::Failure => continue,
                NodeState::Success => return NodeState::Success,
                NodeState::Running => {
                    self.running = Some(index);
                    return NodeState::Running;
                }
            }
        }

        NodeState::Failure
    }

    fn polarity(&self) -> Polarity {
        self.polarity
    }
}

/// Applies the shared completion policy of the parallel composites to a slot
/// array after this tick's evaluations: any `Failure` fails the whole node,
/// otherwise any `Running` keeps it suspended, otherwise it succeeds. On a
/// terminal result every slot is reset to `Running` so the next activation
/// restarts every child from scratch.
fn settle(results: &mut [NodeState]) -> NodeState {
    if results.iter().any(|slot| slot.is_failure()) {
        results.fill(NodeState::Running);
        NodeState::Failure
    } else if results.iter().any(|slot| slot.is_running()) {
        NodeState::Running
    } else {
        results.fill(NodeState::Running);
        NodeState::Success
    }
}

/// Runs all children as concurrent sub-goals within the tick loop.
///
/// # Semantics
///
/// One result slot per child, initialized to `Running`. Each tick only the
/// still-`Running` slots are re-evaluated; children that already resolved
/// during this activation keep their recorded result and are skipped. The
/// completion policy is: any `Failure` fails the group, else any `Running`
/// keeps it running, else all succeeded. Terminal results reset every slot.
///
/// "Parallel" means logical concurrency of sub-goals within a single
/// synchronous tick, not operating-system concurrency.
pub struct Parallel<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    results: Vec<NodeState>,
    polarity: Polarity,
}

impl<C> Parallel<C> {
    /// Creates a new parallel node with the given child behaviors.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        let results = vec![NodeState::Running; children.len()];
        Self {
            children,
            results,
            polarity: Polarity::Normal,
        }
    }

    /// Sets the output polarity applied to this node's own result.
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }
}

impl<C> Behavior<C> for Parallel<C> {
    fn evaluate(&mut self, ctx: &mut C, dt: Duration) -> NodeState {
        for (child, slot) in self.children.iter_mut().zip(self.results.iter_mut()) {
            if slot.is_running() {
                *slot = child.tick(ctx, dt);
            }
        }
        settle(&mut self.results)
    }

    fn polarity(&self) -> Polarity {
        self.polarity
    }
}

/// [`Parallel`] with children ranked by construction order.
///
/// # Semantics
///
/// Slots are scanned left to right. A still-`Running` slot is re-evaluated
/// and the new result stored. The first slot that is *not* running (it
/// resolved on an earlier tick) forces itself and every lower-ranked slot to
/// `Success` for this tick's completion check, so only still-running,
/// higher-ranked children can raise a `Failure`. The completion policy then
/// matches [`Parallel`].
///
/// Note that the masking also overwrites a lower-ranked slot's recorded
/// terminal result. This mirrors the reference behavior this engine was
/// ported from and is kept intentionally; see DESIGN.md before changing it.
pub struct PriorityParallel<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    results: Vec<NodeState>,
    polarity: Polarity,
}

impl<C> PriorityParallel<C> {
    /// Creates a new priority-parallel node. Children earlier in the list
    /// outrank later ones.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        let results = vec![NodeState::Running; children.len()];
        Self {
            children,
            results,
            polarity: Polarity::Normal,
        }
    }

    /// Sets the output polarity applied to this node's own result.
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }
}

impl<C> Behavior<C> for PriorityParallel<C> {
    fn evaluate(&mut self, ctx: &mut C, dt: Duration) -> NodeState {
        for index in 0..self.children.len() {
            if self.results[index].is_running() {
                self.results[index] = self.children[index].tick(ctx, dt);
            } else {
                // Reaching a slot that resolved on an earlier tick masks it
                // and everything below it as Success for this tick.
                for slot in &mut self.results[index..] {
                    *slot = NodeState::Success;
                }
            }
        }
        settle(&mut self.results)
    }

    fn polarity(&self) -> Polarity {
        self.polarity
    }
}

/// Picks one child per activation, with probability proportional to its
/// weight.
///
/// # Semantics
///
/// On a fresh activation a uniform integer in `[0, total_weight)` is drawn
/// and the children are walked in construction order, subtracting each weight
/// until the remainder goes negative; that child is evaluated. While the
/// selected child reports `Running` the same child is re-evaluated on
/// following ticks without a new draw; once it resolves, the next activation
/// draws again.
///
/// Weights must be positive; construction fails otherwise.
pub struct WeightedRandom<C> {
    children: Vec<(Box<dyn Behavior<C>>, u32)>,
    total: u64,
    rng: SmallRng,
    running: Option<usize>,
    polarity: Polarity,
}

impl<C> WeightedRandom<C> {
    /// Creates a weighted-random node seeded from system entropy.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::NoWeightedChildren`] for an empty list and
    /// [`BuildError::ZeroWeight`] if any weight is zero.
    pub fn new(children: Vec<(Box<dyn Behavior<C>>, u32)>) -> Result<Self, BuildError> {
        Self::with_rng(children, SmallRng::from_entropy())
    }

    /// Creates a weighted-random node with a deterministic seed.
    ///
    /// Useful for reproducible simulations and tests.
    ///
    /// # Errors
    ///
    /// Same conditions as [`WeightedRandom::new`].
    pub fn with_seed(
        children: Vec<(Box<dyn Behavior<C>>, u32)>,
        seed: u64,
    ) -> Result<Self, BuildError> {
        Self::with_rng(children, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(
        children: Vec<(Box<dyn Behavior<C>>, u32)>,
        rng: SmallRng,
    ) -> Result<Self, BuildError> {
        if children.is_empty() {
            return Err(BuildError::NoWeightedChildren);
        }
        if let Some(index) = children.iter().position(|(_, weight)| *weight == 0) {
            return Err(BuildError::ZeroWeight { index });
        }
        let total = children.iter().map(|(_, weight)| u64::from(*weight)).sum();

        Ok(Self {
            children,
            total,
            rng,
            running: None,
            polarity: Polarity::Normal,
        })
    }

    /// Sets the output polarity applied to this node's own result.
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    fn draw(&mut self) -> usize {
        let mut roll = self.rng.gen_range(0..self.total);
        for (index, (_, weight)) in self.children.iter().enumerate() {
            let weight = u64::from(*weight);
            if roll < weight {
                return index;
            }
            roll -= weight;
        }
        // roll < total guarantees the walk terminates inside the loop.
        unreachable!("draw exceeded total weight")
    }
}

impl<C> Behavior<C> for WeightedRandom<C> {
    fn evaluate(&mut self, ctx: &mut C, dt: Duration) -> NodeState {
        let index = match self.running.take() {
            // A suspended selection is pinned: no new draw until it resolves.
            Some(index) => index,
            None => self.draw(),
        };

        let state = self.children[index].0.tick(ctx, dt);
        if state.is_running() {
            self.running = Some(index);
        }
        state
    }

    fn polarity(&self) -> Polarity {
        self.polarity
    }
}
