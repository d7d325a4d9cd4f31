//! Tick-driven behavior tree engine.
//!
//! A behavior tree is an abstract node graph whose nodes resolve to one of
//! [`NodeState::Running`], [`NodeState::Success`] or [`NodeState::Failure`]
//! each evaluation cycle. The composites in this crate correctly suspend and
//! resume partially-completed work across cycles: a child that reports
//! `Running` is resumed on the next tick without restarting siblings that
//! already finished.
//!
//! - **Host-driven ticks**: the host loop calls [`Tree::tick`] at a fixed
//!   interval and supplies the elapsed time; the engine owns no clock
//! - **Cooperative, single-threaded**: "parallel" composites denote logical
//!   concurrency of sub-goals within one synchronous tick
//! - **Infallible evaluation**: `tick` always yields a `NodeState`; misuse is
//!   rejected at construction time as a [`BuildError`]
//! - **Injected leaves**: all domain logic enters through callables supplied
//!   at leaf construction
//!
//! # Architecture
//!
//! - [`Behavior`]: core trait for all nodes, with per-node [`Polarity`]
//! - [`NodeState`]: Running / Success / Failure
//! - Composite nodes: [`Sequence`], [`Fallback`], [`Parallel`],
//!   [`PriorityParallel`], [`WeightedRandom`]
//! - Decorator nodes: [`Invert`], [`AlwaysSucceed`]
//! - Leaf adapters: [`Condition`], [`Action`], [`Timer`], [`Trace`]
//! - [`Tree`]: owns the root, ticked by the host
//! - [`Blackboard`]: slot-partitioned key/value store for out-of-band
//!   communication
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use ticktree::builder::{action, condition, sequence};
//! use ticktree::{Blackboard, NodeState, Tree};
//!
//! let mut tree = Tree::new(sequence(vec![
//!     condition(|board: &mut Blackboard| board.get("enemy_visible", 0, false)),
//!     action(|board: &mut Blackboard| {
//!         board.set("target_locked", true, 0);
//!         NodeState::Success
//!     }),
//! ]));
//!
//! let mut board = Blackboard::new();
//! board.set("enemy_visible", true, 0);
//! tree.tick(&mut board, Duration::from_millis(16));
//! assert!(board.get("target_locked", 0, false));
//! ```

pub mod behavior;
pub mod blackboard;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod error;
pub mod leaf;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::{Behavior, Polarity};
pub use blackboard::Blackboard;
pub use composite::{Fallback, Parallel, PriorityParallel, Sequence, WeightedRandom};
pub use decorator::{AlwaysSucceed, Invert};
pub use error::BuildError;
pub use leaf::{Action, Condition, Timer, Trace};
pub use status::NodeState;
pub use tree::Tree;
