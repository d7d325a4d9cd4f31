//! Status returned by behavior nodes.

/// The result of evaluating a behavior node for one tick.
///
/// # Tick Semantics
///
/// Nodes are re-evaluated once per fixed interval. Work that spans more than
/// one interval reports [`NodeState::Running`]; the composite that owns the
/// node records where it stopped and resumes that node on the next tick
/// instead of restarting siblings that already finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeState {
    /// The node has not finished yet; resume it on the next tick.
    Running,

    /// The node completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action executed without errors.
    Success,

    /// The node failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be executed.
    Failure,
}

impl NodeState {
    /// Returns `true` if this state is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, NodeState::Running)
    }

    /// Returns `true` if this state is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, NodeState::Success)
    }

    /// Returns `true` if this state is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, NodeState::Failure)
    }

    /// Swaps `Success` and `Failure`; `Running` is preserved.
    ///
    /// Suspension must survive negation, otherwise an inverted node could
    /// never span more than one tick.
    #[inline]
    pub fn inverted(self) -> Self {
        match self {
            NodeState::Running => NodeState::Running,
            NodeState::Success => NodeState::Failure,
            NodeState::Failure => NodeState::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_swaps_terminal_states() {
        assert_eq!(NodeState::Success.inverted(), NodeState::Failure);
        assert_eq!(NodeState::Failure.inverted(), NodeState::Success);
    }

    #[test]
    fn inverted_preserves_running() {
        assert_eq!(NodeState::Running.inverted(), NodeState::Running);
    }
}
