//! State machine trait for step and status enums.
//!
//! Gives sequenced enums a uniform way to describe their transition table.

/// Trait for enums that represent state machines.
///
/// Implementors define the transition table; membership checks and
/// terminal-state detection come for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for PlanningStep {
///     fn valid_transitions(&self) -> Vec<Self> {
///         self.next().into_iter().collect()
///     }
/// }
///
/// if position.can_transition_to(&target) {
///     // in-order step
/// }
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if transition from self to target is in the table.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
