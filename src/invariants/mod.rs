//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties of [`GameState`] that must hold at
//! every operation boundary. The engine checks them after each placed mark
//! in debug builds; they are also testable on their own.

mod history_consistent;
mod mark_balance;
mod status_consistent;

pub use history_consistent::HistoryConsistentInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use status_consistent::StatusConsistentInvariant;

use super::types::GameState;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All invariants of a tic-tac-toe game.
pub type TicTacToeInvariants = (
    MarkBalanceInvariant,
    HistoryConsistentInvariant,
    StatusConsistentInvariant,
);

/// Debug-build postcondition: panics if any invariant is violated.
pub fn assert_invariants(state: &GameState) {
    if let Err(violations) = <TicTacToeInvariants as InvariantSet<GameState>>::check_all(state) {
        for violation in &violations {
            warn!(description = %violation.description, "Invariant violated");
        }
        debug_assert!(violations.is_empty(), "Invariants violated: {:?}", violations);
    }
}
