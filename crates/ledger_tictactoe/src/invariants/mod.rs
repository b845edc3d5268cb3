//! First-class invariants for the game record.
//!
//! Invariants are logical properties that must hold for every record the
//! engine produces. They are re-checked after each move in debug builds
//! and can be run against any record loaded from storage.

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

/// A set of invariants that can be checked together.
///
/// Implemented for the three-invariant tuple that [`GameInvariants`] names.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        collect(violations)
    }
}

pub mod balanced_marks;
pub mod mark_count;
pub mod terminal_state;

pub use balanced_marks::BalancedMarksInvariant;
pub use mark_count::MarkCountInvariant;
pub use terminal_state::TerminalStateInvariant;

/// All record invariants as a composable set.
pub type GameInvariants = (
    MarkCountInvariant,
    BalancedMarksInvariant,
    TerminalStateInvariant,
);

/// Checks a record against [`GameInvariants`], mapping violations to a
/// domain error.
pub fn verify(game: &crate::Game) -> Result<(), crate::TicTacToeError> {
    GameInvariants::check_all(game).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        crate::TicTacToeError::InvariantViolation(descriptions)
    })
}
