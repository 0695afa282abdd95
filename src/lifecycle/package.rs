use uuid::Uuid;

use super::journal::TransitionJournal;
use super::transitions::transition;
use super::types::{Direction, PackageState, Transition};

/// A package moving through its delivery lifecycle.
///
/// The package owns its current state. Each request is resolved by the
/// transition table and the package stores whatever state comes back, so
/// callers never branch on whether a move is allowed.
#[derive(Debug, Clone)]
pub struct Package {
    id: Uuid,
    state: PackageState,
    journal: TransitionJournal,
}

impl Default for Package {
    fn default() -> Self {
        Self::new()
    }
}

impl Package {
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    pub fn with_id(id: Uuid) -> Self {
        Self {
            id,
            state: PackageState::default(),
            journal: TransitionJournal::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> PackageState {
        self.state
    }

    pub fn journal(&self) -> &TransitionJournal {
        &self.journal
    }

    pub fn status(&self) -> &'static str {
        self.state.status()
    }

    pub fn advance(&mut self) -> Transition {
        self.apply(Direction::Advance)
    }

    pub fn retreat(&mut self) -> Transition {
        self.apply(Direction::Retreat)
    }

    pub fn apply(&mut self, direction: Direction) -> Transition {
        let outcome = transition(self.state, direction);

        match outcome {
            Transition::Moved { from, to } => {
                tracing::info!(
                    package_id = %self.id,
                    direction = %direction,
                    from = from.name(),
                    to = to.name(),
                    "Package state changed"
                );
            }
            Transition::Unchanged { state, notice } => {
                tracing::info!(
                    package_id = %self.id,
                    direction = %direction,
                    state = state.name(),
                    notice = %notice,
                    "Package state unchanged"
                );
            }
        }

        self.state = outcome.next_state();
        self.journal.record(direction, outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::types::BoundaryNotice;

    #[test]
    fn test_package_full_lifecycle() {
        let mut pkg = Package::new();
        assert_eq!(pkg.status(), "ordered, not yet delivered to office");

        pkg.advance();
        assert_eq!(pkg.status(), "delivered to office, not yet received");

        pkg.advance();
        assert_eq!(pkg.status(), "received by client");

        let last = pkg.advance();
        assert_eq!(pkg.status(), "received by client");
        assert_eq!(last.notice(), Some(BoundaryNotice::AlreadyReceived));
    }

    #[test]
    fn test_retreat_from_root_is_noop() {
        let mut pkg = Package::new();
        let outcome = pkg.retreat();

        assert_eq!(pkg.state(), PackageState::Ordered);
        assert_eq!(outcome.notice(), Some(BoundaryNotice::AlreadyAtRoot));
    }

    #[test]
    fn test_round_trips_return_to_ordered() {
        let mut pkg = Package::new();
        pkg.advance();
        pkg.retreat();
        assert_eq!(pkg.state(), PackageState::Ordered);

        pkg.advance();
        pkg.advance();
        pkg.retreat();
        pkg.retreat();
        assert_eq!(pkg.state(), PackageState::Ordered);
    }

    #[test]
    fn test_every_request_is_journaled() {
        let mut pkg = Package::new();
        pkg.retreat();
        pkg.advance();
        pkg.advance();
        pkg.advance();

        let journal = pkg.journal();
        assert_eq!(journal.len(), 4);
        assert_eq!(journal.moves(), 2);
        assert_eq!(journal.noops(), 2);
    }

    #[test]
    fn test_with_id_keeps_identifier() {
        let id = Uuid::new_v4();
        let pkg = Package::with_id(id);
        assert_eq!(pkg.id(), id);
        assert!(pkg.journal().is_empty());
    }
}
