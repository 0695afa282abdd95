//! Transition table for the package lifecycle.
//!
//! Every `(state, direction)` pair has exactly one outcome. Requests that
//! would step past either end resolve to [`Transition::Unchanged`] with an
//! advisory notice instead of an error.

use super::types::{BoundaryNotice, Direction, PackageState, Transition};

/// Apply `direction` to `state` and return the resulting transition.
pub fn transition(state: PackageState, direction: Direction) -> Transition {
    use Direction::*;
    use PackageState::*;

    match (state, direction) {
        (Ordered, Advance) => moved(Ordered, Delivered),
        (Ordered, Retreat) => unchanged(Ordered, BoundaryNotice::AlreadyAtRoot),
        (Delivered, Advance) => moved(Delivered, Received),
        (Delivered, Retreat) => moved(Delivered, Ordered),
        (Received, Advance) => unchanged(Received, BoundaryNotice::AlreadyReceived),
        (Received, Retreat) => moved(Received, Delivered),
    }
}

fn moved(from: PackageState, to: PackageState) -> Transition {
    Transition::Moved { from, to }
}

fn unchanged(state: PackageState, notice: BoundaryNotice) -> Transition {
    Transition::Unchanged { state, notice }
}

/// One row of the transition table, for display
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TableRow {
    pub state: PackageState,
    pub advance: Transition,
    pub retreat: Transition,
    pub status: &'static str,
}

pub fn table() -> Vec<TableRow> {
    PackageState::ALL
        .iter()
        .map(|&state| TableRow {
            state,
            advance: transition(state, Direction::Advance),
            retreat: transition(state, Direction::Retreat),
            status: state.status(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_edges() {
        assert_eq!(
            transition(PackageState::Ordered, Direction::Advance).next_state(),
            PackageState::Delivered
        );
        assert_eq!(
            transition(PackageState::Delivered, Direction::Advance).next_state(),
            PackageState::Received
        );
    }

    #[test]
    fn test_backward_edges() {
        assert_eq!(
            transition(PackageState::Received, Direction::Retreat).next_state(),
            PackageState::Delivered
        );
        assert_eq!(
            transition(PackageState::Delivered, Direction::Retreat).next_state(),
            PackageState::Ordered
        );
    }

    #[test]
    fn test_boundary_requests_are_noops() {
        let t = transition(PackageState::Ordered, Direction::Retreat);
        assert!(t.is_noop());
        assert_eq!(t.next_state(), PackageState::Ordered);
        assert_eq!(t.notice(), Some(BoundaryNotice::AlreadyAtRoot));

        let t = transition(PackageState::Received, Direction::Advance);
        assert!(t.is_noop());
        assert_eq!(t.next_state(), PackageState::Received);
        assert_eq!(t.notice(), Some(BoundaryNotice::AlreadyReceived));
    }

    #[test]
    fn test_only_two_noops_in_table() {
        let noops = table()
            .iter()
            .flat_map(|row| [row.advance, row.retreat])
            .filter(Transition::is_noop)
            .count();
        assert_eq!(noops, 2);
    }

    #[test]
    fn test_table_covers_every_state_in_order() {
        let rows = table();
        let states: Vec<_> = rows.iter().map(|r| r.state).collect();
        assert_eq!(states, PackageState::ALL.to_vec());
        assert_eq!(rows[1].status, "delivered to office, not yet received");
    }
}
