use serde::Serialize;
use uuid::Uuid;

use super::package::Package;
use super::types::{Direction, PackageState, Transition};
use crate::error::{LifecycleError, Result};

/// Parse a script of directions separated by whitespace and/or commas.
///
/// Positions in errors are 1-based and count tokens, not characters.
pub fn parse_script(text: &str) -> Result<Vec<Direction>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            token
                .parse::<Direction>()
                .map_err(|_| LifecycleError::UnknownDirection {
                    token: token.to_string(),
                    position: index + 1,
                })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayStep {
    pub direction: Direction,
    pub transition: Transition,
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub package_id: Uuid,
    pub initial_status: &'static str,
    pub steps: Vec<ReplayStep>,
    pub final_state: PackageState,
    pub moves: usize,
    pub noops: usize,
}

impl ReplayReport {
    /// Status lines in order: the starting status, then one per step
    pub fn status_lines(&self) -> Vec<&'static str> {
        std::iter::once(self.initial_status)
            .chain(self.steps.iter().map(|s| s.status))
            .collect()
    }
}

/// Run `directions` against a fresh package.
pub fn replay<I>(directions: I) -> ReplayReport
where
    I: IntoIterator<Item = Direction>,
{
    let mut package = Package::new();
    let initial_status = package.status();

    let steps: Vec<ReplayStep> = directions
        .into_iter()
        .map(|direction| {
            let transition = package.apply(direction);
            ReplayStep {
                direction,
                transition,
                status: package.status(),
            }
        })
        .collect();

    ReplayReport {
        package_id: package.id(),
        initial_status,
        steps,
        final_state: package.state(),
        moves: package.journal().moves(),
        noops: package.journal().noops(),
    }
}

/// The three-advance walk from the original delivery demo
pub fn canonical_demo() -> ReplayReport {
    replay([Direction::Advance; 3])
}
