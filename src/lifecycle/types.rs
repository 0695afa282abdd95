// Core types for the package lifecycle state machine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LifecycleError;

/// Lifecycle stages a package can occupy
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageState {
    /// Ordered but not yet at the post office (initial)
    #[default]
    Ordered,
    /// Sitting at the post office
    Delivered,
    /// Picked up by the client (terminal)
    Received,
}

impl PackageState {
    /// Every state, in lifecycle order
    pub const ALL: [PackageState; 3] = [
        PackageState::Ordered,
        PackageState::Delivered,
        PackageState::Received,
    ];

    pub fn status(&self) -> &'static str {
        match self {
            PackageState::Ordered => "ordered, not yet delivered to office",
            PackageState::Delivered => "delivered to office, not yet received",
            PackageState::Received => "received by client",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PackageState::Ordered => "ordered",
            PackageState::Delivered => "delivered",
            PackageState::Received => "received",
        }
    }

    pub fn is_initial(&self) -> bool {
        matches!(self, PackageState::Ordered)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PackageState::Received)
    }
}

impl fmt::Display for PackageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status())
    }
}

/// Requested movement through the lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Advance,
    Retreat,
}

impl Direction {
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Advance => "advance",
            Direction::Retreat => "retreat",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = LifecycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "advance" | "next" | "forward" => Ok(Direction::Advance),
            "retreat" | "prev" | "previous" | "back" => Ok(Direction::Retreat),
            _ => Err(LifecycleError::InvalidDirection(s.to_string())),
        }
    }
}

/// Advisory message for a request that hit a lifecycle boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryNotice {
    /// Retreat requested while still ordered
    AlreadyAtRoot,
    /// Advance requested after the client picked it up
    AlreadyReceived,
}

impl BoundaryNotice {
    pub fn message(&self) -> &'static str {
        match self {
            BoundaryNotice::AlreadyAtRoot => "the package is in its root state",
            BoundaryNotice::AlreadyReceived => "this package is already received by a client",
        }
    }
}

impl fmt::Display for BoundaryNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of applying a direction to a state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    Moved {
        from: PackageState,
        to: PackageState,
    },
    Unchanged {
        state: PackageState,
        notice: BoundaryNotice,
    },
}

impl Transition {
    /// State the package is in once the transition is applied
    pub fn next_state(&self) -> PackageState {
        match self {
            Transition::Moved { to, .. } => *to,
            Transition::Unchanged { state, .. } => *state,
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Transition::Unchanged { .. })
    }

    pub fn notice(&self) -> Option<BoundaryNotice> {
        match self {
            Transition::Moved { .. } => None,
            Transition::Unchanged { notice, .. } => Some(*notice),
        }
    }
}
