// Package Lifecycle Module - Delivery State Machine
//
// A package is ordered, delivered to the post office, then received by the
// client. Requests that step past either end are answered with a notice and
// leave the state alone.

pub mod journal;
pub mod package;
pub mod replay;
pub mod transitions;
pub mod types;

pub use journal::{JournalEntry, TransitionJournal};
pub use package::Package;
pub use replay::{canonical_demo, parse_script, replay, ReplayReport, ReplayStep};
pub use transitions::{table, transition, TableRow};
pub use types::{BoundaryNotice, Direction, PackageState, Transition};
