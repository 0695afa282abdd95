// Package Lifecycle Library - Delivery State Machine
// This exposes the core components for testing and integration

pub mod cli;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod telemetry;

// Re-export key types for easy access
pub use config::{config, OutputFormat, PackageLifecycleConfig};
pub use error::LifecycleError;
pub use lifecycle::{
    canonical_demo, parse_script, replay, transition, BoundaryNotice, Direction, Package,
    PackageState, ReplayReport, Transition, TransitionJournal,
};
pub use telemetry::{create_command_span, generate_correlation_id, init_telemetry};
