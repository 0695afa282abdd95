use anyhow::Result;

use super::{render_report, Command, RenderOptions};
use crate::lifecycle::canonical_demo;

/// Prints the status after start and after each of three advances.
pub struct DemoCommand {
    pub options: RenderOptions,
}

impl DemoCommand {
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }
}

impl Default for DemoCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for DemoCommand {
    fn render(&self) -> Result<String> {
        let report = canonical_demo();
        tracing::info!(
            package_id = %report.package_id,
            final_state = report.final_state.name(),
            "Demo walk finished"
        );
        render_report(&report, self.options)
    }
}
