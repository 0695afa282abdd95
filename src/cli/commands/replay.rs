use anyhow::Result;

use super::{render_report, Command, RenderOptions};
use crate::lifecycle::{parse_script, replay};

/// Replays user-supplied directions against a fresh package.
pub struct ReplayCommand {
    pub steps: Vec<String>,
    pub options: RenderOptions,
}

impl ReplayCommand {
    pub fn new(steps: Vec<String>) -> Self {
        Self {
            steps,
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }
}

impl Command for ReplayCommand {
    fn render(&self) -> Result<String> {
        // Arguments may themselves hold comma-separated steps
        let script = self.steps.join(" ");
        let directions = parse_script(&script)?;

        let report = replay(directions);
        tracing::info!(
            package_id = %report.package_id,
            steps = report.steps.len(),
            moves = report.moves,
            noops = report.noops,
            final_state = report.final_state.name(),
            "Replay finished"
        );
        render_report(&report, self.options)
    }
}
