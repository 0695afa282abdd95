use anyhow::Result;

use crate::config::OutputFormat;
use crate::lifecycle::ReplayReport;

pub mod demo;
pub mod replay;
pub mod table;

pub use demo::DemoCommand;
pub use replay::ReplayCommand;
pub use table::TableCommand;

pub trait Command {
    /// Produce the command's stdout text
    fn render(&self) -> Result<String>;

    fn execute(&self) -> Result<()> {
        print!("{}", self.render()?);
        Ok(())
    }
}

/// Output settings shared by every command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub show_notices: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_notices: false,
        }
    }
}

/// Render a replay report as status lines or as a JSON document
pub fn render_report(report: &ReplayReport, options: RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(report)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            out.push_str(report.initial_status);
            out.push('\n');
            for step in &report.steps {
                out.push_str(step.status);
                out.push('\n');
                if options.show_notices {
                    if let Some(notice) = step.transition.notice() {
                        out.push_str(&format!("  ({}: {})\n", step.direction, notice));
                    }
                }
            }
            Ok(out)
        }
    }
}
