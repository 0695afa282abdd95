use anyhow::Result;

use super::{Command, RenderOptions};
use crate::config::OutputFormat;
use crate::lifecycle::{table, Transition};

pub struct TableCommand {
    pub options: RenderOptions,
}

impl TableCommand {
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

impl Default for TableCommand {
    fn default() -> Self {
        Self::new()
    }
}

fn cell(transition: &Transition) -> String {
    match transition {
        Transition::Moved { to, .. } => to.name().to_string(),
        Transition::Unchanged { state, .. } => format!("{} (no-op)", state.name()),
    }
}

impl Command for TableCommand {
    fn render(&self) -> Result<String> {
        let rows = table();

        if self.options.format == OutputFormat::Json {
            let mut out = serde_json::to_string_pretty(&rows)?;
            out.push('\n');
            return Ok(out);
        }

        let mut out = format!(
            "{:<10} {:<17} {:<17} {}\n",
            "state", "advance", "retreat", "status"
        );
        for row in &rows {
            out.push_str(&format!(
                "{:<10} {:<17} {:<17} {}\n",
                row.state.name(),
                cell(&row.advance),
                cell(&row.retreat),
                row.status
            ));
            if self.options.show_notices {
                for notice in [row.advance.notice(), row.retreat.notice()]
                    .into_iter()
                    .flatten()
                {
                    out.push_str(&format!("{:<10} note: {}\n", "", notice));
                }
            }
        }
        Ok(out)
    }
}
