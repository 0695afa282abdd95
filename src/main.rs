use anyhow::Result;
use clap::Parser;

use package_lifecycle::cli::commands::{
    Command, DemoCommand, RenderOptions, ReplayCommand, TableCommand,
};
use package_lifecycle::cli::{Cli, Commands};
use package_lifecycle::{
    config, create_command_span, generate_correlation_id, init_telemetry, PackageLifecycleConfig,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_loaded = PackageLifecycleConfig::load_env_file()?;
    let settings = match &cli.config {
        Some(path) => PackageLifecycleConfig::load_required(path)?,
        None => config()?.clone(),
    };

    init_telemetry(&settings.observability)?;
    if env_loaded {
        tracing::info!("Loaded environment variables from .env file");
    }

    let options = RenderOptions {
        format: match cli.format {
            Some(format) => format,
            None => settings.output.format()?,
        },
        show_notices: cli.notices || settings.output.show_notices,
    };

    let command = cli.command.unwrap_or(Commands::Demo);
    let correlation_id = generate_correlation_id();

    let name = match &command {
        Commands::Demo => "demo",
        Commands::Replay { .. } => "replay",
        Commands::Table => "table",
    };
    let span = create_command_span(name, &correlation_id);
    let _guard = span.enter();

    match command {
        // Default behavior: no subcommand runs the classic delivery trace
        Commands::Demo => DemoCommand::new().with_options(options).execute(),
        Commands::Replay { steps } => ReplayCommand::new(steps).with_options(options).execute(),
        Commands::Table => TableCommand::new().with_options(options).execute(),
    }
}
