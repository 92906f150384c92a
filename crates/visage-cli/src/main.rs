use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use visage_cli::cli::{Cli, Commands, OutputMode};
use visage_cli::commands;
use visage_cli::output::{render_error, render_list, render_select, render_selected, render_show};
use visage_engines::{resolve_catalog, SettingsError};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mode = cli.output_mode();
    init_tracing(cli.verbose);

    match run(cli, mode) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            render_error(&err, mode);
            err.exit_code()
        }
    }
}

fn run(cli: Cli, mode: OutputMode) -> Result<(), SettingsError> {
    let resolved = resolve_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Commands::List => {
            let outcome = commands::run_list(&resolved);
            render_list(&outcome, mode)?;
        }
        Commands::Show(args) => {
            let outcome = commands::run_show(&resolved.settings, &args.uuid)?;
            render_show(&outcome, mode)?;
        }
        Commands::Selected => {
            let outcome = commands::run_selected(&resolved.settings);
            render_selected(&outcome, mode)?;
        }
        Commands::Select(args) => {
            let outcome = commands::run_select(resolved.settings, &args.uuid)?;
            render_select(&outcome, mode)?;
        }
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    let registry = tracing_subscriber::registry().with(fmt_layer);
    if tracing::subscriber::set_global_default(registry).is_err() {
        // Already initialised (tests).
    }
}
