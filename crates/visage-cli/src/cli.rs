use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "visage",
    about = "Inspect the face-recognition engine catalog",
    version
)]
pub struct Cli {
    /// Emit structured JSON to stdout instead of human-readable lines
    #[arg(long)]
    pub json: bool,

    /// Increase verbosity (may be used multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Catalog file to load instead of the standard search paths
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every engine in the catalog
    List,
    /// Show a single engine by its UUID
    Show(ShowArgs),
    /// Show the engine the client currently has selected
    Selected,
    /// Select an engine and print the resulting catalog
    Select(SelectArgs),
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// UUID of the engine configuration (case-sensitive)
    #[arg(long)]
    pub uuid: String,
}

#[derive(Debug, Args)]
pub struct SelectArgs {
    /// UUID of the engine configuration to mark selected
    #[arg(long)]
    pub uuid: String,
}

#[derive(Debug, Clone, Copy)]
pub enum OutputMode {
    Human,
    Json,
}

impl From<bool> for OutputMode {
    fn from(json: bool) -> Self {
        if json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from(self.json)
    }
}
