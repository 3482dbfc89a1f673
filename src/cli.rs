//! CLI struct definitions for the bestiary command-line interface.
//!
//! All clap-derived top-level types live here. Creature subcommands are
//! defined next to the model in `plugins::creature`.

use crate::plugins::creature::{CreatureCommand, OutputFormat};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "bestiary",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record tabletop creatures and enrich them with attacks, defenses and special abilities."
)]
pub(crate) struct Cli {
    /// Creature data file (overrides BESTIARY_DATA_FILE and .bestiary/config.toml).
    #[clap(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,
    /// Output format: 'text' or 'json'.
    #[clap(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    #[clap(flatten)]
    Creature(CreatureCommand),

    /// Print the command/storage schema as JSON
    #[clap(name = "schema")]
    Schema,

    /// Show version information
    #[clap(name = "version")]
    Version,
}
