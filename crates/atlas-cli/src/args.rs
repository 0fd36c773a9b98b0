use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Render country facts, weather, exchange rates and news as a text table
///
/// Atlas reads a location-info JSON document produced by the collectors and
/// prints it as a two-column report. Without a command the document is read
/// from stdin and rendered.
#[derive(Parser)]
#[command(version, about, name = "atlas")]
pub struct Args {
    /// Path to the configuration file. Defaults to
    /// $XDG_CONFIG_HOME/atlas/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subtract negative UTC offsets instead of adding their magnitude
    #[arg(long, global = true)]
    pub honor_offset_sign: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Atlas CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Render a location-info document as a table
    #[command(alias = "r")]
    Render(InputArgs),
    /// Validate a location-info document without rendering it
    #[command(alias = "c")]
    Check(InputArgs),
    /// Print the JSON Schema of the location-info document
    Schema,
}

/// Where to read the location-info document from
#[derive(ClapArgs, Default)]
pub struct InputArgs {
    /// JSON document to read; `-` or nothing reads stdin
    #[arg(help = "Location-info JSON file, or '-' for stdin")]
    pub input: Option<PathBuf>,
}
