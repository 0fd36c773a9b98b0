//! Atlas CLI Application
//!
//! Command-line interface for rendering location-info reports.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands, InputArgs};
use atlas_core::{Config, OffsetSign};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        no_color,
        honor_offset_sign,
        command,
    } = Args::parse();

    let mut settings = Config::load(config.as_deref()).context("Failed to load configuration")?;
    if honor_offset_sign {
        settings.offset_sign = OffsetSign::Honor;
    }
    if no_color {
        settings.color = false;
    }

    let renderer = TerminalRenderer::new(settings.color);
    let cli = Cli::new(settings, renderer);

    info!("Atlas started");

    match command {
        Some(Render(args)) => cli.render(&args),
        Some(Check(args)) => cli.check(&args),
        Some(Schema) => cli.schema(),
        None => cli.render(&InputArgs::default()),
    }
}
