//! Command handlers for the Atlas CLI
//!
//! Each handler loads its input, delegates to `atlas_core` and hands the
//! result to the [`TerminalRenderer`]. Nothing is printed until the core
//! operation has fully succeeded.

use std::{io, path::Path};

use anyhow::{Context, Result};
use atlas_core::{Config, LocationInfo, Renderer};
use log::{debug, info};

use crate::{args::InputArgs, renderer::TerminalRenderer};

/// Executes CLI commands against the resolved configuration
pub struct Cli {
    config: Config,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(config: Config, renderer: TerminalRenderer) -> Self {
        Self { config, renderer }
    }

    /// Render a document and print the table
    pub fn render(&self, args: &InputArgs) -> Result<()> {
        let info = load(args.input.as_deref())?;
        let lines = Renderer::new(&info)
            .with_options(self.config.render_options())
            .render()
            .with_context(|| format!("Failed to render report for {}", info.location.name))?;
        debug!("Rendered {} lines", lines.len());
        self.renderer.render(&lines)
    }

    /// Validate a document, including the timezone used for local time
    pub fn check(&self, args: &InputArgs) -> Result<()> {
        let info = load(args.input.as_deref())?;
        Renderer::new(&info)
            .with_options(self.config.render_options())
            .rows()
            .with_context(|| format!("Invalid report data for {}", info.location.name))?;
        self.renderer.status("OK:", &info.location.name);
        Ok(())
    }

    /// Print the JSON Schema of the input document
    pub fn schema(&self) -> Result<()> {
        let schema = schemars::schema_for!(LocationInfo);
        let json = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;
        println!("{json}");
        Ok(())
    }
}

/// Load a document from a file, or from stdin for `-` or no path
fn load(input: Option<&Path>) -> Result<LocationInfo> {
    match input {
        Some(path) if path != Path::new("-") => {
            info!("Reading location info from {}", path.display());
            LocationInfo::from_path(path)
                .with_context(|| format!("Failed to load location info from {}", path.display()))
        }
        _ => {
            info!("Reading location info from stdin");
            LocationInfo::from_reader(io::stdin().lock())
                .context("Failed to load location info from stdin")
        }
    }
}
