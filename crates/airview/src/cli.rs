//! Command-line interface and input loading.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};

use airview_core::{Band, ChartOptions, ChartUpdate};

#[derive(Debug, Parser)]
#[command(name = "airview", version, about = "WiFi channel utilization chart")]
pub struct Cli {
    /// Write logs to this file instead of stderr (keeps the TUI clean).
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive terminal view (`b` toggles band, `q` quits).
    Tui(ViewArgs),
    /// Render the chart to an SVG file and exit.
    Export {
        #[command(flatten)]
        view: ViewArgs,
        /// Output path for the SVG document.
        #[arg(long, default_value = "channel-chart.svg")]
        out: PathBuf,
    },
}

/// Inputs shared by the terminal view and the SVG export.
#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Band to display: "2.4" or "5".
    #[arg(long, default_value = "2.4")]
    pub band: Band,

    /// JSON stats payload as delivered by the analysis engine.
    #[arg(long)]
    pub stats: Option<PathBuf>,

    /// TOML file with sparse chart option overrides.
    #[arg(long)]
    pub options: Option<PathBuf>,
}

impl ViewArgs {
    /// Load the update payload, falling back to built-in sample data.
    pub fn load_update(&self) -> Result<ChartUpdate> {
        match &self.stats {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .wrap_err_with(|| format!("reading stats file {}", path.display()))?;
                serde_json::from_str(&raw)
                    .wrap_err_with(|| format!("parsing stats file {}", path.display()))
            }
            None => Ok(crate::sample::sample_update()),
        }
    }

    /// Load chart option overrides; defaults when no file is given.
    pub fn load_options(&self) -> Result<ChartOptions> {
        match &self.options {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .wrap_err_with(|| format!("reading options file {}", path.display()))?;
                toml::from_str(&raw)
                    .wrap_err_with(|| format!("parsing options file {}", path.display()))
            }
            None => Ok(ChartOptions::default()),
        }
    }
}
