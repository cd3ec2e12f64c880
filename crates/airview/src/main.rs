//! airview — WiFi channel utilization chart, in the terminal or as SVG.

mod app;
mod cli;
mod sample;
mod theme;
mod widget;

use std::fs;
use std::path::Path;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::EnvFilter;

use airview_core::{ChannelChart, SurfaceRegistry};
use airview_svg::SvgSurface;

use crate::cli::{Cli, Command, ViewArgs};

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    match cli.command {
        Command::Tui(view) => run_tui(&view),
        Command::Export { view, out } => export_svg(&view, &out),
    }
}

/// Log filtering via `AIRVIEW_LOG` (default `warn`). With `--log-file`,
/// logs go to the file so the TUI is not disturbed.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_env("AIRVIEW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match log_file {
        Some(path) => {
            let file = fs::File::create(path)
                .wrap_err_with(|| format!("creating log file {}", path.display()))?;
            builder
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn run_tui(view: &ViewArgs) -> Result<()> {
    let update = view.load_update()?;
    let options = view.load_options()?;

    let mut terminal = ratatui::init();
    let result = app::App::new(
        view.band,
        update.stats.unwrap_or_default(),
        update.recommendations.unwrap_or_default(),
        options,
    )
    .run(&mut terminal);
    ratatui::restore();
    result
}

/// Render once through the registry + SVG surface and write the file.
fn export_svg(view: &ViewArgs, out: &Path) -> Result<()> {
    let update = view.load_update()?;
    let options = view.load_options()?;

    let mut registry = SurfaceRegistry::new();
    let surface = SvgSurface::new();
    let handle = surface.handle();
    registry.register("export", surface);

    let mut chart = ChannelChart::new();
    chart.init(&registry, "export", options);
    chart.set_band(view.band);
    chart.apply(update);

    fs::write(out, handle.document())
        .wrap_err_with(|| format!("writing SVG to {}", out.display()))?;
    info!(path = %out.display(), "chart exported");
    println!("wrote {}", out.display());
    Ok(())
}
