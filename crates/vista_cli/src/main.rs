//! Vista CLI
//!
//! Commands:
//! - `vista replay <trace>` - Replay a host event trace, one JSON snapshot per line
//! - `vista inspect` - Print thumb, mask and accessibility state for given extents
//! - `vista config` - Print the effective viewport config as TOML

mod config;
mod trace;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vista_viewport::mask::GradientStops;
use vista_viewport::{ScrollbarSemantics, ViewState, ViewportConfig, ViewportController};

use crate::trace::Trace;

#[derive(Parser)]
#[command(name = "vista")]
#[command(author, version, about = "Vista viewport controller toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a trace of host events through a viewport controller
    Replay {
        /// Trace file (.json or .toml)
        trace: PathBuf,

        /// Viewport config overriding the one embedded in the trace
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Compute derived state for one set of extents
    Inspect {
        /// Content extent in pixels
        #[arg(long)]
        content: f32,

        /// Viewport extent in pixels
        #[arg(long)]
        viewport: f32,

        /// Measured track extent (defaults to the viewport extent)
        #[arg(long)]
        track: Option<f32>,

        /// Requested scroll offset
        #[arg(long, default_value = "0")]
        offset: f32,

        /// Viewport config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the effective viewport config
    Config {
        /// Config file to validate (defaults are printed otherwise)
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Replay { trace, config } => cmd_replay(trace, config),
        Commands::Inspect {
            content,
            viewport,
            track,
            offset,
            config,
        } => cmd_inspect(content, viewport, track.unwrap_or(viewport), offset, config),
        Commands::Config { path } => cmd_config(path),
    }
}

fn load_optional_config(path: Option<PathBuf>) -> Result<Option<ViewportConfig>> {
    path.map(|path| config::load_config(&path)).transpose()
}

fn cmd_replay(path: PathBuf, config: Option<PathBuf>) -> Result<()> {
    let trace = Trace::load(&path)?;
    let config = load_optional_config(config)?;

    info!(
        "Replaying {} events from {}",
        trace.events.len(),
        path.display()
    );

    let snapshots = trace::replay(&trace, config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for snapshot in &snapshots {
        serde_json::to_writer(&mut out, snapshot)?;
        writeln!(out)?;
    }

    let changed = snapshots.iter().filter(|s| s.changed).count();
    info!("Replay finished: {} steps, {} changed state", snapshots.len(), changed);
    Ok(())
}

#[derive(Serialize)]
struct InspectReport {
    view: ViewState,
    accessibility: ScrollbarSemantics,
    gradient: GradientStops,
}

fn cmd_inspect(
    content: f32,
    viewport: f32,
    track: f32,
    offset: f32,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = load_optional_config(config)?.unwrap_or_default();
    let mut controller = ViewportController::new(config)?;
    controller.on_resize(content, viewport, track);
    controller.set_offset(offset);

    let view = *controller.view();
    let report = InspectReport {
        view,
        accessibility: controller.accessibility(),
        gradient: view.mask.gradient_stops(viewport),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn cmd_config(path: Option<PathBuf>) -> Result<()> {
    let config = load_optional_config(path)?.unwrap_or_default();
    print!("{}", config::to_toml(&config)?);
    Ok(())
}
