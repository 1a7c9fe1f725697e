// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replay a gesture script against the showcase shell.
//!
//! Logs every step with the resulting pan, scale, visible count, and panel
//! state. Without `--script`, the bundled tour is played.
//!
//! Run:
//! - `cargo run -p showcase_demos --example replay`
//! - `RUST_LOG=trace cargo run -p showcase_demos --example replay -- --script my.json`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use showcase_demos::{DemoError, Script, replay_step, viewport_size};
use showcase_shell::{Shell, ShellConfig};
use tracing::{error, info};
use tracing_subscriber::prelude::*;

#[derive(Debug, Parser)]
#[command(about = "Replay a gesture script against the showcase shell")]
struct Args {
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1200.0)]
    width: f64,
    /// Viewport height in pixels.
    #[arg(long, default_value_t = 800.0)]
    height: f64,
    /// JSON gesture script; defaults to the bundled tour.
    #[arg(long)]
    script: Option<PathBuf>,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,showcase=debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

fn run(args: &Args) -> Result<(), DemoError> {
    let size = viewport_size(args.width, args.height)?;
    let script = match &args.script {
        Some(path) => Script::load(path)?,
        None => Script::tour()?,
    };

    let mut shell = Shell::new(size, ShellConfig::default());
    for step in &script.steps {
        let report = replay_step(&mut shell, step);
        let canvas = shell.canvas();
        info!(
            at_ms = report.at_ms,
            event = ?step.event,
            actions = ?report.actions,
            cleared = report.cleared,
            scale = canvas.scale(),
            pan_x = canvas.pan().x,
            pan_y = canvas.pan().y,
            visible = canvas.visible().len(),
            "step"
        );
    }

    let canvas = shell.canvas();
    let info = canvas.viewport().debug_info();
    info!(
        scale = info.scale,
        pan_x = info.pan.x,
        pan_y = info.pan.y,
        min_scale = info.min_scale,
        visible = canvas.visible().len(),
        mode = ?shell.mode(),
        selected = shell.panel().selected().map(|item| item.id),
        "final state"
    );
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "replay failed");
            ExitCode::FAILURE
        }
    }
}
