// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dump the canvas layout.
//!
//! Prints every grid cell with its tiled id, nominal rect, and whether it is
//! visible in the initial viewport, either as a table or as JSON.
//!
//! Run:
//! - `cargo run -p showcase_demos --example layout_dump`
//! - `cargo run -p showcase_demos --example layout_dump -- --json --columns 9`

use std::process::ExitCode;

use clap::Parser;
use showcase_demos::{DemoError, layout_records, viewport_size};
use showcase_layout::GridSpec;
use showcase_shell::{Shell, ShellConfig};
use tracing::{error, info};
use tracing_subscriber::prelude::*;

#[derive(Debug, Parser)]
#[command(about = "Dump the showcase canvas layout")]
struct Args {
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1200.0)]
    width: f64,
    /// Viewport height in pixels.
    #[arg(long, default_value_t = 800.0)]
    height: f64,
    /// Grid columns.
    #[arg(long, default_value_t = 7)]
    columns: usize,
    /// Grid rows.
    #[arg(long, default_value_t = 6)]
    rows: usize,
    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn run(args: &Args) -> Result<(), DemoError> {
    let size = viewport_size(args.width, args.height)?;
    let config = ShellConfig {
        grid: GridSpec {
            columns: args.columns,
            rows: args.rows,
            ..GridSpec::default()
        },
        ..ShellConfig::default()
    };
    let shell = Shell::new(size, config);
    let records = layout_records(&shell);
    info!(
        cells = records.len(),
        visible = shell.canvas().visible().len(),
        min_scale = shell.canvas().viewport().min_scale(),
        "layout generated"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }
    println!("{:>4}  {:<6}  {:>8}  {:>8}  {:>6}  vis  name", "cell", "id", "x", "y", "size");
    for r in &records {
        println!(
            "{:>4}  {:<6}  {:>8.1}  {:>8.1}  {:>6.1}  {:<3}  {}",
            r.cell,
            r.id.as_deref().unwrap_or("-"),
            r.x,
            r.y,
            r.size,
            if r.visible { "yes" } else { "no" },
            r.name.unwrap_or("-"),
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,showcase=debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "layout dump failed");
            ExitCode::FAILURE
        }
    }
}
