// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Robolog CLI
//!
//! Command-line tool for per-topic CSV exports of robotics datasets.
//!
//! ## Usage
//!
//! ```sh
//! # Show topic information
//! robolog info failure_status.csv mavros-imu-data.csv
//!
//! # Print messages as a fixed-width table
//! robolog print mavros-imu-data.csv --start 0 --count 20
//!
//! # Export decoded messages as JSON
//! robolog export mavros-imu-data.csv --pretty
//! ```

mod cmd;
mod common;

use std::process;

use clap::{Parser, Subcommand};
use cmd::{ExportCmd, InfoCmd, PrintCmd};
use common::Result;
use tracing_subscriber::EnvFilter;

/// Robolog - per-topic CSV log toolkit
///
/// Load, inspect, and print the CSV topic exports of robotic sensor/fault
/// dataset sequences.
#[derive(Parser, Clone)]
#[command(name = "robolog")]
#[command(about = "Toolkit for per-topic CSV exports of robotics datasets", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Show topic information (message count, fields, flags)
    Info(InfoCmd),

    /// Print messages as a fixed-width table
    Print(PrintCmd),

    /// Export decoded messages as JSON
    Export(ExportCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info(cmd) => cmd.run(),
        Commands::Print(cmd) => cmd.run(),
        Commands::Export(cmd) => cmd.run(),
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
