//! xbox-report - Xbox controller report inspection CLI
//!
//! Prints the axis/button layout, decodes single Xbox 360 input reports
//! given as hex, and replays capture files as state-change events.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod capture;
mod commands;
mod config;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::ToolError;

#[derive(Parser)]
#[command(name = "xbox-report")]
#[command(about = "Inspect, decode and replay Xbox 360 controller input reports")]
#[command(version)]
struct Cli {
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every axis and button slot with its names
    Layout,

    /// Decode one 20-byte Xbox 360 input report
    Decode {
        /// Report bytes as hex ("00 14 ...", "0x00 0x14 ..." or "0014...")
        hex: String,

        /// Decoder config file (.json, .yaml or .yml)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Replay a capture file and print state-change events
    Replay {
        /// Capture file written by the HID capture tool
        capture: PathBuf,

        /// Decoder config file (.json, .yaml or .yml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("xbox_report={log_level},xbox_controller_protocol={log_level}").into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }
            ExitCode::from(
                e.downcast_ref::<ToolError>()
                    .map_or(1, ToolError::exit_code),
            )
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Layout => commands::layout(cli.json),
        Commands::Decode { hex, config } => commands::decode(hex, config.as_deref(), cli.json),
        Commands::Replay { capture, config } => {
            commands::replay(capture, config.as_deref(), cli.json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn parse_layout_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["xbox-report", "layout"])?;
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        assert!(matches!(cli.command, Commands::Layout));
        Ok(())
    }

    #[test]
    fn parse_decode_with_config_and_global_flags() -> TestResult {
        let cli = Cli::try_parse_from([
            "xbox-report",
            "decode",
            "00 14",
            "--config",
            "dz.yaml",
            "--json",
            "-vv",
        ])?;
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Decode { hex, config } => {
                assert_eq!(hex, "00 14");
                assert_eq!(config, Some(PathBuf::from("dz.yaml")));
            }
            _ => return Err("expected decode".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_replay_requires_capture() {
        assert!(Cli::try_parse_from(["xbox-report", "replay"]).is_err());
    }
}
