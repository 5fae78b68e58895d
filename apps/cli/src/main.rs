//! pixdoc - validate and format Brazilian documents and PIX keys.
//!
//! ```text
//! pixdoc validate cpf 123.456.789-09
//! pixdoc format auto 11222333000181
//! pixdoc classify financeiro@loja.com.br
//! pixdoc --output json check-profile profile.json
//! pixdoc check-charge charge.json
//! ```
//!
//! Exit codes: 0 valid, 1 invalid, 2 usage or runtime error.

mod commands;
mod config;
mod error;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use crate::commands::Command;
use crate::config::{Config, LogFormat, LogOverrides, OutputFormat, Overrides};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "pixdoc", author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/pixdoc/config.toml)
    #[arg(long, global = true, env = "PIXDOC_CONFIG")]
    config: Option<PathBuf>,

    /// Result format on stdout
    #[arg(short, long, global = true)]
    output: Option<OutputFormat>,

    /// Log filter directive, e.g. "debug" or "pixdoc_validator=trace"
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log line format on stderr
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            log: LogOverrides {
                level: self.log_level.clone(),
                format: self.log_format,
            },
            output: self.output,
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config =
        Config::load(cli.config.as_deref(), &cli.overrides()).context("failed to load configuration")?;
    logging::init(&config.log)?;
    tracing::debug!(?config, "configuration loaded");

    let code = cli.command.run(config.output)?;
    Ok(code)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
