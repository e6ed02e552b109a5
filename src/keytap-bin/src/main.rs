// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::{debug, error, info};

mod config;
mod logging;

use crate::config::Config;
use crate::logging::init_logging;
use keytap_core::{Decoder, DynResult, KeypadMessage};

const PKG_DESCRIPTION: &str = concat!(env!("CARGO_PKG_NAME"), " - ", env!("CARGO_PKG_DESCRIPTION"));

#[derive(Debug, Parser)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = PKG_DESCRIPTION
)]
struct Cli {
    /// Keypress sequences to decode; reads stdin line-by-line when none are given
    #[arg(value_name = "KEYS")]
    inputs: Vec<String>,
    /// Config file path (overrides the default search paths)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,
    /// Emit decoded messages as JSON lines
    #[arg(short = 'j', long = "json")]
    json: bool,
    /// Print an example config file and exit
    #[arg(long = "example-config")]
    example_config: bool,
}

#[tokio::main]
async fn main() -> DynResult<()> {
    let cli = Cli::parse();

    if cli.example_config {
        print!("{}", Config::example_toml());
        return Ok(());
    }

    let (config, config_path) = match &cli.config {
        Some(path) => (Config::load_from_file(path)?, Some(path.clone())),
        None => Config::load_from_default_paths()?,
    };

    init_logging(config.general.log_level.as_deref());
    match &config_path {
        Some(path) => info!("Loaded config from {}", path.display()),
        None => debug!("No config file found, using defaults"),
    }

    let decoder = Decoder::new(config.layout.build_layout()?);
    let json = cli.json || config.output.json;

    if !cli.inputs.is_empty() {
        for keys in &cli.inputs {
            let msg = decoder.decode_message(keys)?;
            println!("{}", render(&msg, json)?);
        }
        return Ok(());
    }

    // Interactive mode: one keypress sequence per stdin line.
    info!("Reading keypress sequences from stdin (Ctrl+C to exit)");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let keys = line.trim();
                if keys.is_empty() {
                    continue;
                }
                match decoder.decode_message(keys) {
                    Ok(msg) => println!("{}", render(&msg, json)?),
                    Err(e) => error!("Failed to decode '{}': {}", keys, e),
                }
            }
            _ = signal::ctrl_c() => {
                info!("Ctrl+C received, shutting down");
                break;
            }
        }
    }

    Ok(())
}

/// Format a decoded message as plain text or a JSON line.
fn render(msg: &KeypadMessage, json: bool) -> DynResult<String> {
    if json {
        Ok(serde_json::to_string(msg)?)
    } else {
        Ok(msg.text.clone())
    }
}
