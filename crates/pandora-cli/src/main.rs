/*
 *  Copyright 2025-2026 Colliery Software
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

//! pandoractl - command-line interface for the Pandora security engine driver.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pandora::{DriverConfig, Pandora, SemanticVersion};
use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

/// GUID used when no application GUID is supplied.
const NIL_GUID: &str = "00000000-0000-0000-0000-000000000000";

/// pandoractl - Talk to the locally installed Pandora engine
#[derive(Parser)]
#[command(name = "pandoractl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Application GUID issued by the Pandora author
    #[arg(long, env = "PANDORA_APP_GUID", global = true, default_value = NIL_GUID)]
    app_guid: String,

    /// Minimum engine version required for encrypt and decrypt (e.g. 0.1.2)
    #[arg(long, global = true)]
    min_version: Option<SemanticVersion>,

    /// Engine invocation timeout in seconds (0 disables the timeout)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report whether the engine is on the search path
    Installed,

    /// Print the installed engine version
    Version,

    /// Check the installed engine against --min-version
    Check,

    /// Encrypt plain text
    Encrypt {
        /// Text to encrypt
        text: String,
    },

    /// Decrypt cipher text produced by `encrypt`
    Decrypt {
        /// Cipher text to decrypt
        cipher: String,
    },
}

fn build_driver(cli: &Cli) -> Result<Pandora> {
    let mut config = DriverConfig::from_env().context("Invalid Pandora configuration")?;
    if let Some(secs) = cli.timeout_secs {
        let timeout = if secs == 0 {
            None
        } else {
            Some(Duration::from_secs(secs))
        };
        config = config.into_builder().invocation_timeout(timeout).build();
    }

    let mut pandora = Pandora::with_config(cli.app_guid.clone(), config);
    if let Some(version) = cli.min_version {
        pandora.set_minimum_version(version);
    }
    Ok(pandora)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let pandora = build_driver(&cli)?;

    match &cli.command {
        Commands::Installed => commands::installed::run(&pandora, cli.json)?,
        Commands::Version => commands::version::run(&pandora, cli.json).await?,
        Commands::Check => commands::check::run(&pandora, cli.json).await?,
        Commands::Encrypt { text } => commands::encrypt::run(&pandora, text, cli.json).await?,
        Commands::Decrypt { cipher } => commands::decrypt::run(&pandora, cipher, cli.json).await?,
    }

    Ok(())
}
