// Copyright 2026 PathSim Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use pathsim_portal::capture;
use pathsim_portal::cli;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "portal",
    about = "PathSim homepage tooling — screenshot tiles and content registry",
    version,
    after_help = "Run 'portal' with no command to capture all screenshot tiles with defaults."
)]
struct Cli {
    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Capture themed screenshot tiles for every ecosystem site
    Screenshots {
        /// Output directory for PNG tiles
        #[arg(long, default_value = capture::DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
        /// Post-navigation settle delay in milliseconds
        #[arg(long, default_value_t = capture::SETTLE_DELAY_MS)]
        settle_ms: u64,
        /// Capture only this site id (repeatable)
        #[arg(long = "site")]
        sites: Vec<String>,
    },
    /// Print the content registry
    Registry {
        /// Output as JSON (machine-readable)
        #[arg(long)]
        json: bool,
    },
    /// Check environment readiness
    Doctor,
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

fn init_tracing(verbose: bool) {
    let directive = if verbose {
        "pathsim_portal=debug"
    } else {
        "pathsim_portal=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse().unwrap()),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        // No subcommand — capture everything with defaults
        None => {
            cli::screenshots_cmd::run(
                PathBuf::from(capture::DEFAULT_OUTPUT_DIR),
                capture::SETTLE_DELAY_MS,
                &[],
            )
            .await
        }
        Some(Commands::Screenshots {
            output_dir,
            settle_ms,
            sites,
        }) => cli::screenshots_cmd::run(output_dir, settle_ms, &sites).await,
        Some(Commands::Registry { json }) => cli::registry_cmd::run(json),
        Some(Commands::Doctor) => cli::doctor::run().await,
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "portal", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    result
}
