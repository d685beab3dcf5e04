//! Countdown CLI for the 2038 Unix time rollover
//!
//! Shows the current UTC time, its epoch value and 32-bit binary form, and
//! the time left until the signed 32-bit epoch counter overflows.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unixy2k_cli::logging::{init_logging, LogTarget};
use unixy2k_cli::{load_config, CliHandler};

#[derive(Parser)]
#[command(name = "unixy2k")]
#[command(version, about = "Countdown to the 2038 Unix time rollover", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, default_value = "unixy2k.toml")]
    config: PathBuf,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full-screen countdown (default)
    Watch,

    /// Plain-text countdown, one block per interval until Ctrl+C
    Plain,

    /// Print a single snapshot and exit
    Once {
        /// Compute the snapshot for this epoch second instead of now
        #[arg(long, allow_negative_numbers = true)]
        at: Option<i64>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Watch);

    // stderr keeps stdout clean for plain and JSON output; the full-screen
    // view owns the terminal and logs elsewhere
    let full_screen = matches!(command, Commands::Watch);
    let target = LogTarget::for_command(full_screen, cli.log_file.as_deref());
    init_logging(cli.verbose, &target)?;

    let config = load_config(&cli.config)?;
    let handler = CliHandler::new(config);

    match command {
        Commands::Watch => {
            handler.handle_watch().await?;
        }

        Commands::Plain => {
            handler.handle_plain().await?;
        }

        Commands::Once { at, json } => {
            handler
                .handle_once(at, json, &mut std::io::stdout())
                .await?;
        }
    }

    Ok(())
}
