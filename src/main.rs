//! lanlink - LAN setup tool for mobile app development
//!
//! Detects the machine's LAN address, points the mobile client's API
//! config at it, and checks that the development server answers.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use lanlink::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let opts = cli.options();

    // No subcommand means the full setup sequence
    match cli.command.unwrap_or(Commands::Setup) {
        Commands::Setup => lanlink::commands::setup::run(&opts).await,
        Commands::Ip => lanlink::commands::ip::run().await,
        Commands::Patch => lanlink::commands::patch::run(&opts).await,
        Commands::Probe => lanlink::commands::probe::run(&opts).await,
        Commands::Version => {
            println!("lanlink {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
