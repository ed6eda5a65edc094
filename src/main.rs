// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! BNS CLI application

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stacks_bns::constants::{API_URL_ENV, NETWORK_ENV};
use stacks_bns::StacksNetwork;

mod cli;

#[derive(Parser)]
#[command(name = "bns")]
#[command(about = "Blockchain Name System transactions on Stacks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Network to broadcast to (mainnet, testnet or devnet)
    #[arg(long, global = true, env = NETWORK_ENV)]
    network: Option<String>,

    /// Stacks node API to use instead of the network default
    #[arg(long, global = true, env = API_URL_ENV)]
    api_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Name preorder, registration, update and transfer
    Names {
        #[command(subcommand)]
        command: cli::names::NamesCommands,
    },
    /// Namespace preorder
    Namespaces {
        #[command(subcommand)]
        command: cli::namespaces::NamespacesCommands,
    },
    /// Key utilities
    Keys {
        #[command(subcommand)]
        command: cli::keys::KeysCommands,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Without -v: only WARN and ERROR
    // With -v: INFO from this crate
    // With RUST_LOG set: whatever it asks for
    if std::env::var("RUST_LOG").is_err() {
        use tracing_subscriber::EnvFilter;

        let filter = if cli.verbose {
            EnvFilter::new("stacks_bns=info,bns=info")
        } else {
            EnvFilter::new("stacks_bns=warn,bns=warn")
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_target(true)
            .init();
    }

    let network = StacksNetwork::select(cli.network.as_deref(), cli.api_url.as_deref())
        .context("Failed to select network")?;
    tracing::info!("Using {} via {}", network.kind, network.core_api_url);

    match cli.command {
        Commands::Names { command } => {
            cli::names::execute(command, network).await?;
        }
        Commands::Namespaces { command } => {
            cli::namespaces::execute(command, network).await?;
        }
        Commands::Keys { command } => {
            cli::keys::execute(command, &network)?;
        }
    }

    Ok(())
}
