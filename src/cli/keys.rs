// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! Key utilities

use super::load_private_key;
use anyhow::{Context, Result};
use clap::Subcommand;
use stacks_bns::constants::PRIVATE_KEY_ENV;
use stacks_bns::StacksNetwork;

#[derive(Subcommand)]
pub enum KeysCommands {
    /// Show the address of a private key on the selected network
    Address {
        /// Private key (hex); prompted for when not given
        #[arg(long, env = PRIVATE_KEY_ENV, hide_env_values = true)]
        key: Option<String>,
    },
}

pub fn execute(command: KeysCommands, network: &StacksNetwork) -> Result<()> {
    match command {
        KeysCommands::Address { key } => address_command(key, network),
    }
}

fn address_command(key: Option<String>, network: &StacksNetwork) -> Result<()> {
    let key = load_private_key(key)?;
    let address = key
        .address(network)
        .context("Failed to derive address")?;

    println!("{}", address);
    tracing::info!(
        "Public key: {} ({})",
        hex::encode(key.public_key_bytes()),
        if key.is_compressed() { "compressed" } else { "uncompressed" }
    );

    Ok(())
}
