// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! Name management commands

use super::{random_salt, report, TxArgs};
use anyhow::{Context, Result};
use clap::Subcommand;
use stacks_bns::bns::update::profile_zonefile;
use stacks_bns::constants::{DEFAULT_PROFILE_URL, NAME_ENV, RECIPIENT_ENV};
use stacks_bns::{BnsClient, PreorderName, RegisterName, StacksNetwork, TransferName, UpdateName};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum NamesCommands {
    /// Preorder a name (first registration step)
    Preorder {
        /// Fully-qualified name (e.g., myname.id)
        #[arg(env = NAME_ENV)]
        name: String,
        /// Salt for the commitment; random when omitted
        #[arg(long)]
        salt: Option<String>,
        /// Amount to burn in micro-STX
        #[arg(long)]
        burn: u128,
        #[command(flatten)]
        tx: TxArgs,
    },
    /// Register a preordered name
    Register {
        /// Fully-qualified name (e.g., myname.id)
        #[arg(env = NAME_ENV)]
        name: String,
        /// Salt used by the preorder
        #[arg(long)]
        salt: String,
        /// Zonefile hash to register with the name
        #[arg(long)]
        zonefile_hash: String,
        #[command(flatten)]
        tx: TxArgs,
    },
    /// Point a name at a new zonefile
    Update {
        /// Fully-qualified name (e.g., myname.id)
        #[arg(env = NAME_ENV)]
        name: String,
        /// Zonefile to publish; a profile zonefile is generated when omitted
        #[arg(long)]
        zonefile: Option<PathBuf>,
        /// Profile URL for the generated zonefile
        #[arg(long, default_value = DEFAULT_PROFILE_URL)]
        profile_url: String,
        #[command(flatten)]
        tx: TxArgs,
    },
    /// Transfer a name to another address
    Transfer {
        /// Fully-qualified name (e.g., myname.id)
        #[arg(env = NAME_ENV)]
        name: String,
        /// Recipient address
        #[arg(long, env = RECIPIENT_ENV)]
        recipient: String,
        #[command(flatten)]
        tx: TxArgs,
    },
}

pub async fn execute(command: NamesCommands, network: StacksNetwork) -> Result<()> {
    let client = BnsClient::connect(network);

    match command {
        NamesCommands::Preorder {
            name,
            salt,
            burn,
            tx,
        } => preorder_command(&client, name, salt, burn, tx).await,
        NamesCommands::Register {
            name,
            salt,
            zonefile_hash,
            tx,
        } => register_command(&client, name, salt, zonefile_hash, tx).await,
        NamesCommands::Update {
            name,
            zonefile,
            profile_url,
            tx,
        } => update_command(&client, name, zonefile, profile_url, tx).await,
        NamesCommands::Transfer {
            name,
            recipient,
            tx,
        } => transfer_command(&client, name, recipient, tx).await,
    }
}

async fn preorder_command(
    client: &BnsClient,
    name: String,
    salt: Option<String>,
    burn: u128,
    tx: TxArgs,
) -> Result<()> {
    let salt = salt.unwrap_or_else(random_salt);
    println!("Preordering name: {}", name);
    println!("Salt: {} (needed for 'bns names register')\n", salt);

    let result = client
        .preorder_name(PreorderName {
            fully_qualified_name: name,
            salt,
            stx_to_burn: burn,
            private_key: tx.private_key()?,
            options: tx.call_options(),
        })
        .await
        .context("Name preorder failed")?;

    report(&result)
}

async fn register_command(
    client: &BnsClient,
    name: String,
    salt: String,
    zonefile_hash: String,
    tx: TxArgs,
) -> Result<()> {
    println!("Registering name: {}\n", name);

    let result = client
        .register_name(RegisterName {
            fully_qualified_name: name,
            salt,
            zonefile_hash,
            private_key: tx.private_key()?,
            options: tx.call_options(),
        })
        .await
        .context("Name registration failed")?;

    report(&result)
}

async fn update_command(
    client: &BnsClient,
    name: String,
    zonefile: Option<PathBuf>,
    profile_url: String,
    tx: TxArgs,
) -> Result<()> {
    let zonefile = match zonefile {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read zonefile: {:?}", path))?,
        None => profile_zonefile(&name, &profile_url),
    };

    println!("Updating name: {}", name);
    println!("Zonefile:\n{}", zonefile);

    let result = client
        .name_update(UpdateName {
            fully_qualified_name: name,
            zonefile,
            private_key: tx.private_key()?,
            options: tx.call_options(),
        })
        .await
        .context("Name update failed")?;

    report(&result)
}

async fn transfer_command(
    client: &BnsClient,
    name: String,
    recipient: String,
    tx: TxArgs,
) -> Result<()> {
    println!("Transferring name {} to {}\n", name, recipient);

    let result = client
        .name_transfer(TransferName {
            fully_qualified_name: name,
            recipient,
            private_key: tx.private_key()?,
            options: tx.call_options(),
        })
        .await
        .context("Name transfer failed")?;

    report(&result)
}
