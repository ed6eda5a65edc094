// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! Namespace commands

use super::{random_salt, report, TxArgs};
use anyhow::{Context, Result};
use clap::Subcommand;
use stacks_bns::{BnsClient, PreorderNamespace, StacksNetwork};

#[derive(Subcommand)]
pub enum NamespacesCommands {
    /// Preorder a namespace (first namespace registration step)
    Preorder {
        /// Namespace (e.g., id)
        namespace: String,
        /// Salt for the commitment; random when omitted
        #[arg(long)]
        salt: Option<String>,
        /// Amount to burn in micro-STX
        #[arg(long)]
        burn: u128,
        #[command(flatten)]
        tx: TxArgs,
    },
}

pub async fn execute(command: NamespacesCommands, network: StacksNetwork) -> Result<()> {
    let client = BnsClient::connect(network);

    match command {
        NamespacesCommands::Preorder {
            namespace,
            salt,
            burn,
            tx,
        } => preorder_command(&client, namespace, salt, burn, tx).await,
    }
}

async fn preorder_command(
    client: &BnsClient,
    namespace: String,
    salt: Option<String>,
    burn: u128,
    tx: TxArgs,
) -> Result<()> {
    let salt = salt.unwrap_or_else(random_salt);
    println!("Preordering namespace: {}", namespace);
    println!("Salt: {} (keep it for the namespace reveal)\n", salt);

    let result = client
        .preorder_namespace(PreorderNamespace {
            namespace,
            salt,
            stx_to_burn: burn,
            private_key: tx.private_key()?,
            options: tx.call_options(),
        })
        .await
        .context("Namespace preorder failed")?;

    report(&result)
}
