// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! CLI command implementations

pub mod keys;
pub mod names;
pub mod namespaces;

use anyhow::{Context, Result};
use clap::Args;
use stacks_bns::constants::PRIVATE_KEY_ENV;
use stacks_bns::{CallOptions, OperationResult, StacksPrivateKey};

/// Signing and fee arguments shared by every transaction command
#[derive(Args)]
pub struct TxArgs {
    /// Sender private key (hex); prompted for when not given
    #[arg(long, env = PRIVATE_KEY_ENV, hide_env_values = true)]
    key: Option<String>,

    /// Nonce to use instead of the account's next nonce
    #[arg(long)]
    nonce: Option<u64>,

    /// Fee in micro-STX instead of the node's estimate
    #[arg(long)]
    fee: Option<u64>,
}

impl TxArgs {
    pub fn private_key(&self) -> Result<StacksPrivateKey> {
        load_private_key(self.key.clone())
    }

    pub fn call_options(&self) -> CallOptions {
        CallOptions {
            nonce: self.nonce,
            fee: self.fee,
        }
    }
}

/// Parse a hex private key, prompting without echo if none was given
pub fn load_private_key(key: Option<String>) -> Result<StacksPrivateKey> {
    let key = match key {
        Some(key) => key,
        None => rpassword::prompt_password("Enter private key (hex): ")
            .context("Failed to read private key")?,
    };

    StacksPrivateKey::from_hex(&key).context("Invalid private key")
}

/// Random hex salt for preorders
pub fn random_salt() -> String {
    hex::encode(rand::random::<[u8; 16]>())
}

/// Print the result as JSON; a rejection becomes the command's error
pub fn report(result: &OperationResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);

    match result {
        OperationResult::Broadcast { txid } => {
            println!("\n✓ Transaction broadcast: {}", txid);
            Ok(())
        }
        OperationResult::Rejected { code, message } => {
            anyhow::bail!("Transaction rejected by the node: {} ({})", message, code)
        }
    }
}
