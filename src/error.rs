// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! Error type for BNS operations

use thiserror::Error;

/// Errors returned by the library.
///
/// Broadcast rejections are not errors: a node that answers with a rejection
/// produces [`crate::OperationResult::Rejected`].
#[derive(Error, Debug)]
pub enum BnsError {
    /// A subdomain was given to an operation that only handles top-level names
    #[error("Cannot {operation} a subdomain ({name})")]
    UnsupportedOperation {
        operation: &'static str,
        name: String,
    },

    /// The fully-qualified name does not follow `[subdomain.]name.namespace`
    #[error("Malformed name '{name}': {reason}")]
    MalformedName { name: String, reason: String },

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// A value could not be encoded into a transaction
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// No network was selected at the call boundary
    #[error("No network selected; set BNS_NETWORK to mainnet, testnet or devnet")]
    NetworkNotSelected,

    #[error("Unknown network '{0}' (expected mainnet, testnet or devnet)")]
    UnknownNetwork(String),

    /// The node could not be reached or returned an unreadable response
    #[error("Transport failure: {0}")]
    Transport(String),
}

pub type BnsResult<T> = std::result::Result<T, BnsError>;
