// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! Stacks BNS - Blockchain Name System client
//!
//! Builds, signs and broadcasts calls to the `bns` boot contract: namespace
//! and name preorders, name registration, zonefile updates and transfers.

pub mod bns;
pub mod clarity;
pub mod constants;
pub mod crypto;
pub mod error;
pub mod name;
pub mod network;
pub mod node;
pub mod transaction;

pub use constants::*;

// Re-export commonly used types
pub use bns::{
    BnsClient, BnsOperation, CallOptions, OperationResult, PreorderName, PreorderNamespace,
    RegisterName, TransferName, UpdateName,
};
pub use crypto::{StacksAddress, StacksPrivateKey};
pub use error::{BnsError, BnsResult};
pub use name::{decode, DecodedName, FullyQualifiedName};
pub use network::{NetworkKind, StacksNetwork};
pub use node::{HttpNode, StacksNode};
