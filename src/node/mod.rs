// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! Stacks node API
//!
//! Everything that leaves the process goes through [`StacksNode`].

pub mod http;

pub use http::HttpNode;

use crate::crypto::StacksAddress;
use crate::error::BnsResult;
use serde::{Deserialize, Serialize};

/// Rejection body returned by `POST /v2/transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BroadcastRejection {
    pub error: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub reason_data: Option<serde_json::Value>,
    #[serde(default)]
    pub txid: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BroadcastResponse {
    /// The node accepted the transaction into its mempool
    Accepted(String),
    Rejected(BroadcastRejection),
}

#[async_trait::async_trait]
pub trait StacksNode: Send + Sync {
    /// Next nonce for `address`
    async fn account_nonce(&self, address: &StacksAddress) -> BnsResult<u64>;

    /// Fee rate in micro-STX per byte
    async fn fee_rate(&self) -> BnsResult<u64>;

    /// Submit a serialized transaction, optionally with an attachment
    async fn broadcast(&self, tx: &[u8], attachment: Option<&[u8]>) -> BnsResult<BroadcastResponse>;
}
