// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! BNS contract calls
//!
//! Each operation resolves its name, assembles the Clarity arguments of one
//! `bns` contract function and broadcasts a signed call to it.

pub mod preorder;
pub mod register;
pub mod transfer;
pub mod update;

pub use preorder::{PreorderName, PreorderNamespace};
pub use register::RegisterName;
pub use transfer::TransferName;
pub use update::UpdateName;

use crate::clarity::ClarityValue;
use crate::constants::BNS_CONTRACT_NAME;
use crate::crypto::StacksPrivateKey;
use crate::error::{BnsError, BnsResult};
use crate::name::FullyQualifiedName;
use crate::network::StacksNetwork;
use crate::node::{BroadcastResponse, HttpNode, StacksNode};
use crate::transaction::{make_contract_call, AnchorMode, ContractCallOptions, PostConditionMode};
use serde::{Serialize, Serializer};

/// The BNS contract functions this crate calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BnsOperation {
    NamespacePreorder,
    NamePreorder,
    NameRegister,
    NameUpdate,
    NameTransfer,
}

impl BnsOperation {
    pub fn function_name(self) -> &'static str {
        match self {
            BnsOperation::NamespacePreorder => "namespace-preorder",
            BnsOperation::NamePreorder => "name-preorder",
            BnsOperation::NameRegister => "name-register",
            BnsOperation::NameUpdate => "name-update",
            BnsOperation::NameTransfer => "name-transfer",
        }
    }

    /// Whether the contract function accepts a subdomain.
    ///
    /// The `bns` contract only knows top-level names; subdomains live in
    /// zonefiles and are never passed to these functions.
    pub fn supports_subdomain(self) -> bool {
        match self {
            BnsOperation::NamespacePreorder
            | BnsOperation::NamePreorder
            | BnsOperation::NameRegister
            | BnsOperation::NameUpdate
            | BnsOperation::NameTransfer => false,
        }
    }

    fn verb(self) -> &'static str {
        match self {
            BnsOperation::NamespacePreorder | BnsOperation::NamePreorder => "preorder",
            BnsOperation::NameRegister => "register",
            BnsOperation::NameUpdate => "update",
            BnsOperation::NameTransfer => "transfer",
        }
    }

    /// Parse `fqn` and reject it if this operation cannot act on it
    pub fn resolve(self, fqn: &str) -> BnsResult<FullyQualifiedName> {
        let name = FullyQualifiedName::parse(fqn)?;
        self.guard(&name)?;
        Ok(name)
    }

    pub fn guard(self, name: &FullyQualifiedName) -> BnsResult<()> {
        if name.is_subdomain() && !self.supports_subdomain() {
            return Err(BnsError::UnsupportedOperation {
                operation: self.verb(),
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

/// Optional overrides applied to the contract call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallOptions {
    pub nonce: Option<u64>,
    pub fee: Option<u64>,
}

/// Outcome of a broadcast that reached the node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    Broadcast { txid: String },
    Rejected { code: String, message: String },
}

impl OperationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, OperationResult::Broadcast { .. })
    }

    pub fn txid(&self) -> Option<&str> {
        match self {
            OperationResult::Broadcast { txid } => Some(txid),
            OperationResult::Rejected { .. } => None,
        }
    }

    /// `{success, data, error?}` as printed by the CLI
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            OperationResult::Broadcast { txid } => serde_json::json!({
                "success": true,
                "data": { "txid": txid },
            }),
            OperationResult::Rejected { message, .. } => serde_json::json!({
                "success": false,
                "data": {},
                "error": message,
            }),
        }
    }
}

impl From<BroadcastResponse> for OperationResult {
    fn from(response: BroadcastResponse) -> Self {
        match response {
            BroadcastResponse::Accepted(txid) => OperationResult::Broadcast { txid },
            BroadcastResponse::Rejected(rejection) => OperationResult::Rejected {
                code: rejection.reason.unwrap_or_else(|| "Unknown".to_string()),
                message: rejection.error,
            },
        }
    }
}

impl Serialize for OperationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Issues BNS operations against one explicitly chosen network
pub struct BnsClient<N = HttpNode> {
    network: StacksNetwork,
    node: N,
}

impl BnsClient<HttpNode> {
    /// Client talking HTTP to `network.core_api_url`.
    ///
    /// Operations must be awaited inside a tokio runtime; requests run on its
    /// blocking pool.
    pub fn connect(network: StacksNetwork) -> Self {
        let node = HttpNode::new(&network);
        Self { network, node }
    }
}

impl<N: StacksNode> BnsClient<N> {
    pub fn new(network: StacksNetwork, node: N) -> Self {
        Self { network, node }
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    /// Sign a call to `operation` with `args` and broadcast it.
    ///
    /// Node rejections come back as [`OperationResult::Rejected`]; only
    /// failures to build the transaction or reach the node are errors.
    async fn call(
        &self,
        operation: BnsOperation,
        args: Vec<ClarityValue>,
        sender_key: &StacksPrivateKey,
        call: CallOptions,
        attachment: Option<&[u8]>,
    ) -> BnsResult<OperationResult> {
        let options = ContractCallOptions {
            contract_address: self.network.bns_contract_address().parse()?,
            contract_name: BNS_CONTRACT_NAME.to_string(),
            function_name: operation.function_name().to_string(),
            function_args: args,
            sender_key: sender_key.clone(),
            network: self.network.clone(),
            post_condition_mode: PostConditionMode::Allow,
            anchor_mode: AnchorMode::Any,
            nonce: call.nonce,
            fee: call.fee,
        };

        let tx = make_contract_call(&options, &self.node).await?;
        let expected_txid = tx.txid()?;
        let raw = tx.serialize()?;

        tracing::info!(
            "Broadcasting {} on {} (txid {})",
            operation.function_name(),
            self.network.kind,
            expected_txid
        );

        let result = OperationResult::from(self.node.broadcast(&raw, attachment).await?);

        match &result {
            OperationResult::Broadcast { txid } => {
                if txid.trim_start_matches("0x") != expected_txid {
                    tracing::warn!(
                        "Node reported txid {} but the transaction hashes to {}",
                        txid,
                        expected_txid
                    );
                }
            }
            OperationResult::Rejected { code, message } => {
                tracing::warn!("{} rejected: {} ({})", operation.function_name(), message, code);
            }
        }

        Ok(result)
    }
}
