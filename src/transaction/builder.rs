// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! Building signed contract-call transactions

use super::sign::sign_transaction;
use super::{
    AnchorMode, ContractCallPayload, PostConditionMode, PublicKeyEncoding,
    SingleSigSpendingCondition, StacksTransaction,
};
use crate::clarity::ClarityValue;
use crate::crypto::{StacksAddress, StacksPrivateKey};
use crate::error::{BnsError, BnsResult};
use crate::network::StacksNetwork;
use crate::node::StacksNode;

/// Everything needed to build one signed contract call
#[derive(Debug, Clone)]
pub struct ContractCallOptions {
    pub contract_address: StacksAddress,
    pub contract_name: String,
    pub function_name: String,
    pub function_args: Vec<ClarityValue>,
    pub sender_key: StacksPrivateKey,
    pub network: StacksNetwork,
    pub post_condition_mode: PostConditionMode,
    pub anchor_mode: AnchorMode,
    /// Use this nonce instead of asking the node
    pub nonce: Option<u64>,
    /// Use this fee (micro-STX) instead of estimating it
    pub fee: Option<u64>,
}

impl ContractCallOptions {
    fn unsigned_transaction(&self) -> StacksTransaction {
        let key_encoding = if self.sender_key.is_compressed() {
            PublicKeyEncoding::Compressed
        } else {
            PublicKeyEncoding::Uncompressed
        };

        StacksTransaction {
            version: self.network.transaction_version(),
            chain_id: self.network.chain_id(),
            auth: SingleSigSpendingCondition::new(self.sender_key.public_key_hash(), key_encoding),
            anchor_mode: self.anchor_mode,
            post_condition_mode: self.post_condition_mode,
            payload: ContractCallPayload {
                contract_address: self.contract_address,
                contract_name: self.contract_name.clone(),
                function_name: self.function_name.clone(),
                function_args: self.function_args.clone(),
            },
        }
    }
}

/// Build and sign a contract call.
///
/// Missing nonce and fee are resolved through `node`: the nonce from the
/// sender's account, the fee as the node's per-byte rate times the encoded
/// length (signatures are fixed-size, so the length does not change when
/// signing).
pub async fn make_contract_call(
    options: &ContractCallOptions,
    node: &dyn StacksNode,
) -> BnsResult<StacksTransaction> {
    let mut tx = options.unsigned_transaction();
    let encoded_len = tx.serialize()?.len() as u64;

    let nonce = match options.nonce {
        Some(nonce) => nonce,
        None => {
            let sender = options.sender_key.address(&options.network)?;
            node.account_nonce(&sender).await?
        }
    };

    let fee = match options.fee {
        Some(fee) => fee,
        None => {
            let rate = node.fee_rate().await?;
            rate.checked_mul(encoded_len)
                .ok_or_else(|| BnsError::Encoding("fee estimate overflows u64".to_string()))?
        }
    };

    tx.auth.nonce = nonce;
    tx.auth.fee = fee;
    sign_transaction(&mut tx, &options.sender_key)?;

    tracing::debug!(
        "Built {}::{} call (nonce {}, fee {} uSTX)",
        options.contract_name,
        options.function_name,
        nonce,
        fee
    );

    Ok(tx)
}
