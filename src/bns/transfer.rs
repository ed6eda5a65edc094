// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! Name transfers

use super::{BnsClient, BnsOperation, CallOptions, OperationResult};
use crate::clarity::ClarityValue;
use crate::crypto::{StacksAddress, StacksPrivateKey};
use crate::error::BnsResult;
use crate::node::StacksNode;

#[derive(Debug, Clone)]
pub struct TransferName {
    pub fully_qualified_name: String,
    /// New owner, as a standard `S...` address
    pub recipient: String,
    pub private_key: StacksPrivateKey,
    pub options: CallOptions,
}

impl<N: StacksNode> BnsClient<N> {
    /// Transfer a name to `recipient`, leaving its zonefile hash unset
    ///
    /// # Arguments
    /// * `request` - Fully-qualified name, recipient address and the owner's
    ///   signing key
    ///
    /// # Returns
    /// The broadcast txid, or the node's rejection. A malformed recipient
    /// fails with `InvalidAddress` before any network call.
    pub async fn name_transfer(&self, request: TransferName) -> BnsResult<OperationResult> {
        // Step 1: Parse the name and the recipient
        let name = BnsOperation::NameTransfer.resolve(&request.fully_qualified_name)?;
        let recipient: StacksAddress = request.recipient.parse()?;

        // Step 2: Sign and broadcast name-transfer
        self.call(
            BnsOperation::NameTransfer,
            vec![
                ClarityValue::buffer_from_str(name.namespace()),
                ClarityValue::buffer_from_str(name.name()),
                ClarityValue::standard_principal(recipient),
                ClarityValue::none(),
            ],
            &request.private_key,
            request.options,
            None,
        )
        .await
    }
}
