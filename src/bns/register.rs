// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! Name registration

use super::{BnsClient, BnsOperation, CallOptions, OperationResult};
use crate::clarity::ClarityValue;
use crate::crypto::StacksPrivateKey;
use crate::error::BnsResult;
use crate::node::StacksNode;

#[derive(Debug, Clone)]
pub struct RegisterName {
    /// Name including namespace, e.g. `myname.id`
    pub fully_qualified_name: String,
    /// Salt used by the earlier preorder
    pub salt: String,
    pub zonefile_hash: String,
    pub private_key: StacksPrivateKey,
    pub options: CallOptions,
}

impl<N: StacksNode> BnsClient<N> {
    /// Second and final step of registering a name.
    ///
    /// Reveals the name and salt committed to by [`Self::preorder_name`].
    ///
    /// # Arguments
    /// * `request` - Fully-qualified name, the preorder salt, the zonefile
    ///   hash and the signing key
    ///
    /// # Returns
    /// The broadcast txid, or the node's rejection
    pub async fn register_name(&self, request: RegisterName) -> BnsResult<OperationResult> {
        // Step 1: Parse the name and refuse subdomains
        let name = BnsOperation::NameRegister.resolve(&request.fully_qualified_name)?;

        // Step 2: Sign and broadcast name-register
        self.call(
            BnsOperation::NameRegister,
            vec![
                ClarityValue::buffer_from_str(name.namespace()),
                ClarityValue::buffer_from_str(name.name()),
                ClarityValue::buffer_from_str(&request.salt),
                ClarityValue::buffer_from_str(&request.zonefile_hash),
            ],
            &request.private_key,
            request.options,
            None,
        )
        .await
    }
}
