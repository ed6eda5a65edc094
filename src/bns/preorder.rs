// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! Namespace and name preorders
//!
//! A preorder commits to a hidden namespace or name (hash160 of the name and
//! a salt) and burns the registration fee. The salt is revealed later by the
//! matching reveal/register call.

use super::{BnsClient, BnsOperation, CallOptions, OperationResult};
use crate::clarity::ClarityValue;
use crate::crypto::{hash160, StacksPrivateKey};
use crate::error::{BnsError, BnsResult};
use crate::node::StacksNode;

#[derive(Debug, Clone)]
pub struct PreorderNamespace {
    pub namespace: String,
    pub salt: String,
    /// Amount to burn, in micro-STX
    pub stx_to_burn: u128,
    pub private_key: StacksPrivateKey,
    pub options: CallOptions,
}

#[derive(Debug, Clone)]
pub struct PreorderName {
    /// Name including namespace, e.g. `myname.id`
    pub fully_qualified_name: String,
    pub salt: String,
    /// Amount to burn, in micro-STX
    pub stx_to_burn: u128,
    pub private_key: StacksPrivateKey,
    pub options: CallOptions,
}

/// hash160 of `value` followed by `salt`
pub fn salted_commitment(value: &str, salt: &str) -> [u8; 20] {
    let mut salted = Vec::with_capacity(value.len() + salt.len());
    salted.extend_from_slice(value.as_bytes());
    salted.extend_from_slice(salt.as_bytes());
    hash160(&salted)
}

fn check_namespace(namespace: &str) -> BnsResult<()> {
    if namespace.is_empty() || namespace.contains('.') {
        return Err(BnsError::MalformedName {
            name: namespace.to_string(),
            reason: "a namespace is a single non-empty segment".to_string(),
        });
    }
    Ok(())
}

impl<N: StacksNode> BnsClient<N> {
    /// First step of registering a namespace.
    ///
    /// The namespace itself is not revealed by this transaction.
    ///
    /// # Arguments
    /// * `request` - Namespace, salt, STX to burn and the signing key
    ///
    /// # Returns
    /// The broadcast txid, or the node's rejection
    pub async fn preorder_namespace(
        &self,
        request: PreorderNamespace,
    ) -> BnsResult<OperationResult> {
        // Step 1: Validate the namespace
        check_namespace(&request.namespace)?;

        // Step 2: Commit to namespace ++ salt
        let commitment = salted_commitment(&request.namespace, &request.salt);
        tracing::debug!(
            "Namespace preorder commitment: {}",
            hex::encode(commitment)
        );

        // Step 3: Sign and broadcast namespace-preorder
        self.call(
            BnsOperation::NamespacePreorder,
            vec![
                ClarityValue::buffer(commitment),
                ClarityValue::uint(request.stx_to_burn),
            ],
            &request.private_key,
            request.options,
            None,
        )
        .await
    }

    /// First step of registering a name; follow with [`Self::register_name`]
    /// using the same salt.
    ///
    /// # Arguments
    /// * `request` - Fully-qualified name (e.g., "myname.id"), salt, STX to
    ///   burn and the signing key
    ///
    /// # Returns
    /// The broadcast txid, or the node's rejection. Subdomains fail with
    /// `UnsupportedOperation` before any network call.
    pub async fn preorder_name(&self, request: PreorderName) -> BnsResult<OperationResult> {
        // Step 1: Parse the name and refuse subdomains
        let name = BnsOperation::NamePreorder.resolve(&request.fully_qualified_name)?;

        // Step 2: Commit to name.namespace ++ salt
        let commitment = salted_commitment(&name.to_string(), &request.salt);
        tracing::debug!("Name preorder commitment for {}: {}", name, hex::encode(commitment));

        // Step 3: Sign and broadcast name-preorder
        self.call(
            BnsOperation::NamePreorder,
            vec![
                ClarityValue::buffer(commitment),
                ClarityValue::uint(request.stx_to_burn),
            ],
            &request.private_key,
            request.options,
            None,
        )
        .await
    }
}
