// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! Zonefile updates

use super::{BnsClient, BnsOperation, CallOptions, OperationResult};
use crate::clarity::ClarityValue;
use crate::constants::DEFAULT_ZONEFILE_TTL;
use crate::crypto::{hash160, StacksPrivateKey};
use crate::error::BnsResult;
use crate::node::StacksNode;

#[derive(Debug, Clone)]
pub struct UpdateName {
    pub fully_qualified_name: String,
    /// New zonefile contents; only its hash goes on chain
    pub zonefile: String,
    pub private_key: StacksPrivateKey,
    pub options: CallOptions,
}

/// Minimal zonefile pointing `name` at a profile document
pub fn profile_zonefile(name: &str, profile_url: &str) -> String {
    format!(
        "$ORIGIN {}\n$TTL {}\n_http._tcp\tIN\tURI\t10\t1\t\"{}\"\n\n",
        name, DEFAULT_ZONEFILE_TTL, profile_url
    )
}

impl<N: StacksNode> BnsClient<N> {
    /// Point a name at a new zonefile.
    ///
    /// The zonefile is broadcast as the transaction's attachment.
    ///
    /// # Arguments
    /// * `request` - Fully-qualified name, new zonefile contents and the
    ///   owner's signing key
    ///
    /// # Returns
    /// The broadcast txid, or the node's rejection
    pub async fn name_update(&self, request: UpdateName) -> BnsResult<OperationResult> {
        // Step 1: Parse the name and refuse subdomains
        let name = BnsOperation::NameUpdate.resolve(&request.fully_qualified_name)?;

        // Step 2: Only its hash160 goes on chain; the text is the attachment
        let zonefile = request.zonefile.as_bytes();

        // Step 3: Sign and broadcast name-update
        self.call(
            BnsOperation::NameUpdate,
            vec![
                ClarityValue::buffer_from_str(name.namespace()),
                ClarityValue::buffer_from_str(name.name()),
                ClarityValue::buffer(hash160(zonefile)),
            ],
            &request.private_key,
            request.options,
            Some(zonefile),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bns::test_support::{client, key, last_call};
    use crate::constants::DEFAULT_PROFILE_URL;
    use crate::error::BnsError;
    use crate::node::mock::MockNode;

    fn request(fqn: &str) -> UpdateName {
        UpdateName {
            fully_qualified_name: fqn.to_string(),
            zonefile: profile_zonefile(fqn, DEFAULT_PROFILE_URL),
            private_key: key(),
            options: CallOptions::default(),
        }
    }

    #[test]
    fn test_profile_zonefile() {
        let zonefile = profile_zonefile("myname.id", "https://example.com/profile.json");
        assert!(zonefile.starts_with("$ORIGIN myname.id\n$TTL 3600\n"));
        assert!(zonefile.contains("URI\t10\t1\t\"https://example.com/profile.json\""));
    }

    #[tokio::test]
    async fn test_name_update_attaches_zonefile() {
        let client = client(MockNode::accepting("0xcafe"));
        let req = request("myname.id");
        let zonefile = req.zonefile.clone();

        let result = client.name_update(req).await.unwrap();
        assert_eq!(
            result.to_json(),
            serde_json::json!({"success": true, "data": {"txid": "0xcafe"}})
        );

        let (_, attachment) = client.node().last_broadcast().unwrap();
        assert_eq!(attachment.as_deref(), Some(zonefile.as_bytes()));

        let (function, args) = last_call(client.node());
        assert_eq!(function, "name-update");
        let mut expected = vec![0, 0, 0, 3];
        expected.extend(ClarityValue::buffer_from_str("id").serialize().unwrap());
        expected.extend(ClarityValue::buffer_from_str("myname").serialize().unwrap());
        expected.extend(
            ClarityValue::buffer(hash160(zonefile.as_bytes()))
                .serialize()
                .unwrap(),
        );
        assert_eq!(args, expected);
    }

    #[tokio::test]
    async fn test_name_update_rejects_subdomain_before_network() {
        let client = client(MockNode::accepting("0xcafe"));
        let err = client
            .name_update(request("sub.myname.id"))
            .await
            .unwrap_err();
        assert!(matches!(err, BnsError::UnsupportedOperation { .. }));
        assert_eq!(client.node().calls(), 0);
    }
}
