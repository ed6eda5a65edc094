// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! secp256k1 sender keys

use super::address::StacksAddress;
use super::hash::hash160;
use crate::error::{BnsError, BnsResult};
use crate::network::StacksNetwork;
use k256::ecdsa::SigningKey;
use std::fmt;

/// A transaction signing key.
///
/// Stacks keys are 32 bytes of secret scalar, optionally followed by a
/// `01` byte marking that the public key is used in compressed form.
#[derive(Clone)]
pub struct StacksPrivateKey {
    signing_key: SigningKey,
    compressed: bool,
}

impl StacksPrivateKey {
    /// Parse from hex (64 chars, or 66 chars ending in `01`)
    pub fn from_hex(key: &str) -> BnsResult<Self> {
        let key = key.trim();
        let key = key.strip_prefix("0x").unwrap_or(key);
        let bytes = hex::decode(key)
            .map_err(|e| BnsError::InvalidPrivateKey(format!("invalid hex: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> BnsResult<Self> {
        let compressed = match bytes.len() {
            32 => false,
            33 if bytes[32] == 0x01 => true,
            33 => {
                return Err(BnsError::InvalidPrivateKey(
                    "33-byte key must end with 0x01".to_string(),
                ))
            }
            n => {
                return Err(BnsError::InvalidPrivateKey(format!(
                    "expected 32 or 33 bytes, got {}",
                    n
                )))
            }
        };

        let signing_key = SigningKey::from_slice(&bytes[..32])
            .map_err(|_| BnsError::InvalidPrivateKey("not a valid secp256k1 scalar".to_string()))?;

        Ok(Self {
            signing_key,
            compressed,
        })
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// SEC1 public key in the encoding this key declares
    pub fn public_key_bytes(&self) -> Vec<u8> {
        self.signing_key
            .verifying_key()
            .to_encoded_point(self.compressed)
            .as_bytes()
            .to_vec()
    }

    /// hash160 of the public key; the signer field of a spending condition
    pub fn public_key_hash(&self) -> [u8; 20] {
        hash160(&self.public_key_bytes())
    }

    /// Single-sig address of this key on `network`
    pub fn address(&self, network: &StacksNetwork) -> BnsResult<StacksAddress> {
        StacksAddress::new(network.address_version(), self.public_key_hash())
    }

    /// Recoverable signature over a 32-byte digest: recovery id, then r and s
    pub fn sign_recoverable(&self, digest: &[u8; 32]) -> BnsResult<[u8; 65]> {
        let (signature, recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(digest)
            .map_err(|e| BnsError::Encoding(format!("signing failed: {}", e)))?;

        let mut out = [0u8; 65];
        out[0] = recovery_id.to_byte();
        out[1..].copy_from_slice(&signature.to_bytes());
        Ok(out)
    }
}

impl fmt::Debug for StacksPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StacksPrivateKey")
            .field("public_key", &hex::encode(self.public_key_bytes()))
            .field("compressed", &self.compressed)
            .finish()
    }
}
