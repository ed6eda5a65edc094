// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! Stacks contract-call transactions
//!
//! Only what BNS needs is modelled: standard (non-sponsored) single-sig
//! authorization, no post-conditions, and a contract-call payload.

pub mod builder;
pub mod sign;

pub use builder::{make_contract_call, ContractCallOptions};

use crate::clarity::{validate_contract_name, validate_identifier, write_address, ClarityValue};
use crate::crypto::{sha512_256, StacksAddress};
use crate::error::{BnsError, BnsResult};

pub const AUTH_TYPE_STANDARD: u8 = 0x04;
pub const PAYLOAD_CONTRACT_CALL: u8 = 0x02;
pub const HASH_MODE_P2PKH: u8 = 0x00;
pub const EMPTY_SIGNATURE: [u8; 65] = [0u8; 65];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorMode {
    OnChainOnly = 0x01,
    OffChainOnly = 0x02,
    Any = 0x03,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostConditionMode {
    Allow = 0x01,
    Deny = 0x02,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicKeyEncoding {
    Compressed = 0x00,
    Uncompressed = 0x01,
}

/// Single-sig spending condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleSigSpendingCondition {
    pub hash_mode: u8,
    pub signer: [u8; 20],
    pub nonce: u64,
    pub fee: u64,
    pub key_encoding: PublicKeyEncoding,
    pub signature: [u8; 65],
}

impl SingleSigSpendingCondition {
    pub fn new(signer: [u8; 20], key_encoding: PublicKeyEncoding) -> Self {
        Self {
            hash_mode: HASH_MODE_P2PKH,
            signer,
            nonce: 0,
            fee: 0,
            key_encoding,
            signature: EMPTY_SIGNATURE,
        }
    }

    /// Copy with nonce, fee and signature zeroed, as hashed for the initial sighash
    pub fn cleared(&self) -> Self {
        Self {
            nonce: 0,
            fee: 0,
            signature: EMPTY_SIGNATURE,
            ..self.clone()
        }
    }

    fn serialize_into(&self, out: &mut Vec<u8>) {
        out.push(self.hash_mode);
        out.extend_from_slice(&self.signer);
        out.extend_from_slice(&self.nonce.to_be_bytes());
        out.extend_from_slice(&self.fee.to_be_bytes());
        out.push(self.key_encoding as u8);
        out.extend_from_slice(&self.signature);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCallPayload {
    pub contract_address: StacksAddress,
    pub contract_name: String,
    pub function_name: String,
    pub function_args: Vec<ClarityValue>,
}

impl ContractCallPayload {
    fn serialize_into(&self, out: &mut Vec<u8>) -> BnsResult<()> {
        validate_contract_name(&self.contract_name)?;
        validate_identifier("function name", &self.function_name)?;

        out.push(PAYLOAD_CONTRACT_CALL);
        write_address(out, &self.contract_address);
        out.push(self.contract_name.len() as u8);
        out.extend_from_slice(self.contract_name.as_bytes());
        out.push(self.function_name.len() as u8);
        out.extend_from_slice(self.function_name.as_bytes());

        let argc = u32::try_from(self.function_args.len())
            .map_err(|_| BnsError::Encoding("too many function arguments".to_string()))?;
        out.extend_from_slice(&argc.to_be_bytes());
        for arg in &self.function_args {
            out.extend_from_slice(&arg.serialize()?);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StacksTransaction {
    pub version: u8,
    pub chain_id: u32,
    pub auth: SingleSigSpendingCondition,
    pub anchor_mode: AnchorMode,
    pub post_condition_mode: PostConditionMode,
    pub payload: ContractCallPayload,
}

impl StacksTransaction {
    pub fn nonce(&self) -> u64 {
        self.auth.nonce
    }

    pub fn fee(&self) -> u64 {
        self.auth.fee
    }

    pub fn serialize(&self) -> BnsResult<Vec<u8>> {
        let mut out = Vec::with_capacity(256);
        out.push(self.version);
        out.extend_from_slice(&self.chain_id.to_be_bytes());
        out.push(AUTH_TYPE_STANDARD);
        self.auth.serialize_into(&mut out);
        out.push(self.anchor_mode as u8);
        out.push(self.post_condition_mode as u8);
        // no post-conditions
        out.extend_from_slice(&0u32.to_be_bytes());
        self.payload.serialize_into(&mut out)?;
        Ok(out)
    }

    pub fn txid_bytes(&self) -> BnsResult<[u8; 32]> {
        Ok(sha512_256(&self.serialize()?))
    }

    /// Hex transaction id, as reported by the node on broadcast
    pub fn txid(&self) -> BnsResult<String> {
        Ok(hex::encode(self.txid_bytes()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BNS_CONTRACT_ADDRESS;

    fn sample() -> StacksTransaction {
        StacksTransaction {
            version: 0x00,
            chain_id: 1,
            auth: SingleSigSpendingCondition::new([7u8; 20], PublicKeyEncoding::Compressed),
            anchor_mode: AnchorMode::Any,
            post_condition_mode: PostConditionMode::Allow,
            payload: ContractCallPayload {
                contract_address: BNS_CONTRACT_ADDRESS.parse().unwrap(),
                contract_name: "bns".to_string(),
                function_name: "name-preorder".to_string(),
                function_args: vec![
                    ClarityValue::buffer(vec![1u8; 20]),
                    ClarityValue::uint(2_000_000u64),
                ],
            },
        }
    }

    #[test]
    fn test_layout() {
        let mut tx = sample();
        tx.auth.nonce = 5;
        tx.auth.fee = 180;
        let bytes = tx.serialize().unwrap();

        assert_eq!(bytes[0], 0x00);
        assert_eq!(&bytes[1..5], &[0, 0, 0, 1]);
        assert_eq!(bytes[5], AUTH_TYPE_STANDARD);
        assert_eq!(bytes[6], HASH_MODE_P2PKH);
        assert_eq!(&bytes[7..27], &[7u8; 20]);
        assert_eq!(&bytes[27..35], &5u64.to_be_bytes());
        assert_eq!(&bytes[35..43], &180u64.to_be_bytes());
        assert_eq!(bytes[43], 0x00);
        // signature occupies 44..109
        assert_eq!(bytes[109], AnchorMode::Any as u8);
        assert_eq!(bytes[110], PostConditionMode::Allow as u8);
        assert_eq!(&bytes[111..115], &[0, 0, 0, 0]);
        assert_eq!(bytes[115], PAYLOAD_CONTRACT_CALL);
        assert_eq!(bytes[116], 22);
        assert_eq!(bytes[137], 3);
        assert_eq!(&bytes[138..141], b"bns");
        assert_eq!(bytes[141], 13);
        assert_eq!(&bytes[142..155], b"name-preorder");
        assert_eq!(&bytes[155..159], &[0, 0, 0, 2]);
        // buffer (1 + 4 + 20) then uint (1 + 16)
        assert_eq!(bytes.len(), 159 + 25 + 17);
    }

    #[test]
    fn test_txid_changes_with_contents() {
        let a = sample();
        let mut b = sample();
        b.auth.nonce = 1;
        assert_ne!(a.txid().unwrap(), b.txid().unwrap());
        assert_eq!(a.txid().unwrap().len(), 64);
    }

    #[test]
    fn test_cleared_condition() {
        let mut condition = SingleSigSpendingCondition::new([1u8; 20], PublicKeyEncoding::Compressed);
        condition.nonce = 9;
        condition.fee = 300;
        condition.signature = [3u8; 65];
        let cleared = condition.cleared();
        assert_eq!(cleared.nonce, 0);
        assert_eq!(cleared.fee, 0);
        assert_eq!(cleared.signature, EMPTY_SIGNATURE);
        assert_eq!(cleared.signer, condition.signer);
    }

    #[test]
    fn test_invalid_function_name() {
        let mut tx = sample();
        tx.payload.function_name = String::new();
        assert!(matches!(tx.serialize(), Err(BnsError::Encoding(_))));
    }

    #[test]
    fn test_invalid_contract_name() {
        let mut tx = sample();
        tx.payload.contract_name = "bns?".to_string();
        assert!(matches!(tx.serialize(), Err(BnsError::Encoding(_))));

        tx.payload.contract_name = "b".repeat(41);
        assert!(matches!(tx.serialize(), Err(BnsError::Encoding(_))));
    }
}
