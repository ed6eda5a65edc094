// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! Clarity values passed as contract-call arguments, and their consensus
//! serialization

use crate::crypto::StacksAddress;
use crate::error::{BnsError, BnsResult};

mod type_prefix {
    pub const INT: u8 = 0x00;
    pub const UINT: u8 = 0x01;
    pub const BUFFER: u8 = 0x02;
    pub const BOOL_TRUE: u8 = 0x03;
    pub const BOOL_FALSE: u8 = 0x04;
    pub const STANDARD_PRINCIPAL: u8 = 0x05;
    pub const CONTRACT_PRINCIPAL: u8 = 0x06;
    pub const RESPONSE_OK: u8 = 0x07;
    pub const RESPONSE_ERR: u8 = 0x08;
    pub const OPTIONAL_NONE: u8 = 0x09;
    pub const OPTIONAL_SOME: u8 = 0x0a;
    pub const LIST: u8 = 0x0b;
    pub const STRING_ASCII: u8 = 0x0d;
}

/// Largest serialized Clarity value a node accepts
pub const MAX_VALUE_SIZE: usize = 1024 * 1024;

/// Longest contract name the chain accepts
pub const MAX_CONTRACT_NAME_LEN: usize = 40;

/// Contract names: a letter, then letters, digits, `-` or `_`
pub fn validate_contract_name(name: &str) -> BnsResult<()> {
    let valid = !name.is_empty()
        && name.len() <= MAX_CONTRACT_NAME_LEN
        && name.starts_with(|c: char| c.is_ascii_alphabetic())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(BnsError::Encoding(format!("invalid contract name '{}'", name)))
    }
}

/// Function and other Clarity names: 1-128 ASCII characters
pub fn validate_identifier(kind: &str, name: &str) -> BnsResult<()> {
    let valid = !name.is_empty()
        && name.len() <= 128
        && name.starts_with(|c: char| c.is_ascii_alphabetic())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_!?+<>=/*".contains(c));

    if valid {
        Ok(())
    } else {
        Err(BnsError::Encoding(format!("invalid {} '{}'", kind, name)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClarityValue {
    Int(i128),
    UInt(u128),
    Buffer(Vec<u8>),
    Bool(bool),
    StandardPrincipal(StacksAddress),
    ContractPrincipal(StacksAddress, String),
    ResponseOk(Box<ClarityValue>),
    ResponseErr(Box<ClarityValue>),
    None,
    Some(Box<ClarityValue>),
    List(Vec<ClarityValue>),
    StringAscii(String),
}

impl ClarityValue {
    pub fn buffer(bytes: impl Into<Vec<u8>>) -> Self {
        ClarityValue::Buffer(bytes.into())
    }

    /// Buffer holding the UTF-8 bytes of `s`
    pub fn buffer_from_str(s: &str) -> Self {
        ClarityValue::Buffer(s.as_bytes().to_vec())
    }

    pub fn uint(n: impl Into<u128>) -> Self {
        ClarityValue::UInt(n.into())
    }

    pub fn standard_principal(address: StacksAddress) -> Self {
        ClarityValue::StandardPrincipal(address)
    }

    /// Standard principal from its `S...` c32 form
    pub fn principal_from_str(address: &str) -> BnsResult<Self> {
        Ok(ClarityValue::StandardPrincipal(address.parse()?))
    }

    pub fn none() -> Self {
        ClarityValue::None
    }

    pub fn some(value: ClarityValue) -> Self {
        ClarityValue::Some(Box::new(value))
    }

    pub fn serialize(&self) -> BnsResult<Vec<u8>> {
        let mut out = Vec::new();
        self.serialize_into(&mut out)?;
        if out.len() > MAX_VALUE_SIZE {
            return Err(BnsError::Encoding(format!(
                "Clarity value of {} bytes exceeds {} bytes",
                out.len(),
                MAX_VALUE_SIZE
            )));
        }
        Ok(out)
    }

    pub fn serialize_into(&self, out: &mut Vec<u8>) -> BnsResult<()> {
        match self {
            ClarityValue::Int(n) => {
                out.push(type_prefix::INT);
                out.extend_from_slice(&n.to_be_bytes());
            }
            ClarityValue::UInt(n) => {
                out.push(type_prefix::UINT);
                out.extend_from_slice(&n.to_be_bytes());
            }
            ClarityValue::Buffer(bytes) => {
                out.push(type_prefix::BUFFER);
                write_len_prefixed(out, bytes)?;
            }
            ClarityValue::Bool(true) => out.push(type_prefix::BOOL_TRUE),
            ClarityValue::Bool(false) => out.push(type_prefix::BOOL_FALSE),
            ClarityValue::StandardPrincipal(address) => {
                out.push(type_prefix::STANDARD_PRINCIPAL);
                write_address(out, address);
            }
            ClarityValue::ContractPrincipal(address, name) => {
                validate_contract_name(name)?;
                out.push(type_prefix::CONTRACT_PRINCIPAL);
                write_address(out, address);
                out.push(name.len() as u8);
                out.extend_from_slice(name.as_bytes());
            }
            ClarityValue::ResponseOk(value) => {
                out.push(type_prefix::RESPONSE_OK);
                value.serialize_into(out)?;
            }
            ClarityValue::ResponseErr(value) => {
                out.push(type_prefix::RESPONSE_ERR);
                value.serialize_into(out)?;
            }
            ClarityValue::None => out.push(type_prefix::OPTIONAL_NONE),
            ClarityValue::Some(value) => {
                out.push(type_prefix::OPTIONAL_SOME);
                value.serialize_into(out)?;
            }
            ClarityValue::List(items) => {
                out.push(type_prefix::LIST);
                write_u32_len(out, items.len())?;
                for item in items {
                    item.serialize_into(out)?;
                }
            }
            ClarityValue::StringAscii(s) => {
                if !s.is_ascii() {
                    return Err(BnsError::Encoding(format!("not an ASCII string: {:?}", s)));
                }
                out.push(type_prefix::STRING_ASCII);
                write_len_prefixed(out, s.as_bytes())?;
            }
        }
        Ok(())
    }
}

pub(crate) fn write_address(out: &mut Vec<u8>, address: &StacksAddress) {
    out.push(address.version());
    out.extend_from_slice(address.hash160());
}

fn write_u32_len(out: &mut Vec<u8>, len: usize) -> BnsResult<()> {
    let len = u32::try_from(len)
        .map_err(|_| BnsError::Encoding(format!("length {} does not fit in u32", len)))?;
    out.extend_from_slice(&len.to_be_bytes());
    Ok(())
}

fn write_len_prefixed(out: &mut Vec<u8>, bytes: &[u8]) -> BnsResult<()> {
    write_u32_len(out, bytes.len())?;
    out.extend_from_slice(bytes);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BNS_CONTRACT_ADDRESS;

    #[test]
    fn test_uint() {
        let bytes = ClarityValue::uint(2_000_000u64).serialize().unwrap();
        assert_eq!(hex::encode(bytes), "01000000000000000000000000001e8480");
    }

    #[test]
    fn test_buffer_from_str() {
        let bytes = ClarityValue::buffer_from_str("id").serialize().unwrap();
        assert_eq!(hex::encode(bytes), "02000000026964");
    }

    #[test]
    fn test_optionals_and_bools() {
        assert_eq!(ClarityValue::none().serialize().unwrap(), vec![0x09]);
        assert_eq!(
            ClarityValue::some(ClarityValue::Bool(true)).serialize().unwrap(),
            vec![0x0a, 0x03]
        );
        assert_eq!(ClarityValue::Bool(false).serialize().unwrap(), vec![0x04]);
    }

    #[test]
    fn test_standard_principal() {
        let value = ClarityValue::principal_from_str(BNS_CONTRACT_ADDRESS).unwrap();
        let bytes = value.serialize().unwrap();
        assert_eq!(bytes.len(), 22);
        assert_eq!(bytes[0], 0x05);
        assert_eq!(bytes[1], 22);
        assert!(bytes[2..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_contract_principal() {
        let address: StacksAddress = BNS_CONTRACT_ADDRESS.parse().unwrap();
        let bytes = ClarityValue::ContractPrincipal(address, "bns".to_string())
            .serialize()
            .unwrap();
        assert_eq!(bytes[0], 0x06);
        assert_eq!(bytes[22], 3);
        assert_eq!(&bytes[23..], b"bns");
    }

    #[test]
    fn test_list_and_responses() {
        let list = ClarityValue::List(vec![ClarityValue::Int(-1), ClarityValue::uint(1u8)]);
        let bytes = list.serialize().unwrap();
        assert_eq!(&bytes[..5], &[0x0b, 0, 0, 0, 2]);
        assert_eq!(bytes[5], 0x00);
        assert!(bytes[6..22].iter().all(|&b| b == 0xff));

        let ok = ClarityValue::ResponseOk(Box::new(ClarityValue::Bool(true)));
        assert_eq!(ok.serialize().unwrap(), vec![0x07, 0x03]);
        let err = ClarityValue::ResponseErr(Box::new(ClarityValue::uint(0u8)));
        assert_eq!(err.serialize().unwrap()[0], 0x08);
    }

    #[test]
    fn test_oversized_value() {
        let big = ClarityValue::buffer(vec![0u8; MAX_VALUE_SIZE]);
        assert!(matches!(big.serialize(), Err(BnsError::Encoding(_))));
    }

    #[test]
    fn test_identifiers() {
        assert!(validate_identifier("function name", "name-preorder").is_ok());
        assert!(validate_identifier("function name", "").is_err());
        assert!(validate_identifier("function name", "1abc").is_err());
        assert!(validate_identifier("function name", &"a".repeat(129)).is_err());
        assert!(validate_identifier("function name", "with space").is_err());
    }

    #[test]
    fn test_contract_name_grammar() {
        assert!(validate_contract_name("bns").is_ok());
        assert!(validate_contract_name("pox-4_v2").is_ok());
        assert!(validate_contract_name(&"a".repeat(MAX_CONTRACT_NAME_LEN)).is_ok());
        assert!(validate_contract_name(&"a".repeat(MAX_CONTRACT_NAME_LEN + 1)).is_err());
        assert!(validate_contract_name("").is_err());
        assert!(validate_contract_name("9lives").is_err());
        for bad in ["is-ok?", "a+b", "a/b", "x*", "a<b", "a=b"] {
            assert!(validate_contract_name(bad).is_err(), "accepted {:?}", bad);
            assert!(validate_identifier("function name", bad).is_ok());
        }
    }
}
