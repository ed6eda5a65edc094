// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! Crockford base-32 and c32check encoding of Stacks addresses

use crate::error::{BnsError, BnsResult};

fn invalid(input: &str, e: c32::Error) -> BnsError {
    BnsError::InvalidAddress {
        address: input.to_string(),
        reason: e.to_string(),
    }
}

/// Encode bytes as c32, preserving leading zero bytes as leading `0`s
pub fn c32_encode(input: &[u8]) -> String {
    c32::encode(input)
}

/// Decode a c32 string; `O`, `I`, `L` and lowercase are accepted
pub fn c32_decode(input: &str) -> BnsResult<Vec<u8>> {
    c32::decode(input).map_err(|e| invalid(input, e))
}

/// c32check: version character followed by c32(data ++ checksum)
pub fn c32check_encode(version: u8, data: &[u8]) -> BnsResult<String> {
    c32::encode_check(data, version).map_err(|e| BnsError::Encoding(e.to_string()))
}

/// Inverse of [`c32check_encode`]; verifies the checksum
pub fn c32check_decode(input: &str) -> BnsResult<(u8, Vec<u8>)> {
    let (data, version) = c32::decode_check(input).map_err(|e| invalid(input, e))?;
    Ok((version, data))
}
