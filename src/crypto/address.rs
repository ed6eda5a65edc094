// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! Stacks addresses (`S` + c32check of version and hash160)

use super::c32::{c32check_decode, c32check_encode};
use crate::error::{BnsError, BnsResult};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StacksAddress {
    version: u8,
    hash160: [u8; 20],
}

impl StacksAddress {
    pub fn new(version: u8, hash160: [u8; 20]) -> BnsResult<Self> {
        if version >= 32 {
            return Err(BnsError::Encoding(format!(
                "address version {} out of range",
                version
            )));
        }
        Ok(Self { version, hash160 })
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn hash160(&self) -> &[u8; 20] {
        &self.hash160
    }

    pub fn to_c32(&self) -> String {
        // version < 32 is enforced by every constructor
        let encoded = c32check_encode(self.version, &self.hash160).unwrap_or_default();
        format!("S{}", encoded)
    }
}

impl FromStr for StacksAddress {
    type Err = BnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| BnsError::InvalidAddress {
            address: s.to_string(),
            reason: reason.to_string(),
        };

        let body = s
            .trim()
            .strip_prefix('S')
            .ok_or_else(|| invalid("must start with 'S'"))?;

        let (version, data) = c32check_decode(body)?;
        let hash160: [u8; 20] = data
            .try_into()
            .map_err(|_| invalid("expected a 20-byte hash"))?;

        Ok(Self { version, hash160 })
    }
}

impl fmt::Display for StacksAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_c32())
    }
}
