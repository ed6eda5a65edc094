// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! Network selection
//!
//! There is no default network: every caller names the network it broadcasts
//! to, so a missing selection can never turn into a mainnet transaction.

use crate::constants::{
    API_URL_ENV, BNS_CONTRACT_ADDRESS, BNS_CONTRACT_ADDRESS_TESTNET, DEVNET_API_URL,
    MAINNET_API_URL, NETWORK_ENV, TESTNET_API_URL,
};
use crate::error::{BnsError, BnsResult};
use std::fmt;
use std::str::FromStr;

/// Single-sig (P2PKH) address versions
pub const ADDRESS_VERSION_MAINNET_SINGLESIG: u8 = 22;
pub const ADDRESS_VERSION_TESTNET_SINGLESIG: u8 = 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkKind {
    Mainnet,
    Testnet,
    Devnet,
}

impl NetworkKind {
    pub fn is_mainnet(self) -> bool {
        matches!(self, NetworkKind::Mainnet)
    }

    pub fn default_api_url(self) -> &'static str {
        match self {
            NetworkKind::Mainnet => MAINNET_API_URL,
            NetworkKind::Testnet => TESTNET_API_URL,
            NetworkKind::Devnet => DEVNET_API_URL,
        }
    }
}

impl FromStr for NetworkKind {
    type Err = BnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(NetworkKind::Mainnet),
            "testnet" | "test" => Ok(NetworkKind::Testnet),
            "devnet" | "dev" | "mocknet" => Ok(NetworkKind::Devnet),
            other => Err(BnsError::UnknownNetwork(other.to_string())),
        }
    }
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NetworkKind::Mainnet => "mainnet",
            NetworkKind::Testnet => "testnet",
            NetworkKind::Devnet => "devnet",
        };
        f.write_str(name)
    }
}

/// A Stacks network and the node API used to reach it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StacksNetwork {
    pub kind: NetworkKind,
    pub core_api_url: String,
}

impl StacksNetwork {
    pub fn new(kind: NetworkKind) -> Self {
        Self {
            kind,
            core_api_url: kind.default_api_url().to_string(),
        }
    }

    pub fn mainnet() -> Self {
        Self::new(NetworkKind::Mainnet)
    }

    pub fn testnet() -> Self {
        Self::new(NetworkKind::Testnet)
    }

    pub fn devnet() -> Self {
        Self::new(NetworkKind::Devnet)
    }

    /// Point the network at a different node API
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.core_api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build the network from an explicit selection and optional API override.
    ///
    /// `None` is an error rather than a fallback to mainnet.
    pub fn select(kind: Option<&str>, api_url: Option<&str>) -> BnsResult<Self> {
        let kind: NetworkKind = kind
            .filter(|k| !k.trim().is_empty())
            .ok_or(BnsError::NetworkNotSelected)?
            .parse()?;

        let network = Self::new(kind);
        Ok(match api_url.filter(|u| !u.trim().is_empty()) {
            Some(url) => network.with_api_url(url),
            None => network,
        })
    }

    /// Read `BNS_NETWORK` and `BNS_API_URL` from the environment
    pub fn from_env() -> BnsResult<Self> {
        let kind = std::env::var(NETWORK_ENV).ok();
        let api_url = std::env::var(API_URL_ENV).ok();
        Self::select(kind.as_deref(), api_url.as_deref())
    }

    pub fn is_mainnet(&self) -> bool {
        self.kind.is_mainnet()
    }

    /// Transaction version byte
    pub fn transaction_version(&self) -> u8 {
        if self.is_mainnet() {
            0x00
        } else {
            0x80
        }
    }

    pub fn chain_id(&self) -> u32 {
        if self.is_mainnet() {
            0x0000_0001
        } else {
            0x8000_0000
        }
    }

    /// Address version for single-sig standard principals
    pub fn address_version(&self) -> u8 {
        if self.is_mainnet() {
            ADDRESS_VERSION_MAINNET_SINGLESIG
        } else {
            ADDRESS_VERSION_TESTNET_SINGLESIG
        }
    }

    pub fn bns_contract_address(&self) -> &'static str {
        if self.is_mainnet() {
            BNS_CONTRACT_ADDRESS
        } else {
            BNS_CONTRACT_ADDRESS_TESTNET
        }
    }

    pub fn broadcast_url(&self) -> String {
        format!("{}/v2/transactions", self.core_api_url)
    }

    pub fn account_url(&self, address: &str) -> String {
        format!("{}/v2/accounts/{}?proof=0", self.core_api_url, address)
    }

    pub fn transfer_fee_url(&self) -> String {
        format!("{}/v2/fees/transfer", self.core_api_url)
    }
}
