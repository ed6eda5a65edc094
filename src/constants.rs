// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

/// Address of the BNS boot contract on mainnet
pub const BNS_CONTRACT_ADDRESS: &str = "SP000000000000000000002Q6VF78";

/// Address of the BNS boot contract on testnet and devnet
pub const BNS_CONTRACT_ADDRESS_TESTNET: &str = "ST000000000000000000002AMW42H";

/// Name of the BNS boot contract
pub const BNS_CONTRACT_NAME: &str = "bns";

/// Default Stacks node API endpoints
pub const MAINNET_API_URL: &str = "https://api.mainnet.hiro.so";
pub const TESTNET_API_URL: &str = "https://api.testnet.hiro.so";
pub const DEVNET_API_URL: &str = "http://localhost:3999";

/// Timeout applied to every node API request
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Environment variables read by the `bns` binary
pub const NETWORK_ENV: &str = "BNS_NETWORK";
pub const API_URL_ENV: &str = "BNS_API_URL";
pub const PRIVATE_KEY_ENV: &str = "BNS_NAME_KEY";
pub const NAME_ENV: &str = "BNS_NAME";
pub const RECIPIENT_ENV: &str = "TRANSFER_ADDR";

/// Profile location used by the default zonefile template
pub const DEFAULT_PROFILE_URL: &str =
    "https://gaia.blockstack.org/hub/1G8XTwZkUzu7DJYDW4oA4JX5shnW8LcpC2/profile.json";

/// Zonefile TTL used by the default zonefile template
pub const DEFAULT_ZONEFILE_TTL: u32 = 3600;
