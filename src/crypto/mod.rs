// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! Hashing, keys and address encoding

pub mod address;
pub mod c32;
pub mod hash;
pub mod keys;

pub use address::StacksAddress;
pub use hash::{hash160, sha256, sha512_256};
pub use keys::StacksPrivateKey;
