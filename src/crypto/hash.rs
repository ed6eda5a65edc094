// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! Digests used by Stacks transactions and addresses

use ring::digest::{digest, SHA256, SHA512_256};
use ripemd::{Digest, Ripemd160};

pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(digest(&SHA256, data).as_ref());
    out
}

/// SHA-512/256, used for transaction ids and sighashes
pub fn sha512_256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(digest(&SHA512_256, data).as_ref());
    out
}

/// RIPEMD-160 of SHA-256. Used for addresses and BNS preorder commitments.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(sha256(data));
    hasher.finalize().into()
}
