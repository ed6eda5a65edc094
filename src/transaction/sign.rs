// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! Single-sig transaction signing

use super::{StacksTransaction, AUTH_TYPE_STANDARD};
use crate::crypto::{sha512_256, StacksPrivateKey};
use crate::error::{BnsError, BnsResult};

/// Txid of the transaction with its spending condition cleared
pub fn initial_sighash(tx: &StacksTransaction) -> BnsResult<[u8; 32]> {
    let mut cleared = tx.clone();
    cleared.auth = tx.auth.cleared();
    cleared.txid_bytes()
}

/// Digest that is actually signed: sighash, auth type, fee and nonce
pub fn presign_sighash(sighash: &[u8; 32], auth_type: u8, fee: u64, nonce: u64) -> [u8; 32] {
    let mut data = Vec::with_capacity(32 + 1 + 8 + 8);
    data.extend_from_slice(sighash);
    data.push(auth_type);
    data.extend_from_slice(&fee.to_be_bytes());
    data.extend_from_slice(&nonce.to_be_bytes());
    sha512_256(&data)
}

/// Sign `tx` in place with the origin key.
///
/// The spending condition must already carry its final nonce and fee.
pub fn sign_transaction(tx: &mut StacksTransaction, key: &StacksPrivateKey) -> BnsResult<()> {
    if tx.auth.signer != key.public_key_hash() {
        return Err(BnsError::InvalidPrivateKey(
            "key does not match the transaction signer".to_string(),
        ));
    }

    let initial = initial_sighash(tx)?;
    let presign = presign_sighash(&initial, AUTH_TYPE_STANDARD, tx.auth.fee, tx.auth.nonce);
    tx.auth.signature = key.sign_recoverable(&presign)?;

    Ok(())
}
