//! Address Encoding and Validation
//!
//! Address layout before Base58 (26 bytes):
//!
//! ```text
//! [version=1][scheme][secure_hash(public_key)[..20]][secure_hash(payload)[..4]]
//! ```
//!
//! Validation is a predicate: malformed input of any kind is simply invalid,
//! with no indication of which check failed.

use serde::{Deserialize, Serialize};
use std::fmt;
use subtle::ConstantTimeEq;

use crate::crypto::secure_hash;
use crate::error::{IdentityError, IdentityResult};
use crate::types::Scheme;

use super::keys::{PublicKey, KEY_LENGTH};

/// Fixed address format version
pub const ADDRESS_VERSION: u8 = 1;
/// Raw address length before Base58
pub const ADDRESS_LENGTH: usize = 26;

const PUBLIC_KEY_HASH_LENGTH: usize = 20;
const CHECKSUM_LENGTH: usize = 4;
const PAYLOAD_LENGTH: usize = ADDRESS_LENGTH - CHECKSUM_LENGTH;

/// A Base58 address string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Address of a public key on `scheme`
    pub fn from_public_key(public_key: &PublicKey, scheme: Scheme) -> Self {
        Address(bs58::encode(raw_address(public_key.as_bytes(), scheme)).into_string())
    }

    /// Accept `text` only if it is a valid address for `scheme`
    pub fn parse(text: &str, scheme: Scheme) -> IdentityResult<Self> {
        if is_valid_address(text, scheme) {
            Ok(Address(text.to_string()))
        } else {
            Err(IdentityError::invalid_address())
        }
    }

    /// Scheme embedded in a well-formed address
    pub fn scheme_of(text: &str) -> Option<Scheme> {
        decode_checked(text).map(|raw| Scheme::new(raw[1]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encode a raw 32-byte public key as an address
pub fn encode_address(public_key: &[u8], scheme: Scheme) -> IdentityResult<Address> {
    let key = PublicKey::from_slice(public_key)?;
    Ok(Address::from_public_key(&key, scheme))
}

/// True if `address` decodes to a well-formed, checksummed address for `scheme`
pub fn is_valid_address(address: &str, scheme: Scheme) -> bool {
    decode_checked(address).is_some_and(|raw| raw[1] == scheme.byte())
}

fn raw_address(public_key: &[u8; KEY_LENGTH], scheme: Scheme) -> [u8; ADDRESS_LENGTH] {
    let mut raw = [0u8; ADDRESS_LENGTH];
    raw[0] = ADDRESS_VERSION;
    raw[1] = scheme.byte();
    raw[2..PAYLOAD_LENGTH].copy_from_slice(&secure_hash(public_key)[..PUBLIC_KEY_HASH_LENGTH]);

    let checksum = secure_hash(&raw[..PAYLOAD_LENGTH]);
    raw[PAYLOAD_LENGTH..].copy_from_slice(&checksum[..CHECKSUM_LENGTH]);
    raw
}

/// Decode and check length, version and checksum. The scheme is left to the caller.
fn decode_checked(address: &str) -> Option<[u8; ADDRESS_LENGTH]> {
    let decoded = bs58::decode(address).into_vec().ok()?;
    let raw: [u8; ADDRESS_LENGTH] = decoded.as_slice().try_into().ok()?;

    if raw[0] != ADDRESS_VERSION {
        return None;
    }

    let expected = secure_hash(&raw[..PAYLOAD_LENGTH]);
    let matches: bool = raw[PAYLOAD_LENGTH..]
        .ct_eq(&expected[..CHECKSUM_LENGTH])
        .into();

    matches.then_some(raw)
}
