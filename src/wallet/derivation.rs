//! Key Derivation
//!
//! Seed + nonce to Curve25519 key pair:
//!
//! ```text
//! account_seed = secure_hash(nonce_be32 || seed)
//! private_key  = clamp(sha256(account_seed))
//! public_key   = curve25519_keygen(private_key)
//! ```
//!
//! SECURITY: Intermediate buffers are zeroized on drop.

use zeroize::Zeroizing;

use crate::crypto::{public_key_from_private, secure_hash, sha256};
use crate::error::{IdentityError, IdentityResult};

use super::keys::{PrivateKey, PublicKey, KEY_LENGTH};

/// Derive the private key for account `nonce` of `seed`.
///
/// Empty seeds are rejected: they would yield a fixed, publicly known key.
pub fn derive_private_key(seed: &[u8], nonce: u32) -> IdentityResult<PrivateKey> {
    if seed.is_empty() {
        return Err(IdentityError::invalid_seed("Seed must not be empty"));
    }

    let mut buffer = Zeroizing::new(Vec::with_capacity(4 + seed.len()));
    buffer.extend_from_slice(&nonce.to_be_bytes());
    buffer.extend_from_slice(seed);

    let account_seed = Zeroizing::new(secure_hash(&buffer[..]));
    let mut hashed_seed = Zeroizing::new(sha256(&account_seed[..]));
    clamp(&mut hashed_seed);

    Ok(PrivateKey::from_bytes(*hashed_seed))
}

/// Public key for a private key
pub fn derive_public_key(private_key: &PrivateKey) -> PublicKey {
    PublicKey::from_bytes(public_key_from_private(private_key.as_bytes()))
}

/// Derive both halves of the key pair
pub fn derive_key_pair(seed: &[u8], nonce: u32) -> IdentityResult<(PrivateKey, PublicKey)> {
    let private_key = derive_private_key(seed, nonce)?;
    let public_key = derive_public_key(&private_key);
    Ok((private_key, public_key))
}

/// Force the Curve25519 scalar structure: multiple of the cofactor 8,
/// top bit clear, bit 254 set.
fn clamp(scalar: &mut [u8; KEY_LENGTH]) {
    scalar[0] &= 0xF8;
    scalar[31] &= 0x7F;
    scalar[31] |= 0x40;
}
