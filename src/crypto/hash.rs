//! Hash Primitives
//!
//! `secure_hash` is the composite digest used for both seed hardening and
//! address hashing: Keccak-256 over Blake2b-256.

use blake2::digest::consts::U32;
use blake2::Blake2b;
use sha2::{Digest, Sha256};
use sha3::Keccak256;

/// Blake2b with a 256-bit output (not a truncated Blake2b-512)
type Blake2b256 = Blake2b<U32>;

/// SHA-256 digest
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Blake2b-256 digest
pub fn blake2b256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Keccak-256 digest (original Keccak padding, not SHA3-256)
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Composite digest: `keccak256(blake2b256(data))`
pub fn secure_hash(data: &[u8]) -> [u8; 32] {
    keccak256(&blake2b256(data))
}
