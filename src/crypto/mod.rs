//! Cryptographic primitives
//!
//! Thin wrappers over the hash and curve crates:
//! - SHA-256, Blake2b-256, Keccak-256 and the composite `secure_hash`
//! - Curve25519 public key generation

pub mod curve25519;
pub mod hash;

pub use curve25519::public_key_from_private;
pub use hash::{blake2b256, keccak256, secure_hash, sha256};
