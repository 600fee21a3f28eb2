//! Curve25519 Key Generation
//!
//! Public keys are the Montgomery u-coordinate of `k * B`, the same output
//! as X25519 applied to the base point.

use curve25519_dalek::montgomery::MontgomeryPoint;

/// Derive the 32-byte Curve25519 public key for a private scalar.
///
/// The scalar is clamped before multiplication, so already clamped keys
/// map to the same point as their raw bytes.
pub fn public_key_from_private(private_key: &[u8; 32]) -> [u8; 32] {
    MontgomeryPoint::mul_base_clamped(*private_key).to_bytes()
}
