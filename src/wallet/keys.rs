//! Key Types
//!
//! 32-byte Curve25519 private and public keys with Base58 text forms.
//!
//! SECURITY: `PrivateKey` is zeroized on drop and redacted in `Debug`.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{IdentityError, IdentityResult};
use crate::types::Scheme;

use super::address::Address;

/// Length in bytes of both key types
pub const KEY_LENGTH: usize = 32;

/// Curve25519 private scalar
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; KEY_LENGTH]);

impl PrivateKey {
    /// Wrap raw key bytes as-is. Accounts only accept clamped keys
    /// (see `is_clamped`).
    pub fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> IdentityResult<Self> {
        let array: [u8; KEY_LENGTH] = bytes.try_into().map_err(|_| {
            IdentityError::invalid_private_key(format!(
                "Private key must be {} bytes, got {}",
                KEY_LENGTH,
                bytes.len()
            ))
        })?;
        Ok(Self(array))
    }

    pub fn from_base58(encoded: &str) -> IdentityResult<Self> {
        let decoded = Zeroizing::new(
            bs58::decode(encoded.trim())
                .into_vec()
                .map_err(|_| IdentityError::invalid_private_key("Private key is not valid Base58"))?,
        );
        Self::from_slice(&decoded)
    }

    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }

    /// True if the scalar has the Curve25519 clamping bits set
    pub fn is_clamped(&self) -> bool {
        self.0[0] & 0x07 == 0 && self.0[31] & 0x80 == 0 && self.0[31] & 0x40 == 0x40
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// Curve25519 public key (Montgomery u-coordinate)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; KEY_LENGTH]);

impl PublicKey {
    pub const fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> IdentityResult<Self> {
        let array: [u8; KEY_LENGTH] = bytes
            .try_into()
            .map_err(|_| IdentityError::invalid_public_key_length(bytes.len()))?;
        Ok(Self(array))
    }

    pub fn from_base58(encoded: &str) -> IdentityResult<Self> {
        let decoded = bs58::decode(encoded.trim())
            .into_vec()
            .map_err(|_| IdentityError::invalid_input("Public key is not valid Base58"))?;
        Self::from_slice(&decoded)
    }

    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }

    pub fn to_address(&self, scheme: Scheme) -> Address {
        Address::from_public_key(self, scheme)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_base58())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_private_key_debug_is_redacted() {
        let key = PrivateKey::from_bytes([0xAB; 32]);
        let debug = format!("{:?}", key);
        assert_eq!(debug, "PrivateKey([REDACTED])");
        assert!(!debug.to_lowercase().contains("ab"));
    }

    #[test]
    fn test_private_key_base58() {
        let key = PrivateKey::from_bytes([9u8; 32]);
        let encoded = key.to_base58();
        assert_eq!(PrivateKey::from_base58(&encoded).unwrap(), key);

        let err = PrivateKey::from_base58("0OIl").unwrap_err();
        assert!(err.is(ErrorCode::InvalidPrivateKey));

        let short = bs58::encode([1u8; 31]).into_string();
        let err = PrivateKey::from_base58(&short).unwrap_err();
        assert!(err.is(ErrorCode::InvalidPrivateKey));
        assert!(!err.to_string().contains(&short));
    }

    #[test]
    fn test_is_clamped() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0x40;
        assert!(PrivateKey::from_bytes(bytes).is_clamped());

        bytes[0] = 0x01;
        assert!(!PrivateKey::from_bytes(bytes).is_clamped());

        bytes[0] = 0;
        bytes[31] = 0xC0;
        assert!(!PrivateKey::from_bytes(bytes).is_clamped());
    }

    #[test]
    fn test_public_key_lengths() {
        assert!(PublicKey::from_slice(&[0u8; 32]).is_ok());

        let err = PublicKey::from_slice(&[0u8; 33]).unwrap_err();
        assert!(err.is(ErrorCode::InvalidPublicKeyLength));
    }

    #[test]
    fn test_public_key_display_is_base58() {
        let key = PublicKey::from_bytes([0u8; 32]);
        assert_eq!(key.to_string(), "11111111111111111111111111111111");
        assert_eq!(PublicKey::from_base58(&key.to_string()).unwrap(), key);
    }

    #[test]
    fn test_public_key_to_address() {
        let key = PublicKey::from_bytes([0u8; 32]);
        let address = key.to_address(Scheme::TESTNET);
        assert_eq!(address, Address::from_public_key(&key, Scheme::TESTNET));
        assert_eq!(Address::scheme_of(address.as_str()), Some(Scheme::TESTNET));
    }
}
