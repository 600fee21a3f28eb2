//! Account Identity
//!
//! A private key, its public key and the address for one network scheme.
//! Every constructor except `from_key_pair_unchecked` guarantees
//! `public_key == keygen(private_key)`.

use std::fmt;

use crate::error::{IdentityError, IdentityResult};
use crate::log_debug;
use crate::types::{AccountKeys, Scheme};

use super::address::Address;
use super::derivation::{derive_private_key, derive_public_key};
use super::keys::{PrivateKey, PublicKey};

/// Key pair plus network address
#[derive(Clone)]
pub struct Account {
    private_key: PrivateKey,
    public_key: PublicKey,
    scheme: Scheme,
    address: Address,
}

impl Account {
    /// Derive account `nonce` from raw seed bytes
    pub fn from_seed(seed: &[u8], nonce: u32, scheme: Scheme) -> IdentityResult<Self> {
        let private_key = derive_private_key(seed, nonce)?;
        let account = Self::from_private_key(private_key, scheme)?;
        log_debug!(
            "account",
            "Derived account",
            nonce = nonce,
            scheme = scheme,
            address = account.address,
        );
        Ok(account)
    }

    /// Derive account `nonce` from a seed phrase (its UTF-8 bytes)
    pub fn from_seed_phrase(phrase: &str, nonce: u32, scheme: Scheme) -> IdentityResult<Self> {
        Self::from_seed(phrase.as_bytes(), nonce, scheme)
    }

    /// Import an existing private key.
    ///
    /// Only clamped scalars are accepted: key generation clamps, so an
    /// unclamped key would silently map to the public key of a different scalar.
    pub fn from_private_key(private_key: PrivateKey, scheme: Scheme) -> IdentityResult<Self> {
        if !private_key.is_clamped() {
            return Err(IdentityError::invalid_private_key(
                "Private key is not a clamped Curve25519 scalar",
            ));
        }
        let public_key = derive_public_key(&private_key);
        let address = public_key.to_address(scheme);
        Ok(Self {
            private_key,
            public_key,
            scheme,
            address,
        })
    }

    /// Import a Base58 encoded private key
    pub fn from_private_key_base58(encoded: &str, scheme: Scheme) -> IdentityResult<Self> {
        Self::from_private_key(PrivateKey::from_base58(encoded)?, scheme)
    }

    /// Build an account from an externally supplied key pair without checking
    /// that the public key belongs to the private key. The address follows the
    /// supplied public key. Use `is_consistent` to detect a mismatch.
    pub fn from_key_pair_unchecked(private_key: PrivateKey, public_key: PublicKey, scheme: Scheme) -> Self {
        let address = public_key.to_address(scheme);
        Self {
            private_key,
            public_key,
            scheme,
            address,
        }
    }

    /// True if the public key is the one generated from the private key
    pub fn is_consistent(&self) -> bool {
        derive_public_key(&self.private_key) == self.public_key
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Serializable record, including key material
    pub fn to_keys(&self, nonce: u32, phrase: Option<&str>) -> AccountKeys {
        AccountKeys {
            phrase: phrase.map(str::to_string),
            nonce,
            scheme: self.scheme.to_string(),
            private_key: self.private_key.to_base58(),
            public_key: self.public_key.to_base58(),
            address: self.address.to_string(),
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address: {}", self.address)
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("address", &self.address.as_str())
            .field("scheme", &self.scheme)
            .field("public_key", &self.public_key)
            .field("private_key", &self.private_key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::wallet::address::is_valid_address;

    #[test]
    fn test_from_seed_is_consistent() {
        let account = Account::from_seed(b"test-seed", 0, Scheme::TESTNET).unwrap();
        assert!(account.is_consistent());
        assert!(account.private_key().is_clamped());
        assert!(is_valid_address(account.address().as_str(), Scheme::TESTNET));
        assert_eq!(account.scheme(), Scheme::TESTNET);
    }

    #[test]
    fn test_phrase_and_bytes_agree() {
        let a = Account::from_seed_phrase("test-seed", 2, Scheme::MAINNET).unwrap();
        let b = Account::from_seed("test-seed".as_bytes(), 2, Scheme::MAINNET).unwrap();
        assert_eq!(a.address(), b.address());
        assert_eq!(a.public_key(), b.public_key());
    }

    #[test]
    fn test_private_key_import_roundtrip() {
        let original = Account::from_seed(b"test-seed", 0, Scheme::MAINNET).unwrap();
        let encoded = original.private_key().to_base58();
        let imported = Account::from_private_key_base58(&encoded, Scheme::MAINNET).unwrap();
        assert_eq!(imported.address(), original.address());
        assert_eq!(imported.public_key(), original.public_key());
    }

    #[test]
    fn test_unclamped_import_is_rejected() {
        let mut bytes = *Account::from_seed(b"test-seed", 0, Scheme::MAINNET)
            .unwrap()
            .private_key()
            .as_bytes();
        bytes[0] |= 0x01;

        let err = Account::from_private_key(PrivateKey::from_bytes(bytes), Scheme::MAINNET).unwrap_err();
        assert!(err.is(ErrorCode::InvalidPrivateKey));

        let encoded = PrivateKey::from_bytes(bytes).to_base58();
        let err = Account::from_private_key_base58(&encoded, Scheme::MAINNET).unwrap_err();
        assert!(err.is(ErrorCode::InvalidPrivateKey));
        assert!(!err.to_string().contains(&encoded));
    }

    #[test]
    fn test_same_key_different_scheme() {
        let mainnet = Account::from_seed(b"test-seed", 0, Scheme::MAINNET).unwrap();
        let testnet = Account::from_seed(b"test-seed", 0, Scheme::TESTNET).unwrap();
        assert_eq!(mainnet.public_key(), testnet.public_key());
        assert_ne!(mainnet.address(), testnet.address());
    }

    #[test]
    fn test_unchecked_key_pair_can_diverge() {
        let account = Account::from_seed(b"test-seed", 0, Scheme::MAINNET).unwrap();
        let foreign = PublicKey::from_bytes([1u8; 32]);
        let overridden =
            Account::from_key_pair_unchecked(account.private_key().clone(), foreign, Scheme::MAINNET);
        assert!(!overridden.is_consistent());
        assert_eq!(overridden.public_key(), &foreign);
        assert_ne!(overridden.address(), account.address());

        let matching = Account::from_key_pair_unchecked(
            account.private_key().clone(),
            *account.public_key(),
            Scheme::MAINNET,
        );
        assert!(matching.is_consistent());
    }

    #[test]
    fn test_display_and_debug_hide_private_key() {
        let account = Account::from_seed(b"test-seed", 0, Scheme::MAINNET).unwrap();
        let secret = account.private_key().to_base58();

        let display = account.to_string();
        assert_eq!(display, format!("Address: {}", account.address()));

        let debug = format!("{:?}", account);
        assert!(!debug.contains(&secret));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_to_keys() {
        let account = Account::from_seed(b"test-seed", 4, Scheme::TESTNET).unwrap();
        let keys = account.to_keys(4, Some("test-seed"));
        assert_eq!(keys.scheme, "T");
        assert_eq!(keys.nonce, 4);
        assert_eq!(keys.address, account.address().as_str());
        assert_eq!(keys.phrase.as_deref(), Some("test-seed"));
    }

    #[test]
    fn test_empty_seed() {
        let err = Account::from_seed(b"", 0, Scheme::MAINNET).unwrap_err();
        assert!(err.is(ErrorCode::InvalidSeed));
    }
}
