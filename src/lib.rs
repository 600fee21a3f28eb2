//! Waves Identity Core
//!
//! Deterministic account identities from seed phrases.
//!
//! # Architecture
//!
//! This crate provides:
//! - **wallet**: mnemonic generation, key derivation, address encoding
//! - **crypto**: hash primitives and Curve25519 key generation
//! - **utils**: configuration and redacting structured logs
//!
//! # Security
//!
//! Private keys, seed phrases and entropy buffers are zeroized when dropped
//! and never appear in `Debug` output, logs or error messages.
//!
//! # Example
//!
//! ```rust,ignore
//! use waves_identity::{Account, Scheme, wallet};
//!
//! let phrase = wallet::generate_seed_phrase()?;
//! let account = Account::from_seed_phrase(phrase.as_str(), 0, Scheme::MAINNET)?;
//! assert!(wallet::validate_address(account.address().as_str(), Scheme::MAINNET));
//! ```

pub mod crypto;
pub mod error;
pub mod types;
pub mod utils;
pub mod wallet;

pub use error::{ErrorCode, IdentityError, IdentityResult};
pub use types::*;

pub use wallet::{
    create_new_account,
    derive_key_pair,
    derive_private_key,
    derive_public_key,
    encode_address,
    generate_seed_phrase,
    is_valid_address,
    validate_address,
    Account,
    Address,
    Mnemonic,
    MnemonicGenerator,
    PrivateKey,
    PublicKey,
    Wordlist,
};

pub use crypto::{secure_hash, sha256};
