//! Wallet Module
//!
//! Mnemonic generation, key derivation, address encoding and the account
//! identity built from them.

mod account;
mod address;
mod derivation;
mod keys;
mod mnemonic;
mod wordlist;

pub use account::*;
pub use address::*;
pub use derivation::*;
pub use keys::*;
pub use mnemonic::*;
pub use wordlist::*;

use crate::error::IdentityResult;
use crate::types::Scheme;

/// Generate a fresh 15-word phrase from the shared wordlist
pub fn generate_seed_phrase() -> IdentityResult<Mnemonic> {
    MnemonicGenerator::shared()?.generate()
}

/// Generate a phrase and derive its account `nonce`
pub fn create_new_account(nonce: u32, scheme: Scheme) -> IdentityResult<(Mnemonic, Account)> {
    let mnemonic = generate_seed_phrase()?;
    let account = Account::from_seed(mnemonic.as_bytes(), nonce, scheme)?;
    Ok((mnemonic, account))
}

/// Validate an address for a network scheme
pub fn validate_address(address: &str, scheme: Scheme) -> bool {
    is_valid_address(address, scheme)
}
