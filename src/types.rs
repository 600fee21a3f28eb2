//! Shared types
//!
//! Network scheme identifiers and the serializable account record used by
//! the command-line tool.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{IdentityError, IdentityResult};

// =============================================================================
// Network Scheme
// =============================================================================

/// Single byte identifying the network an address belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scheme(u8);

impl Scheme {
    /// Waves mainnet
    pub const MAINNET: Scheme = Scheme(b'W');
    /// Waves testnet
    pub const TESTNET: Scheme = Scheme(b'T');
    /// Waves stagenet
    pub const STAGENET: Scheme = Scheme(b'S');

    pub const fn new(byte: u8) -> Self {
        Scheme(byte)
    }

    pub const fn byte(self) -> u8 {
        self.0
    }

    /// Build a scheme from a single ASCII character
    pub fn from_char(c: char) -> IdentityResult<Self> {
        if !c.is_ascii() {
            return Err(IdentityError::invalid_input(format!(
                "Scheme must be a single ASCII character, got '{}'",
                c
            )));
        }
        Ok(Scheme(c as u8))
    }

    pub fn name(self) -> &'static str {
        match self.0 {
            b'W' => "mainnet",
            b'T' => "testnet",
            b'S' => "stagenet",
            _ => "custom",
        }
    }
}

impl Default for Scheme {
    fn default() -> Self {
        Scheme::MAINNET
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 as char)
    }
}

impl FromStr for Scheme {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "mainnet" => return Ok(Scheme::MAINNET),
            "testnet" => return Ok(Scheme::TESTNET),
            "stagenet" => return Ok(Scheme::STAGENET),
            _ => {}
        }

        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Scheme::from_char(c),
            _ => Err(IdentityError::invalid_input(format!(
                "Unrecognized scheme '{}'",
                trimmed
            ))),
        }
    }
}

// =============================================================================
// Account Record
// =============================================================================

/// Serializable view of a derived account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountKeys {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phrase: Option<String>,
    pub nonce: u32,
    pub scheme: String,
    /// Base58
    pub private_key: String,
    /// Base58
    pub public_key: String,
    pub address: String,
}
