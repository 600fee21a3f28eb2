//! Mnemonic Generation
//!
//! 15-word phrases carrying 160 bits of entropy with a 40-bit checksum.
//!
//! A 165-byte buffer is filled from a CSPRNG, then bytes `[160..165)` are
//! replaced by the first five bytes of `sha256(buffer[..160])`. Read as a
//! big-endian integer, the buffer yields fifteen 11-bit word indexes,
//! least significant group first.
//!
//! SECURITY: The entropy buffer is zeroized after use and `Mnemonic` never
//! prints its phrase through `Debug`.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::crypto::sha256;
use crate::error::{IdentityError, IdentityResult};
use crate::{log_debug, log_error};

use super::wordlist::{Wordlist, PHRASE_WORD_COUNT, WORD_INDEX_MASK};

/// Random bytes hashed into the checksum
pub const ENTROPY_BYTES: usize = 160;
/// Checksum bytes appended after the entropy
pub const CHECKSUM_BYTES: usize = 5;

const BUFFER_BYTES: usize = ENTROPY_BYTES + CHECKSUM_BYTES;
const WORD_BITS: usize = 11;

/// A space-separated seed phrase
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Mnemonic {
    phrase: String,
}

impl Mnemonic {
    /// Accept an existing phrase if every word is in `wordlist`
    pub fn from_phrase(phrase: &str, wordlist: &Wordlist) -> IdentityResult<Self> {
        if !wordlist.check_phrase(phrase) {
            return Err(IdentityError::invalid_input(format!(
                "Phrase must be {} known words separated by single spaces",
                PHRASE_WORD_COUNT
            )));
        }
        Ok(Self {
            phrase: phrase.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.phrase
    }

    /// Seed bytes for key derivation (UTF-8 of the phrase)
    pub fn as_bytes(&self) -> &[u8] {
        self.phrase.as_bytes()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.phrase.split(' ')
    }

    pub fn word_count(&self) -> usize {
        self.words().count()
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("word_count", &self.word_count())
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

/// Produces fresh phrases from a wordlist
#[derive(Debug, Clone, Copy)]
pub struct MnemonicGenerator<'a> {
    wordlist: &'a Wordlist,
}

impl MnemonicGenerator<'static> {
    /// Generator over the process-wide wordlist
    pub fn shared() -> IdentityResult<Self> {
        Ok(Self::new(Wordlist::shared()?))
    }
}

impl<'a> MnemonicGenerator<'a> {
    pub fn new(wordlist: &'a Wordlist) -> Self {
        Self { wordlist }
    }

    /// Generate a phrase from the operating system RNG
    pub fn generate(&self) -> IdentityResult<Mnemonic> {
        self.generate_with_rng(&mut OsRng)
    }

    /// Generate a phrase from a caller-supplied CSPRNG
    pub fn generate_with_rng<R: RngCore + CryptoRng>(&self, rng: &mut R) -> IdentityResult<Mnemonic> {
        let buffer = checksummed_entropy(rng)?;
        let phrase = phrase_from_buffer(&buffer[..], self.wordlist);
        log_debug!("mnemonic", "Generated mnemonic", words = PHRASE_WORD_COUNT);
        Ok(Mnemonic { phrase })
    }
}

/// Fill the 165-byte buffer and stamp the checksum over its first 160 bytes
fn checksummed_entropy<R: RngCore + CryptoRng>(rng: &mut R) -> IdentityResult<Zeroizing<[u8; BUFFER_BYTES]>> {
    let mut buffer = Zeroizing::new([0u8; BUFFER_BYTES]);
    rng.try_fill_bytes(&mut buffer[..]).map_err(|e| {
        log_error!("mnemonic", "Entropy source failed", error = e);
        IdentityError::entropy_unavailable("Secure random source failed").with_details(e.to_string())
    })?;

    let digest = Zeroizing::new(sha256(&buffer[..ENTROPY_BYTES]));
    buffer[ENTROPY_BYTES..].copy_from_slice(&digest[..CHECKSUM_BYTES]);
    Ok(buffer)
}

/// 11-bit group `group` of the buffer read as a big-endian integer,
/// counting groups from the least significant end.
fn word_index(buffer: &[u8], group: usize) -> u16 {
    let start_bit = group * WORD_BITS;
    let byte_offset = start_bit / 8;
    let shift = start_bit % 8;

    // Three bytes always cover 11 bits at any shift below 8
    let byte_at = |offset: usize| -> u32 {
        buffer
            .len()
            .checked_sub(1 + byte_offset + offset)
            .map_or(0, |i| u32::from(buffer[i]))
    };
    let window = byte_at(0) | (byte_at(1) << 8) | (byte_at(2) << 16);

    ((window >> shift) as u16) & WORD_INDEX_MASK
}

fn phrase_from_buffer(buffer: &[u8], wordlist: &Wordlist) -> String {
    (0..PHRASE_WORD_COUNT)
        .map(|group| wordlist.word(word_index(buffer, group)))
        .collect::<Vec<_>>()
        .join(" ")
}
