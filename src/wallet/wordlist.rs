//! Mnemonic Wordlist
//!
//! A fixed list of exactly 2048 words. The process-wide instance is loaded
//! at most once, on first use, and shared read-only afterwards.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{IdentityError, IdentityResult};
use crate::utils::config::{get_identity_config, WordlistSource};
use crate::{log_error, log_info};

/// Number of entries every wordlist must have
pub const WORDLIST_SIZE: usize = 2048;

/// Mask selecting the low 11 bits of a word index
pub const WORD_INDEX_MASK: u16 = 0b0000_0111_1111_1111;

/// Number of words in a generated phrase
pub const PHRASE_WORD_COUNT: usize = 15;

static SHARED_WORDLIST: OnceLock<IdentityResult<Wordlist>> = OnceLock::new();

/// On-disk wordlist format
#[derive(Deserialize)]
struct WordlistFile {
    words: Vec<String>,
}

/// Ordered list of 2048 unique words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
    positions: HashMap<String, u16>,
}

impl Wordlist {
    /// The English list shipped with the `bip39` crate
    pub fn builtin() -> Self {
        let words = bip39::Language::English
            .word_list()
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>();
        let positions = index_words(&words);
        Self { words, positions }
    }

    /// Build a wordlist, rejecting anything that is not 2048 unique words
    pub fn from_words(words: Vec<String>) -> IdentityResult<Self> {
        if words.len() != WORDLIST_SIZE {
            return Err(IdentityError::resource_unavailable("Wordlist has wrong size")
                .with_details(format!("expected {} words, found {}", WORDLIST_SIZE, words.len())));
        }

        if let Some(bad) = words
            .iter()
            .position(|w| w.is_empty() || w.chars().any(char::is_whitespace))
        {
            return Err(IdentityError::resource_unavailable("Wordlist contains a malformed entry")
                .with_details(format!("entry {}", bad)));
        }

        let positions = index_words(&words);
        if positions.len() != WORDLIST_SIZE {
            return Err(IdentityError::resource_unavailable("Wordlist contains duplicate words"));
        }

        Ok(Self { words, positions })
    }

    /// Parse a `{"words": [...]}` document
    pub fn from_json_str(json: &str) -> IdentityResult<Self> {
        let file: WordlistFile = serde_json::from_str(json).map_err(|e| {
            IdentityError::resource_unavailable("Wordlist is not valid JSON").with_details(e.to_string())
        })?;
        Self::from_words(file.words)
    }

    /// Read and parse a JSON wordlist file
    pub fn from_json_file(path: &Path) -> IdentityResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            IdentityError::resource_unavailable(format!("Cannot read wordlist {}", path.display()))
                .with_details(e.to_string())
        })?;
        Self::from_json_str(&json)
    }

    pub fn load(source: &WordlistSource) -> IdentityResult<Self> {
        match source {
            WordlistSource::Builtin => Ok(Self::builtin()),
            WordlistSource::JsonFile(path) => Self::from_json_file(path),
        }
    }

    /// The process-wide wordlist, loaded from the configured source on first call.
    ///
    /// Concurrent first callers block until the single load finishes. A failed
    /// load is remembered and reported to every later caller.
    pub fn shared() -> IdentityResult<&'static Wordlist> {
        SHARED_WORDLIST
            .get_or_init(|| {
                let source = get_identity_config().wordlist_source();
                let source_name = match &source {
                    WordlistSource::Builtin => "builtin".to_string(),
                    WordlistSource::JsonFile(path) => path.display().to_string(),
                };
                let loaded = Wordlist::load(&source);
                match &loaded {
                    Ok(list) => log_info!("wordlist", "Loaded wordlist", source = source_name, words = list.len()),
                    Err(e) => log_error!("wordlist", "Failed to load wordlist", source = source_name, error = e),
                }
                loaded
            })
            .as_ref()
            .map_err(|e| e.clone())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at an 11-bit index. Higher bits are masked off.
    pub fn word(&self, index: u16) -> &str {
        &self.words[usize::from(index & WORD_INDEX_MASK)]
    }

    pub fn position(&self, word: &str) -> Option<u16> {
        self.positions.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.positions.contains_key(word)
    }

    /// True if `phrase` is 15 single-space separated words from this list
    pub fn check_phrase(&self, phrase: &str) -> bool {
        let words: Vec<&str> = phrase.split(' ').collect();
        words.len() == PHRASE_WORD_COUNT && words.iter().all(|w| self.contains(w))
    }
}

fn index_words(words: &[String]) -> HashMap<String, u16> {
    words
        .iter()
        .enumerate()
        .map(|(i, w)| (w.clone(), i as u16))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic_words() -> Vec<String> {
        (0..WORDLIST_SIZE).map(|i| format!("w{:04}", i)).collect()
    }

    #[test]
    fn test_builtin_list() {
        let list = Wordlist::builtin();
        assert_eq!(list.len(), WORDLIST_SIZE);
        assert_eq!(list.word(0), "abandon");
        assert_eq!(list.word(2047), "zoo");
        assert_eq!(list.position("ability"), Some(1));
    }

    #[test]
    fn test_word_index_is_masked() {
        let list = Wordlist::builtin();
        assert_eq!(list.word(2048), "abandon");
        assert_eq!(list.word(u16::MAX), "zoo");
    }

    #[test]
    fn test_from_json_str() {
        let json = serde_json::json!({ "words": synthetic_words() }).to_string();
        let list = Wordlist::from_json_str(&json).unwrap();
        assert_eq!(list.word(5), "w0005");
        assert!(list.contains("w2047"));
        assert!(!list.contains("w2048"));
    }

    #[test]
    fn test_rejects_wrong_size() {
        let json = r#"{"words": ["one", "two"]}"#;
        let err = Wordlist::from_json_str(json).unwrap_err();
        assert!(err.is(crate::error::ErrorCode::ResourceUnavailable));
        assert!(err.details.unwrap().contains("found 2"));
    }

    #[test]
    fn test_rejects_corrupt_json() {
        let err = Wordlist::from_json_str("{\"words\": [").unwrap_err();
        assert!(err.is(crate::error::ErrorCode::ResourceUnavailable));

        let err = Wordlist::from_json_str("{\"list\": []}").unwrap_err();
        assert!(err.is(crate::error::ErrorCode::ResourceUnavailable));
    }

    #[test]
    fn test_rejects_duplicates_and_blank_entries() {
        let mut words = synthetic_words();
        words[10] = "w0000".to_string();
        assert!(Wordlist::from_words(words).is_err());

        let mut words = synthetic_words();
        words[3] = "two words".to_string();
        assert!(Wordlist::from_words(words).is_err());
    }

    #[test]
    fn test_missing_file_is_resource_unavailable() {
        let err = Wordlist::from_json_file(Path::new("/nonexistent/SeedWords.json")).unwrap_err();
        assert!(err.is(crate::error::ErrorCode::ResourceUnavailable));
    }

    #[test]
    fn test_check_phrase() {
        let list = Wordlist::builtin();
        let phrase = "manage manual recall harvest series desert melt police rose hollow moral pledge kitten position add";
        assert!(list.check_phrase(phrase));
        assert!(!list.check_phrase("manage manual recall"));
        assert!(!list.check_phrase(&phrase.replace("kitten", "kittens")));
        assert!(!list.check_phrase(&phrase.replace(' ', "  ")));
    }

    #[test]
    fn test_shared_is_loaded_once() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| Wordlist::shared().map(|l| l as *const Wordlist as usize)))
            .collect();
        let addrs: Vec<usize> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect();
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(Wordlist::shared().unwrap().len(), WORDLIST_SIZE);
    }
}
