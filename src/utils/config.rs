//! Identity Configuration Manager
//!
//! Process-wide settings for the identity core:
//! - Wordlist source (built-in English list or a JSON file)
//! - Default network scheme
//! - Debug logging
//!
//! Settings are read from the environment on first access and may be
//! updated at runtime. The shared wordlist snapshots its source on first
//! use and is never reloaded.

use std::env;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::types::Scheme;
use crate::utils::logging;

/// Environment variable naming a JSON wordlist file
pub const WORDLIST_ENV: &str = "WAVES_IDENTITY_WORDLIST";
/// Environment variable holding the default scheme character
pub const SCHEME_ENV: &str = "WAVES_IDENTITY_SCHEME";
/// Environment variable enabling debug logging
pub const DEBUG_ENV: &str = "WAVES_IDENTITY_DEBUG";

/// Where the mnemonic wordlist is loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistSource {
    /// English list compiled into the binary
    Builtin,
    /// JSON file of the form `{"words": [...]}`
    JsonFile(PathBuf),
}

/// Identity settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentitySettings {
    pub wordlist: WordlistSource,
    /// Scheme used when callers do not name one
    pub default_scheme: Scheme,
    pub debug_logging: bool,
}

impl Default for IdentitySettings {
    fn default() -> Self {
        Self {
            wordlist: WordlistSource::Builtin,
            default_scheme: Scheme::MAINNET,
            debug_logging: false,
        }
    }
}

impl IdentitySettings {
    /// Build settings from the process environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(path) = lookup(WORDLIST_ENV).filter(|p| !p.trim().is_empty()) {
            settings.wordlist = WordlistSource::JsonFile(PathBuf::from(path.trim()));
        }

        if let Some(raw) = lookup(SCHEME_ENV) {
            match raw.parse::<Scheme>() {
                Ok(scheme) => settings.default_scheme = scheme,
                Err(_) => crate::log_warn!(
                    "config",
                    "Ignoring unrecognized scheme",
                    variable = SCHEME_ENV,
                    value = raw,
                ),
            }
        }

        if let Some(raw) = lookup(DEBUG_ENV) {
            settings.debug_logging = matches!(raw.trim(), "1" | "true" | "TRUE" | "yes");
        }

        settings
    }

    /// Validate settings consistency
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if let WordlistSource::JsonFile(path) = &self.wordlist {
            if !path.exists() {
                warnings.push(format!(
                    "Warning: Wordlist file {} does not exist",
                    path.display()
                ));
            }
        }

        if !self.default_scheme.byte().is_ascii_alphanumeric() {
            warnings.push(format!(
                "Warning: Default scheme byte 0x{:02x} is not alphanumeric",
                self.default_scheme.byte()
            ));
        }

        warnings
    }
}

/// Global identity configuration manager
pub struct IdentityConfig {
    config: RwLock<IdentitySettings>,
}

impl IdentityConfig {
    /// Create a configuration with explicit settings. Only the global
    /// instance drives the process-wide debug flag.
    pub fn new(settings: IdentitySettings) -> Self {
        Self {
            config: RwLock::new(settings),
        }
    }

    /// Create a configuration from the environment
    pub fn from_env() -> Self {
        Self::new(IdentitySettings::from_env())
    }

    /// Get current settings
    pub fn settings(&self) -> IdentitySettings {
        self.config
            .read()
            .map(|c| c.clone())
            .unwrap_or_default()
    }

    pub fn wordlist_source(&self) -> WordlistSource {
        self.config
            .read()
            .map(|c| c.wordlist.clone())
            .unwrap_or(WordlistSource::Builtin)
    }

    pub fn default_scheme(&self) -> Scheme {
        self.config
            .read()
            .map(|c| c.default_scheme)
            .unwrap_or(Scheme::MAINNET)
    }

    /// Update settings, returning any consistency warnings
    pub fn update<F>(&self, updater: F) -> Vec<String>
    where
        F: FnOnce(&mut IdentitySettings),
    {
        let Ok(mut config) = self.config.write() else {
            return vec!["Failed to acquire config lock".to_string()];
        };
        updater(&mut config);
        if self.is_global() {
            apply_debug_logging(config.debug_logging);
        }
        config.validate()
    }

    fn is_global(&self) -> bool {
        IDENTITY_CONFIG
            .get()
            .is_some_and(|global| std::ptr::eq(global, self))
    }
}

fn apply_debug_logging(enabled: bool) {
    if enabled {
        logging::enable_debug();
    } else {
        logging::disable_debug();
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self::new(IdentitySettings::default())
    }
}

/// Global identity configuration instance
static IDENTITY_CONFIG: std::sync::OnceLock<IdentityConfig> = std::sync::OnceLock::new();

/// Get the global identity configuration, reading the environment on first use
pub fn get_identity_config() -> &'static IdentityConfig {
    IDENTITY_CONFIG.get_or_init(|| {
        let config = IdentityConfig::from_env();
        if config.settings().debug_logging {
            logging::enable_debug();
        }
        config
    })
}

/// Default scheme from the global configuration
pub fn default_scheme() -> Scheme {
    get_identity_config().default_scheme()
}
