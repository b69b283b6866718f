//! Token registry
//!
//! Merges the built-in token list with user-added custom tokens persisted
//! under a single storage key. Custom entries win on address collision.
//!
//! Every storage failure is absorbed here: a blob that cannot be read or
//! parsed counts as "no custom tokens", and a failed write is logged and
//! leaves the previously persisted value in place. Callers never see an
//! error from the registry itself.

use crate::core::tokens::defaults::default_tokens;
use crate::domain::TokenInfo;
use crate::infrastructure::platform::PlatformStorage;
use crate::shared::constants::CUSTOM_TOKENS_STORAGE_KEY;
use crate::shared::error::WalletError;

pub struct TokenRegistry<'a> {
    storage: &'a dyn PlatformStorage,
    storage_key: String,
}

impl<'a> TokenRegistry<'a> {
    pub fn new(storage: &'a dyn PlatformStorage) -> Self {
        Self::with_key(storage, CUSTOM_TOKENS_STORAGE_KEY)
    }

    pub fn with_key(storage: &'a dyn PlatformStorage, storage_key: impl Into<String>) -> Self {
        Self {
            storage,
            storage_key: storage_key.into(),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Persisted custom tokens in insertion order
    pub fn load_custom(&self) -> Vec<TokenInfo> {
        let raw = match self.storage.retrieve(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Failed to read custom tokens from '{}': {}", self.storage_key, e);
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Vec<TokenInfo>>(&raw) {
            Ok(tokens) => tokens,
            Err(e) => {
                log::warn!(
                    "Discarding unreadable custom token blob under '{}': {}",
                    self.storage_key,
                    WalletError::from(e)
                );
                Vec::new()
            }
        }
    }

    /// Replace the persisted custom tokens
    pub fn save_custom(&self, tokens: &[TokenInfo]) {
        if let Err(e) = self.try_save_custom(tokens) {
            log::error!("Failed to save custom tokens to '{}': {}", self.storage_key, e);
        }
    }

    fn try_save_custom(&self, tokens: &[TokenInfo]) -> Result<(), WalletError> {
        let blob = serde_json::to_vec(tokens)?;
        self.storage.store(&self.storage_key, &blob)
    }

    /// Effective token list: non-overridden defaults, then all customs in stored order
    pub fn get_all_tracked(&self) -> Vec<TokenInfo> {
        let custom = self.load_custom();
        let mut tracked: Vec<TokenInfo> = default_tokens()
            .iter()
            .filter(|d| !custom.iter().any(|c| c.address == d.address))
            .cloned()
            .collect();
        tracked.extend(custom);
        tracked
    }

    /// Append a custom token unless one with the same address is already stored.
    ///
    /// Only the custom list is checked for collisions. The returned list is the
    /// plain defaults-then-customs concatenation; use [`Self::get_all_tracked`]
    /// for the deduplicated view.
    pub fn add_custom(&self, token: TokenInfo) -> Vec<TokenInfo> {
        let mut custom = self.load_custom();
        if custom.iter().any(|c| c.address == token.address) {
            log::debug!("Custom token {} already tracked", token.address);
            return with_defaults(custom);
        }

        log::debug!("Adding custom token {} ({})", token.symbol, token.address);
        custom.push(token);
        self.save_custom(&custom);
        with_defaults(custom)
    }

    /// [`Self::add_custom`] after validating the token
    pub fn add_custom_checked(&self, token: TokenInfo) -> Result<Vec<TokenInfo>, WalletError> {
        token.validate()?;
        Ok(self.add_custom(token))
    }

    /// Drop every custom token with this address
    pub fn remove_custom(&self, address: &str) -> Vec<TokenInfo> {
        let custom: Vec<TokenInfo> = self
            .load_custom()
            .into_iter()
            .filter(|c| c.address != address)
            .collect();
        log::debug!("Removing custom token {}", address);
        self.save_custom(&custom);
        with_defaults(custom)
    }

    /// Forget all custom tokens
    pub fn clear_custom(&self) {
        if let Err(e) = self.storage.delete(&self.storage_key) {
            log::error!("Failed to clear custom tokens under '{}': {}", self.storage_key, e);
        }
    }

    pub fn find_tracked(&self, address: &str) -> Option<TokenInfo> {
        self.get_all_tracked()
            .into_iter()
            .find(|t| t.address == address)
    }

    pub fn is_custom(&self, address: &str) -> bool {
        self.load_custom().iter().any(|c| c.address == address)
    }
}

fn with_defaults(custom: Vec<TokenInfo>) -> Vec<TokenInfo> {
    let mut tokens = default_tokens().to_vec();
    tokens.extend(custom);
    tokens
}
