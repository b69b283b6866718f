//! Environment-driven configuration for the token registry

use std::env;
use std::path::PathBuf;

use dotenv::dotenv;
use serde::{Deserialize, Serialize};

use crate::infrastructure::platform::{validate_storage_key, FileStorage};
use crate::shared::constants::{
    CUSTOM_TOKENS_STORAGE_KEY, DEFAULT_BALANCE_DECIMALS, ENV_BALANCE_DECIMALS,
    ENV_CUSTOM_TOKENS_KEY, ENV_STORAGE_DIR,
};
use crate::shared::error::WalletError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub storage_dir: PathBuf,
    pub custom_tokens_key: String,
    /// Display decimals for amounts formatted without a token, see
    /// `TokenCore::format_amount`. Token balances use the token's own decimals.
    pub balance_decimals: u32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            storage_dir: FileStorage::default_base_dir(),
            custom_tokens_key: CUSTOM_TOKENS_STORAGE_KEY.to_string(),
            balance_decimals: DEFAULT_BALANCE_DECIMALS,
        }
    }
}

impl RegistryConfig {
    /// Load from the process environment, reading `.env` first if present
    pub fn from_env() -> Result<Self, WalletError> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup; unset or blank values keep defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, WalletError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(dir) = get(ENV_STORAGE_DIR) {
            config.storage_dir = PathBuf::from(dir);
        }

        if let Some(key) = get(ENV_CUSTOM_TOKENS_KEY) {
            validate_storage_key(&key)
                .map_err(|e| WalletError::config(format!("{}: {}", ENV_CUSTOM_TOKENS_KEY, e)))?;
            config.custom_tokens_key = key;
        }

        if let Some(decimals) = get(ENV_BALANCE_DECIMALS) {
            config.balance_decimals = decimals.trim().parse::<u32>().map_err(|e| {
                WalletError::config(format!("{} must be a non-negative integer: {}", ENV_BALANCE_DECIMALS, e))
            })?;
        }

        Ok(config)
    }

    pub fn open_storage(&self) -> Result<FileStorage, WalletError> {
        FileStorage::with_base_dir(&self.storage_dir)
    }
}
