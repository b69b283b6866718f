//! VaultDAO Wallet Core
//!
//! Token registry for the VaultDAO front end.
//! Keeps the list of tokens a user can pick from: a fixed built-in set merged
//! with user-added custom tokens persisted in a key/value store.
//!
//! ## Architecture
//!
//! - **Core**: the token registry, built-in tokens and icon lookup
//! - **Domain**: the `TokenInfo` entity
//! - **Infrastructure**: storage backends and environment configuration
//! - **Shared**: common types, constants, errors and display helpers
//!
//! ## Usage
//!
//! ```rust
//! use vaultdao_wallet_core::{format_balance, MemoryStorage, TokenInfo, TokenRegistry};
//!
//! let storage = MemoryStorage::new();
//! let registry = TokenRegistry::new(&storage);
//!
//! let token = TokenInfo::new(
//!     "CBIELTK6YBZJU5UP2WWQEUCYKLPU6AUNZ2BQ4WWFEIE3USCIHMXQDAMA",
//!     "USDC",
//!     "USD Coin",
//!     7,
//! );
//! registry.add_custom(token);
//!
//! for token in registry.get_all_tracked() {
//!     println!("{} {} {}", token.display_icon(), token.symbol, format_balance("1234.5", None));
//! }
//! ```

use env_logger::Env;

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod shared;

use crate::infrastructure::FileStorage;
use crate::shared::constants::LOG_LEVEL;

// Re-export specific components
pub use crate::core::tokens::{default_tokens, get_icon, TokenRegistry, DEFAULT_TOKENS};
pub use crate::infrastructure::{MemoryStorage, PlatformStorage, RegistryConfig};

// Re-export domain entities
pub use crate::domain::TokenInfo;

// Re-export shared types
pub use shared::error::WalletError;
pub use shared::types::{BalanceValue, TokenBalance, WalletResult};
pub use shared::utils::{format_balance, is_valid_address, validate_contract_address};

/// Initialize logging. Honors `RUST_LOG`; safe to call more than once.
pub fn init() -> Result<(), WalletError> {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(LOG_LEVEL)).try_init();
    crate::core::init()
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Initialize the token registry backend from configuration
pub fn init_token_registry(config: RegistryConfig) -> Result<TokenCore, WalletError> {
    let storage = config.open_storage()?;
    log::info!(
        "Token registry storage at {} (key '{}')",
        storage.base_dir().display(),
        config.custom_tokens_key
    );
    Ok(TokenCore { config, storage })
}

/// Owns the configured storage and hands out registries borrowing it
pub struct TokenCore {
    pub config: RegistryConfig,
    pub storage: FileStorage,
}

impl TokenCore {
    pub fn registry(&self) -> TokenRegistry<'_> {
        TokenRegistry::with_key(&self.storage, self.config.custom_tokens_key.clone())
    }

    /// Format an amount that has no token attached, using `balance_decimals`
    pub fn format_amount(&self, value: impl Into<BalanceValue>) -> String {
        format_balance(value, Some(self.config.balance_decimals))
    }

    /// Effective token list paired with formatted balances
    pub fn balances<V>(&self, balances: impl IntoIterator<Item = (String, V)>) -> Vec<TokenBalance>
    where
        V: Into<BalanceValue>,
    {
        let tracked = self.registry().get_all_tracked();
        balances
            .into_iter()
            .filter_map(|(address, value)| {
                tracked
                    .iter()
                    .find(|t| t.address == address)
                    .map(|token| TokenBalance::new(token.clone(), value))
            })
            .collect()
    }
}
