//! Core wallet functionality
//!
//! This module contains the token registry that backs the vault front end.

pub mod tokens;

/// Initialize core modules
pub fn init() -> Result<(), crate::shared::error::WalletError> {
    log::info!(
        "Initializing token registry with {} built-in tokens",
        tokens::default_tokens().len()
    );
    Ok(())
}
