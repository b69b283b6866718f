//! Token entity for the wallet core

use serde::{Deserialize, Serialize};

use crate::core::tokens::icons::get_icon;
use crate::shared::constants::{NATIVE_TOKEN_ADDRESS, NATIVE_TOKEN_DECIMALS, NATIVE_TOKEN_SYMBOL};
use crate::shared::error::WalletError;
use crate::shared::types::Address;
use crate::shared::utils::validate_contract_address;

/// A token the user can reference. Serialized with camelCase keys so the
/// persisted blob stays readable by the web front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub address: Address,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub is_native: bool,
}

impl TokenInfo {
    /// Create a non-native token without an icon
    pub fn new(
        address: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
        decimals: u8,
    ) -> Self {
        Self {
            address: address.into(),
            symbol: symbol.into(),
            name: name.into(),
            decimals,
            icon: None,
            is_native: false,
        }
    }

    /// The chain's native asset (XLM)
    pub fn native() -> Self {
        Self {
            address: NATIVE_TOKEN_ADDRESS.to_string(),
            symbol: NATIVE_TOKEN_SYMBOL.to_string(),
            name: "Stellar Lumens".to_string(),
            decimals: NATIVE_TOKEN_DECIMALS,
            icon: Some(get_icon(NATIVE_TOKEN_SYMBOL).to_string()),
            is_native: true,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Explicit icon if set, otherwise the glyph registered for the symbol
    pub fn display_icon(&self) -> &str {
        match self.icon.as_deref() {
            Some(icon) if !icon.is_empty() => icon,
            _ => get_icon(&self.symbol),
        }
    }

    pub fn validate(&self) -> Result<(), WalletError> {
        validate_contract_address(&self.address)?;

        if self.symbol.trim().is_empty() {
            return Err(WalletError::validation("Token symbol cannot be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(WalletError::validation("Token name cannot be empty"));
        }
        if self.is_native != (self.address == NATIVE_TOKEN_ADDRESS) {
            return Err(WalletError::validation(
                "Only the NATIVE address may be flagged as native",
            ));
        }

        Ok(())
    }
}
