use serde::{Deserialize, Serialize};

use crate::domain::TokenInfo;
use crate::shared::utils::format_balance;

// Basic types for token operations
pub type Address = String;
pub type Symbol = String;

/// Raw balance as handed over by the caller, either already numeric or a
/// numeric string straight from an RPC response or a form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BalanceValue {
    Number(f64),
    Text(String),
}

impl From<f64> for BalanceValue {
    fn from(value: f64) -> Self {
        BalanceValue::Number(value)
    }
}

impl From<f32> for BalanceValue {
    fn from(value: f32) -> Self {
        BalanceValue::Number(value as f64)
    }
}

impl From<i64> for BalanceValue {
    fn from(value: i64) -> Self {
        BalanceValue::Number(value as f64)
    }
}

impl From<i32> for BalanceValue {
    fn from(value: i32) -> Self {
        BalanceValue::Number(value as f64)
    }
}

impl From<u64> for BalanceValue {
    fn from(value: u64) -> Self {
        BalanceValue::Number(value as f64)
    }
}

impl From<u32> for BalanceValue {
    fn from(value: u32) -> Self {
        BalanceValue::Number(value as f64)
    }
}

impl From<&str> for BalanceValue {
    fn from(value: &str) -> Self {
        BalanceValue::Text(value.to_string())
    }
}

impl From<String> for BalanceValue {
    fn from(value: String) -> Self {
        BalanceValue::Text(value)
    }
}

impl From<&String> for BalanceValue {
    fn from(value: &String) -> Self {
        BalanceValue::Text(value.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenBalance {
    pub token: TokenInfo,
    pub balance: BalanceValue,
    pub formatted_balance: String,
}

impl TokenBalance {
    pub fn new(token: TokenInfo, balance: impl Into<BalanceValue>) -> Self {
        let balance = balance.into();
        let formatted_balance = format_balance(balance.clone(), Some(token.decimals as u32));
        Self {
            token,
            balance,
            formatted_balance,
        }
    }
}

// Result types for better error handling
pub type WalletResult<T> = Result<T, crate::shared::error::WalletError>;
