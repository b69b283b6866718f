//! Constants for the wallet core
//!
//! This module contains all constants used throughout the wallet core.

// Token constants
pub const NATIVE_TOKEN_ADDRESS: &str = "NATIVE";
pub const NATIVE_TOKEN_SYMBOL: &str = "XLM";
pub const NATIVE_TOKEN_DECIMALS: u8 = 7;
pub const DEFAULT_TOKEN_ICON: &str = "🪙";

// Address validation constants
pub const CONTRACT_ADDRESS_LENGTH: usize = 56;
pub const CONTRACT_ADDRESS_PREFIX: char = 'C';

// Balance display constants
pub const DEFAULT_BALANCE_DECIMALS: u32 = 7;
pub const MAX_DISPLAY_DECIMALS: u32 = 6;
pub const DUST_THRESHOLD: f64 = 0.0001;
pub const DUST_EXPONENT_DIGITS: usize = 2;
// Every finite f64 has a terminating decimal expansion within this many places
pub const EXACT_FRACTION_DIGITS: usize = 1074;

// Storage constants
pub const CUSTOM_TOKENS_STORAGE_KEY: &str = "vaultdao_custom_tokens";
pub const STORAGE_DIR_NAME: &str = "vaultdao";
pub const FALLBACK_STORAGE_DIR: &str = "./vaultdao_storage";
pub const STORAGE_FILE_EXTENSION: &str = "json";

// Environment variables
pub const ENV_STORAGE_DIR: &str = "VAULTDAO_STORAGE_DIR";
pub const ENV_CUSTOM_TOKENS_KEY: &str = "VAULTDAO_CUSTOM_TOKENS_KEY";
pub const ENV_BALANCE_DECIMALS: &str = "VAULTDAO_BALANCE_DECIMALS";

// Development and testing constants
pub const LOG_LEVEL: &str = if cfg!(debug_assertions) { "debug" } else { "info" };
