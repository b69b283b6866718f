//! Token registry: built-in tokens, icons, and user-added custom tokens

pub mod defaults;
pub mod icons;
pub mod registry;

pub use defaults::{default_tokens, DEFAULT_TOKENS, USDC_CONTRACT_ADDRESS};
pub use icons::get_icon;
pub use registry::TokenRegistry;
