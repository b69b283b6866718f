//! Built-in token list

use lazy_static::lazy_static;

use crate::core::tokens::icons::get_icon;
use crate::domain::TokenInfo;

pub const USDC_CONTRACT_ADDRESS: &str = "CBIELTK6YBZJU5UP2WWQEUCYKLPU6AUNZ2BQ4WWFEIE3USCIHMXQDAMA";

lazy_static! {
    pub static ref DEFAULT_TOKENS: Vec<TokenInfo> = vec![
        TokenInfo::native(),
        TokenInfo::new(USDC_CONTRACT_ADDRESS, "USDC", "USD Coin", 7).with_icon(get_icon("USDC")),
    ];
}

pub fn default_tokens() -> &'static [TokenInfo] {
    DEFAULT_TOKENS.as_slice()
}
