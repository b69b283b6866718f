//! Display glyphs for well-known token symbols

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::shared::constants::DEFAULT_TOKEN_ICON;

lazy_static! {
    static ref TOKEN_ICONS: HashMap<&'static str, &'static str> = {
        let mut icons = HashMap::new();
        icons.insert("XLM", "⭐");
        icons.insert("USDC", "💵");
        icons.insert("USDT", "💲");
        icons.insert("EURC", "💶");
        icons.insert("BTC", "₿");
        icons.insert("ETH", "Ξ");
        icons.insert("AQUA", "🌊");
        icons
    };
}

/// Case-insensitive glyph lookup, falling back to the generic coin glyph
pub fn get_icon(symbol: &str) -> &'static str {
    TOKEN_ICONS
        .get(symbol.to_ascii_uppercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_TOKEN_ICON)
}
