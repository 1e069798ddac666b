//! Alias table from user tickers to per-provider identifiers.

use std::collections::HashMap;
use std::sync::Arc;

use crate::models::ProviderSymbol;

/// Identifiers for one symbol on both provider slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderSymbols {
    pub primary: ProviderSymbol,
    pub secondary: ProviderSymbol,
}

/// Static alias lookup with a case-folding default.
///
/// Keys are matched case-insensitively on the trimmed symbol. Anything not in
/// the table resolves to lowercase for the primary provider and uppercase for
/// the secondary one.
#[derive(Clone, Debug)]
pub struct SymbolMap {
    aliases: HashMap<String, ProviderSymbols>,
}

impl SymbolMap {
    /// Create a map with the built-in index and crypto aliases.
    pub fn new() -> Self {
        Self::empty()
            .with_alias("OMXS30", "^omxs", "^OMX")
            .with_alias("OMX30", "^omxs", "^OMX")
            .with_alias("SPX", "^spx", "^GSPC")
            .with_alias("NDX", "^ndx", "^NDX")
            .with_alias("DJI", "^dji", "^DJI")
            .with_alias("BTCUSD", "btcusd", "BTC-USD")
            .with_alias("ETHUSD", "ethusd", "ETH-USD")
    }

    /// Create a map with no aliases; every symbol takes the default rule.
    pub fn empty() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    /// Add or replace an alias.
    pub fn with_alias(mut self, alias: &str, primary: &str, secondary: &str) -> Self {
        self.aliases.insert(
            alias.trim().to_uppercase(),
            ProviderSymbols {
                primary: Arc::from(primary),
                secondary: Arc::from(secondary),
            },
        );
        self
    }

    /// Resolve a user symbol to both provider identifiers.
    pub fn resolve(&self, symbol: &str) -> ProviderSymbols {
        let trimmed = symbol.trim();
        if let Some(known) = self.aliases.get(&trimmed.to_uppercase()) {
            return known.clone();
        }

        ProviderSymbols {
            primary: Arc::from(trimmed.to_lowercase()),
            secondary: Arc::from(trimmed.to_uppercase()),
        }
    }
}

impl Default for SymbolMap {
    fn default() -> Self {
        Self::new()
    }
}
