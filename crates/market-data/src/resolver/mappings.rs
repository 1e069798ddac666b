//! Immutable mapping tables handed to the registry at construction.

use crate::models::{CandleQuery, CandleSource, Interval, ProviderSymbol};

use super::interval_map::IntervalMap;
use super::symbol_map::SymbolMap;

/// Everything a provider needs to issue its single request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRequest {
    /// Provider-specific symbol.
    pub symbol: ProviderSymbol,
    /// The requested interval, kept for range derivation.
    pub interval: Interval,
    /// Provider-native interval token.
    pub interval_token: String,
    /// Upper bound on bars the caller will keep.
    pub limit: usize,
}

/// Symbol and interval tables for both provider slots.
#[derive(Clone, Debug)]
pub struct ProviderMappings {
    pub symbols: SymbolMap,
    pub primary_intervals: IntervalMap,
    pub secondary_intervals: IntervalMap,
}

impl ProviderMappings {
    pub fn new(
        symbols: SymbolMap,
        primary_intervals: IntervalMap,
        secondary_intervals: IntervalMap,
    ) -> Self {
        Self {
            symbols,
            primary_intervals,
            secondary_intervals,
        }
    }

    /// Resolve a query for one provider slot.
    pub fn resolve(&self, slot: CandleSource, query: &CandleQuery) -> ResolvedRequest {
        let symbols = self.symbols.resolve(&query.symbol);
        let (symbol, intervals) = match slot {
            CandleSource::Primary => (symbols.primary, &self.primary_intervals),
            CandleSource::Fallback => (symbols.secondary, &self.secondary_intervals),
        };

        ResolvedRequest {
            symbol,
            interval: query.interval,
            interval_token: intervals.token(query.interval).to_string(),
            limit: query.limit,
        }
    }
}

impl Default for ProviderMappings {
    /// Built-in aliases with Stooq as primary and Yahoo as secondary.
    fn default() -> Self {
        Self::new(SymbolMap::new(), IntervalMap::stooq(), IntervalMap::yahoo())
    }
}
