use serde::{Deserialize, Serialize};

use super::interval::Interval;
use crate::errors::MarketDataError;

/// Smallest `limit` accepted at the tool boundary.
pub const MIN_LIMIT: usize = 10;

/// Largest accepted `limit`.
pub const MAX_LIMIT: usize = 5000;

/// `limit` used when the caller does not supply one.
pub const DEFAULT_LIMIT: usize = 500;

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// A candle retrieval request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandleQuery {
    /// User-supplied ticker, normalized per provider by the symbol map
    pub symbol: String,

    #[serde(default)]
    pub interval: Interval,

    /// Upper bound on returned bars
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl CandleQuery {
    /// Build a query and validate it.
    pub fn new(
        symbol: impl Into<String>,
        interval: Interval,
        limit: usize,
    ) -> Result<Self, MarketDataError> {
        let query = Self {
            symbol: symbol.into(),
            interval,
            limit,
        };
        query.validate()?;
        Ok(query)
    }

    /// Check the structural constraints. No network I/O happens before this passes.
    ///
    /// The service accepts any positive `limit` up to [`MAX_LIMIT`]; the
    /// stricter [`MIN_LIMIT`] floor belongs to the tool input schema.
    pub fn validate(&self) -> Result<(), MarketDataError> {
        if self.symbol.trim().is_empty() {
            return Err(MarketDataError::invalid_query(
                "symbol",
                "must not be empty",
            ));
        }
        if !(1..=MAX_LIMIT).contains(&self.limit) {
            return Err(MarketDataError::invalid_query(
                "limit",
                format!("must be between 1 and {}, got {}", MAX_LIMIT, self.limit),
            ));
        }
        Ok(())
    }

    /// Check `limit` against the published tool bounds.
    pub fn validate_tool_bounds(&self) -> Result<(), MarketDataError> {
        self.validate()?;
        if self.limit < MIN_LIMIT {
            return Err(MarketDataError::invalid_query(
                "limit",
                format!(
                    "must be between {} and {}, got {}",
                    MIN_LIMIT, MAX_LIMIT, self.limit
                ),
            ));
        }
        Ok(())
    }
}
