//! Candle provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::Candle;
use crate::resolver::ResolvedRequest;

/// Trait for candle data sources.
///
/// Implement this trait to plug a new upstream into the
/// [`ProviderRegistry`](crate::ProviderRegistry). A provider makes exactly one
/// outbound request per call and never retries on its own.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use tvagent_market_data::{Candle, CandleProvider, MarketDataError, ResolvedRequest};
///
/// struct FixedProvider(Vec<Candle>);
///
/// #[async_trait]
/// impl CandleProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn get_candles(
///         &self,
///         _request: &ResolvedRequest,
///     ) -> Result<Vec<Candle>, MarketDataError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait CandleProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "STOOQ" or "YAHOO".
    /// Used for logging and for the `provider` field of the result.
    fn id(&self) -> &'static str;

    /// Fetch bars for a resolved request.
    ///
    /// Returns candles oldest-first. Malformed upstream rows are skipped by the
    /// provider; the registry applies finite-value validation and `limit`.
    async fn get_candles(&self, request: &ResolvedRequest)
        -> Result<Vec<Candle>, MarketDataError>;
}
