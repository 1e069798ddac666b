//! Provider registry for candle retrieval with a single fallback.
//!
//! The registry owns two providers and the mapping tables:
//! - Resolves the query for the primary slot and fetches once
//! - Validates and truncates the bars
//! - When the primary fails or yields nothing, resolves for the fallback
//!   slot and fetches once more
//! - Never lets a provider error escape; only invalid queries do

use std::sync::Arc;

use log::{info, warn};

use super::{CandleValidator, ProviderOutcome};
use crate::errors::MarketDataError;
use crate::models::{Candle, CandleQuery, CandleResult, CandleSource};
use crate::provider::CandleProvider;
use crate::resolver::{ProviderMappings, ResolvedRequest};

/// Keep the last `limit` candles, in original order.
pub fn truncate_tail(mut candles: Vec<Candle>, limit: usize) -> Vec<Candle> {
    if candles.len() > limit {
        candles.drain(..candles.len() - limit);
    }
    candles
}

/// Candle retrieval service with primary/fallback providers.
pub struct ProviderRegistry {
    primary: Arc<dyn CandleProvider>,
    fallback: Arc<dyn CandleProvider>,
    mappings: ProviderMappings,
    validator: CandleValidator,
}

impl ProviderRegistry {
    /// Create a new registry with the default validator.
    pub fn new(
        primary: Arc<dyn CandleProvider>,
        fallback: Arc<dyn CandleProvider>,
        mappings: ProviderMappings,
    ) -> Self {
        Self::with_config(primary, fallback, mappings, CandleValidator::new())
    }

    /// Create a registry with a custom validator.
    pub fn with_config(
        primary: Arc<dyn CandleProvider>,
        fallback: Arc<dyn CandleProvider>,
        mappings: ProviderMappings,
        validator: CandleValidator,
    ) -> Self {
        Self {
            primary,
            fallback,
            mappings,
            validator,
        }
    }

    /// Fetch candles for a query.
    ///
    /// Steps:
    /// 1. Validate the query (the only error that can be returned)
    /// 2. Resolve symbol/interval for the primary provider and fetch
    /// 3. If that produced candles, return them tagged `primary`
    /// 4. Otherwise resolve for the fallback provider and fetch once
    /// 5. Return whatever the fallback produced (possibly nothing) tagged `fallback`
    ///
    /// The fallback request is only issued after the primary one has completed.
    pub async fn fetch_candles(
        &self,
        query: &CandleQuery,
    ) -> Result<CandleResult, MarketDataError> {
        query.validate()?;

        let primary_request = self.mappings.resolve(CandleSource::Primary, query);
        let reason = match self.attempt(self.primary.as_ref(), &primary_request).await {
            ProviderOutcome::Candles(candles) => {
                info!(
                    "Fetched {} candles for '{}' from '{}'",
                    candles.len(),
                    primary_request.symbol,
                    self.primary.id()
                );
                return Ok(self.assemble(
                    CandleSource::Primary,
                    self.primary.as_ref(),
                    &primary_request,
                    candles,
                ));
            }
            ProviderOutcome::Empty { reason } => reason,
        };

        info!(
            "Primary provider '{}' {} for '{}', falling back to '{}'",
            self.primary.id(),
            reason,
            primary_request.symbol,
            self.fallback.id()
        );

        let fallback_request = self.mappings.resolve(CandleSource::Fallback, query);
        let outcome = self.attempt(self.fallback.as_ref(), &fallback_request).await;
        if let ProviderOutcome::Empty { reason } = &outcome {
            warn!(
                "Fallback provider '{}' {} for '{}', returning no candles",
                self.fallback.id(),
                reason,
                fallback_request.symbol
            );
        }

        Ok(self.assemble(
            CandleSource::Fallback,
            self.fallback.as_ref(),
            &fallback_request,
            outcome.into_candles(),
        ))
    }

    /// Run one provider call and fold every failure into an outcome.
    async fn attempt(
        &self,
        provider: &dyn CandleProvider,
        request: &ResolvedRequest,
    ) -> ProviderOutcome {
        match provider.get_candles(request).await {
            Ok(candles) => {
                let valid = self.validator.retain_valid(candles);
                ProviderOutcome::from_candles(truncate_tail(valid, request.limit))
            }
            Err(e) => {
                warn!("Provider '{}' failed: {}", provider.id(), e);
                ProviderOutcome::failed(e.to_string())
            }
        }
    }

    fn assemble(
        &self,
        source: CandleSource,
        provider: &dyn CandleProvider,
        request: &ResolvedRequest,
        candles: Vec<Candle>,
    ) -> CandleResult {
        CandleResult {
            symbol: request.symbol.to_string(),
            interval: request.interval,
            candles,
            source,
            provider: provider.id().to_string(),
        }
    }

    /// Ids of the primary and fallback providers.
    pub fn provider_ids(&self) -> (&'static str, &'static str) {
        (self.primary.id(), self.fallback.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Interval;
    use crate::resolver::{IntervalMap, SymbolMap};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    enum Script {
        Rows(Vec<Candle>),
        Fail,
    }

    struct MockProvider {
        id: &'static str,
        script: Script,
        call_count: AtomicUsize,
        requests: Mutex<Vec<ResolvedRequest>>,
    }

    impl MockProvider {
        fn new(id: &'static str, script: Script) -> Arc<Self> {
            Arc::new(Self {
                id,
                script,
                call_count: AtomicUsize::new(0),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl CandleProvider for MockProvider {
        fn id(&self) -> &'static str {
            self.id
        }

        async fn get_candles(
            &self,
            request: &ResolvedRequest,
        ) -> Result<Vec<Candle>, MarketDataError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push(request.clone());

            match &self.script {
                Script::Rows(rows) => Ok(rows.clone()),
                Script::Fail => Err(MarketDataError::Timeout {
                    provider: self.id.to_string(),
                }),
            }
        }
    }

    fn daily(n: usize) -> Vec<Candle> {
        (1..=n)
            .map(|day| {
                let base = day as f64;
                Candle::new(
                    format!("2024-01-{:02}", day),
                    base,
                    base + 1.0,
                    base - 1.0,
                    base + 0.5,
                    Some(1000.0),
                )
            })
            .collect()
    }

    fn registry(primary: Arc<MockProvider>, fallback: Arc<MockProvider>) -> ProviderRegistry {
        ProviderRegistry::new(primary, fallback, ProviderMappings::default())
    }

    fn query(symbol: &str, limit: usize) -> CandleQuery {
        CandleQuery::new(symbol, Interval::OneDay, limit).unwrap()
    }

    #[test]
    fn test_truncate_tail_keeps_last_rows_in_order() {
        let kept = truncate_tail(daily(10), 3);
        let times: Vec<_> = kept.iter().map(|c| c.time.as_str()).collect();
        assert_eq!(times, vec!["2024-01-08", "2024-01-09", "2024-01-10"]);

        assert_eq!(truncate_tail(daily(2), 5).len(), 2);
    }

    #[tokio::test]
    async fn test_primary_success_skips_fallback() {
        let primary = MockProvider::new("PRIMARY", Script::Rows(daily(10)));
        let fallback = MockProvider::new("FALLBACK", Script::Rows(daily(3)));
        let registry = registry(primary.clone(), fallback.clone());

        let result = registry.fetch_candles(&query("OMXS30", 5)).await.unwrap();

        assert_eq!(result.source, CandleSource::Primary);
        assert_eq!(result.provider, "PRIMARY");
        assert_eq!(result.symbol, "^omxs");
        assert_eq!(result.candles, daily(10)[5..].to_vec());
        assert_eq!(primary.calls(), 1);
        assert_eq!(fallback.calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_primary_falls_back() {
        let primary = MockProvider::new("PRIMARY", Script::Rows(Vec::new()));
        let fallback = MockProvider::new("FALLBACK", Script::Rows(daily(4)));
        let registry = registry(primary.clone(), fallback.clone());

        let result = registry.fetch_candles(&query("OMXS30", 10)).await.unwrap();

        assert_eq!(result.source, CandleSource::Fallback);
        assert_eq!(result.provider, "FALLBACK");
        assert_eq!(result.symbol, "^OMX");
        assert_eq!(result.candles, daily(4));
        assert_eq!(primary.calls(), 1);
        assert_eq!(fallback.calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_primary_falls_back() {
        let primary = MockProvider::new("PRIMARY", Script::Fail);
        let fallback = MockProvider::new("FALLBACK", Script::Rows(daily(2)));
        let registry = registry(primary.clone(), fallback.clone());

        let result = registry.fetch_candles(&query("aapl.us", 10)).await.unwrap();

        assert_eq!(result.source, CandleSource::Fallback);
        assert_eq!(result.candles.len(), 2);
        assert_eq!(primary.calls(), 1);
        assert_eq!(fallback.calls(), 1);
    }

    #[tokio::test]
    async fn test_both_failing_degrades_to_empty_fallback() {
        let primary = MockProvider::new("PRIMARY", Script::Fail);
        let fallback = MockProvider::new("FALLBACK", Script::Fail);
        let registry = registry(primary.clone(), fallback.clone());

        let result = registry.fetch_candles(&query("aapl.us", 10)).await.unwrap();

        assert_eq!(result.source, CandleSource::Fallback);
        assert!(result.candles.is_empty());
        assert_eq!(fallback.calls(), 1);
    }

    #[tokio::test]
    async fn test_primary_with_only_non_finite_rows_falls_back() {
        let mut rows = daily(3);
        for row in rows.iter_mut() {
            row.close = f64::NAN;
        }
        let primary = MockProvider::new("PRIMARY", Script::Rows(rows));
        let fallback = MockProvider::new("FALLBACK", Script::Rows(daily(1)));
        let registry = registry(primary, fallback);

        let result = registry.fetch_candles(&query("aapl.us", 10)).await.unwrap();
        assert_eq!(result.source, CandleSource::Fallback);
        assert!(result.candles.iter().all(Candle::has_finite_prices));
    }

    #[tokio::test]
    async fn test_fallback_is_truncated_and_filtered() {
        let mut rows = daily(20);
        rows[19].open = f64::INFINITY;
        let primary = MockProvider::new("PRIMARY", Script::Rows(Vec::new()));
        let fallback = MockProvider::new("FALLBACK", Script::Rows(rows));
        let registry = registry(primary, fallback);

        let result = registry.fetch_candles(&query("aapl.us", 10)).await.unwrap();
        assert_eq!(result.candles.len(), 10);
        assert_eq!(result.candles.first().unwrap().time, "2024-01-10");
        assert_eq!(result.candles.last().unwrap().time, "2024-01-19");
    }

    #[tokio::test]
    async fn test_invalid_query_makes_no_calls() {
        let primary = MockProvider::new("PRIMARY", Script::Rows(daily(10)));
        let fallback = MockProvider::new("FALLBACK", Script::Rows(daily(10)));
        let registry = registry(primary.clone(), fallback.clone());

        let bad = CandleQuery {
            symbol: "  ".to_string(),
            interval: Interval::OneDay,
            limit: 10,
        };
        let err = registry.fetch_candles(&bad).await.unwrap_err();

        assert!(matches!(err, MarketDataError::InvalidQuery { .. }));
        assert_eq!(primary.calls(), 0);
        assert_eq!(fallback.calls(), 0);
    }

    #[tokio::test]
    async fn test_providers_receive_their_own_tokens() {
        let primary = MockProvider::new("PRIMARY", Script::Rows(Vec::new()));
        let fallback = MockProvider::new("FALLBACK", Script::Rows(Vec::new()));
        let registry = registry(primary.clone(), fallback.clone());

        let query = CandleQuery::new("spy.us", Interval::OneHour, 50).unwrap();
        registry.fetch_candles(&query).await.unwrap();

        let primary_request = primary.requests.lock().unwrap()[0].clone();
        assert_eq!(primary_request.symbol.as_ref(), "spy.us");
        assert_eq!(primary_request.interval_token, "60");

        let fallback_request = fallback.requests.lock().unwrap()[0].clone();
        assert_eq!(fallback_request.symbol.as_ref(), "SPY.US");
        assert_eq!(fallback_request.interval_token, "1h");
    }

    #[tokio::test]
    async fn test_injected_mappings_are_used() {
        let primary = MockProvider::new("PRIMARY", Script::Rows(daily(1)));
        let fallback = MockProvider::new("FALLBACK", Script::Rows(Vec::new()));
        let mappings = ProviderMappings::new(
            SymbolMap::empty().with_alias("GOLD", "xauusd", "GC=F"),
            IntervalMap::new([(Interval::OneDay, "daily")], "daily"),
            IntervalMap::yahoo(),
        );
        let registry = ProviderRegistry::new(primary.clone(), fallback, mappings);

        let result = registry.fetch_candles(&query("gold", 10)).await.unwrap();
        assert_eq!(result.symbol, "xauusd");
        assert_eq!(primary.requests.lock().unwrap()[0].interval_token, "daily");
    }

    #[tokio::test]
    async fn test_repeated_calls_are_identical() {
        let primary = MockProvider::new("PRIMARY", Script::Rows(daily(30)));
        let fallback = MockProvider::new("FALLBACK", Script::Rows(Vec::new()));
        let registry = registry(primary, fallback);

        let first = registry.fetch_candles(&query("aapl.us", 12)).await.unwrap();
        let second = registry.fetch_candles(&query("aapl.us", 12)).await.unwrap();
        assert_eq!(first, second);
    }
}
