//! Yahoo Finance chart provider.
//!
//! Used as the fallback source. It covers equities, indices (`^OMX`,
//! `^GSPC`), crypto (`BTC-USD`) and FX (`EURUSD=X`) through one endpoint.
//!
//! # API Endpoint
//!
//! - Candles: `https://query1.finance.yahoo.com/v8/finance/chart/{symbol}?interval={interval}&range={range}`
//!
//! The endpoint has no bar-count parameter, so a `range` large enough to
//! cover the requested `limit` is derived from the interval.

mod models;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{SecondsFormat, TimeZone, Utc};
use reqwest::Client;
use tracing::{debug, warn};
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::{Candle, Interval};
use crate::provider::{build_client, fetch_text, CandleProvider};
use crate::resolver::ResolvedRequest;

use models::{YahooChartResponse, YahooQuoteSeries};

pub const PROVIDER_ID: &str = "YAHOO";
pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Calendar-day ceilings for Yahoo's named ranges, smallest first.
const NAMED_RANGES: [(u64, &str); 7] = [
    (31, "1mo"),
    (92, "3mo"),
    (183, "6mo"),
    (366, "1y"),
    (731, "2y"),
    (1_827, "5y"),
    (3_653, "10y"),
];

/// Sessions per year used to size daily ranges, leaving room for holidays.
const TRADING_DAYS_PER_YEAR: u64 = 250;
const DAYS_PER_YEAR: u64 = 365;

/// Yahoo Finance provider for chart candles.
pub struct YahooProvider {
    client: Client,
    base_url: String,
}

impl YahooProvider {
    /// Create a provider against `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn chart_url(&self, request: &ResolvedRequest) -> String {
        format!(
            "{}/v8/finance/chart/{}?interval={}&range={}",
            self.base_url,
            encode(&request.symbol),
            encode(&request.interval_token),
            chart_range(request.interval, request.limit)
        )
    }
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, crate::provider::DEFAULT_FETCH_TIMEOUT)
    }
}

/// Derive the `range` parameter for `limit` bars of `interval`.
///
/// Intraday intervals are capped by Yahoo's lookback windows; daily and longer
/// bars pick the smallest named range that covers `limit` bars.
pub fn chart_range(interval: Interval, limit: usize) -> &'static str {
    let limit = limit as u64;
    let calendar_days = match interval {
        Interval::OneMinute => return "7d",
        Interval::FiveMinutes | Interval::FifteenMinutes | Interval::ThirtyMinutes => {
            return "60d"
        }
        Interval::OneHour | Interval::FourHours => return "730d",
        Interval::OneDay => (limit * DAYS_PER_YEAR).div_ceil(TRADING_DAYS_PER_YEAR),
        Interval::OneWeek => limit * 7,
        Interval::OneMonth => limit * 31,
    };

    NAMED_RANGES
        .iter()
        .find(|(ceiling, _)| calendar_days <= *ceiling)
        .map(|(_, name)| *name)
        .unwrap_or("max")
}

/// Convert a chart payload into candles, oldest-first.
///
/// Bars with a missing timestamp or any missing price are skipped; a missing
/// volume is kept as `None`.
pub fn parse_chart(body: &str) -> Result<Vec<Candle>, MarketDataError> {
    let response: YahooChartResponse =
        serde_json::from_str(body).map_err(|e| MarketDataError::Parse {
            provider: PROVIDER_ID.to_string(),
            message: e.to_string(),
        })?;

    if let Some(error) = response.chart.error {
        return Err(MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: error.description.unwrap_or(error.code),
        });
    }

    let Some(result) = response.chart.result.and_then(|r| r.into_iter().next()) else {
        return Ok(Vec::new());
    };
    let timestamps = result.timestamp.unwrap_or_default();
    let series = result
        .indicators
        .quote
        .into_iter()
        .next()
        .unwrap_or_default();

    Ok(zip_series(&timestamps, &series))
}

fn zip_series(timestamps: &[i64], series: &YahooQuoteSeries) -> Vec<Candle> {
    let at = |values: &[Option<f64>], i: usize| values.get(i).copied().flatten();

    let mut candles = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        let Some(time) = Utc.timestamp_opt(ts, 0).single() else {
            warn!("Skipping Yahoo bar at index {}: invalid timestamp {}", i, ts);
            continue;
        };

        let (Some(open), Some(high), Some(low), Some(close)) = (
            at(&series.open, i),
            at(&series.high, i),
            at(&series.low, i),
            at(&series.close, i),
        ) else {
            continue;
        };

        candles.push(Candle {
            time: time.to_rfc3339_opts(SecondsFormat::Secs, true),
            open,
            high,
            low,
            close,
            volume: at(&series.volume, i).filter(|v| v.is_finite()),
        });
    }
    candles
}

#[async_trait]
impl CandleProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_candles(
        &self,
        request: &ResolvedRequest,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let url = self.chart_url(request);
        let body = fetch_text(&self.client, PROVIDER_ID, &url).await?;

        let candles = parse_chart(&body)?;
        debug!(
            "Yahoo returned {} bars for {} ({})",
            candles.len(),
            request.symbol,
            request.interval_token
        );
        Ok(candles)
    }
}
