//! Stooq CSV provider.
//!
//! Stooq serves free end-of-day and intraday bars as plain CSV, without
//! authentication.
//!
//! # API Endpoint
//!
//! - Candles: `https://stooq.com/q/d/l/?s={symbol}&i={interval}`
//!
//! # Response Format
//!
//! ```text
//! Date,Open,High,Low,Close,Volume
//! 2024-01-02,187.15,188.44,183.89,185.64,82488700
//! ```
//!
//! Intraday downloads carry an extra `Time` column after `Date`. Unknown
//! symbols answer with a single `No data` line, which parses to zero rows.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::Candle;
use crate::provider::{build_client, fetch_text, CandleProvider};
use crate::resolver::ResolvedRequest;

pub const PROVIDER_ID: &str = "STOOQ";
pub const DEFAULT_BASE_URL: &str = "https://stooq.com";

/// Minimum fields for a row without a `Time` column: date + OHLC.
const MIN_FIELDS: usize = 5;

/// Stooq provider for CSV candle downloads.
pub struct StooqProvider {
    client: Client,
    base_url: String,
}

impl StooqProvider {
    /// Create a provider against `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn candles_url(&self, request: &ResolvedRequest) -> String {
        format!(
            "{}/q/d/l/?s={}&i={}",
            self.base_url,
            encode(&request.symbol),
            encode(&request.interval_token)
        )
    }
}

impl Default for StooqProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, crate::provider::DEFAULT_FETCH_TIMEOUT)
    }
}

/// Column layout detected from the header row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CsvLayout {
    /// Header has `Time` right after `Date`
    has_time: bool,
}

impl CsvLayout {
    fn from_header(header: &str) -> Self {
        let has_time = header
            .split(',')
            .nth(1)
            .map(|col| col.trim().eq_ignore_ascii_case("time"))
            .unwrap_or(false);
        Self { has_time }
    }

    fn offset(&self) -> usize {
        usize::from(self.has_time)
    }
}

/// Parse a Stooq CSV payload into candles, oldest-first.
///
/// The first non-empty line is the header. A data row is dropped when it has
/// fewer than five fields (six with a `Time` column) or when any price field
/// is not a finite number. A dropped row never stops the parse.
pub fn parse_csv(payload: &str) -> Vec<Candle> {
    let mut lines = payload
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let layout = match lines.next() {
        Some(header) => CsvLayout::from_header(header),
        None => return Vec::new(),
    };

    let mut candles = Vec::new();
    let mut dropped = 0usize;
    for line in lines {
        match parse_row(line, layout) {
            Some(candle) => candles.push(candle),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!("Dropped {} malformed Stooq rows", dropped);
    }
    candles
}

fn parse_price(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_row(line: &str, layout: CsvLayout) -> Option<Candle> {
    let fields: Vec<&str> = line.split(',').collect();
    let offset = layout.offset();
    if fields.len() < MIN_FIELDS + offset {
        return None;
    }

    let time = if layout.has_time {
        format!("{} {}", fields[0].trim(), fields[1].trim())
    } else {
        fields[0].trim().to_string()
    };

    let open = parse_price(fields[1 + offset])?;
    let high = parse_price(fields[2 + offset])?;
    let low = parse_price(fields[3 + offset])?;
    let close = parse_price(fields[4 + offset])?;
    let volume = fields.get(5 + offset).and_then(|v| parse_price(v));

    Some(Candle {
        time,
        open,
        high,
        low,
        close,
        volume,
    })
}

#[async_trait]
impl CandleProvider for StooqProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_candles(
        &self,
        request: &ResolvedRequest,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let url = self.candles_url(request);
        let body = fetch_text(&self.client, PROVIDER_ID, &url).await?;

        let candles = parse_csv(&body);
        if candles.is_empty() {
            warn!("Stooq returned no rows for {}", request.symbol);
        }
        Ok(candles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Interval;
    use std::sync::Arc;

    #[test]
    fn test_provider_id() {
        assert_eq!(StooqProvider::default().id(), "STOOQ");
    }

    #[test]
    fn test_candles_url_encodes_symbol() {
        let provider = StooqProvider::new("https://stooq.example/", Duration::from_secs(1));
        let request = ResolvedRequest {
            symbol: Arc::from("^omxs"),
            interval: Interval::OneHour,
            interval_token: "60".to_string(),
            limit: 10,
        };
        assert_eq!(
            provider.candles_url(&request),
            "https://stooq.example/q/d/l/?s=%5Eomxs&i=60"
        );
    }

    #[test]
    fn test_parse_daily_payload() {
        let payload = "Date,Open,High,Low,Close,Volume\n\
                       2024-01-02,10,12,9,11,1000\n\
                       2024-01-03,11,13,10,12.5,\n";
        let candles = parse_csv(payload);
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0], Candle::new("2024-01-02", 10.0, 12.0, 9.0, 11.0, Some(1000.0)));
        assert_eq!(candles[1].close, 12.5);
        assert_eq!(candles[1].volume, None);
    }

    #[test]
    fn test_parse_tolerates_crlf_and_blank_lines() {
        let payload = "Date,Open,High,Low,Close\r\n\r\n2024-01-02,1,2,0.5,1.5\r\n";
        let candles = parse_csv(payload);
        assert_eq!(candles.len(), 1);
        assert_eq!(candles[0].time, "2024-01-02");
        assert_eq!(candles[0].volume, None);
    }

    #[test]
    fn test_malformed_rows_are_dropped_without_aborting() {
        let payload = "Date,Open,High,Low,Close,Volume\n\
                       2024-01-02,10,12,9,11,1000\n\
                       2024-01-03,11,13\n\
                       2024-01-04,abc,13,10,12,500\n\
                       2024-01-05,NaN,13,10,12,500\n\
                       2024-01-06,12,14,11,13,700\n";
        let candles = parse_csv(payload);
        let times: Vec<&str> = candles.iter().map(|c| c.time.as_str()).collect();
        assert_eq!(times, vec!["2024-01-02", "2024-01-06"]);
    }

    #[test]
    fn test_header_only_and_no_data() {
        assert!(parse_csv("Date,Open,High,Low,Close,Volume\n").is_empty());
        assert!(parse_csv("No data").is_empty());
        assert!(parse_csv("").is_empty());
    }

    #[test]
    fn test_intraday_layout_joins_date_and_time() {
        let payload = "Date,Time,Open,High,Low,Close,Volume\n\
                       2024-01-02,15:00:00,10,12,9,11,1000\n\
                       2024-01-02,16:00:00,11,13,10\n";
        let candles = parse_csv(payload);
        assert_eq!(candles.len(), 1);
        assert_eq!(candles[0].time, "2024-01-02 15:00:00");
        assert_eq!(candles[0].open, 10.0);
        assert_eq!(candles[0].volume, Some(1000.0));
    }
}
