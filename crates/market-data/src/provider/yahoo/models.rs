//! Yahoo Finance chart API response models.
//!
//! The v8 chart endpoint returns bars as parallel arrays: one `timestamp`
//! array plus `open/high/low/close/volume` arrays under
//! `indicators.quote[0]`. Any entry may be `null`.

use serde::Deserialize;

/// Main response wrapper for the chart API
#[derive(Debug, Deserialize)]
pub struct YahooChartResponse {
    pub chart: YahooChart,
}

/// Chart container; exactly one of `result` / `error` is normally set
#[derive(Debug, Deserialize)]
pub struct YahooChart {
    #[serde(default)]
    pub result: Option<Vec<YahooChartResult>>,
    #[serde(default)]
    pub error: Option<YahooChartError>,
}

/// Error object, e.g. `{"code": "Not Found", "description": "No data found"}`
#[derive(Debug, Deserialize)]
pub struct YahooChartError {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One symbol's series
#[derive(Debug, Deserialize)]
pub struct YahooChartResult {
    /// Unix seconds, absent when the range holds no bars
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    pub indicators: YahooIndicators,
}

#[derive(Debug, Deserialize)]
pub struct YahooIndicators {
    #[serde(default)]
    pub quote: Vec<YahooQuoteSeries>,
}

/// Parallel OHLCV arrays aligned with `timestamp`
#[derive(Debug, Default, Deserialize)]
pub struct YahooQuoteSeries {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}
