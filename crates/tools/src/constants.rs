//! Defaults shared by the chart tools.

/// Base chart page used when no chart URL is configured.
pub const DEFAULT_CHART_URL: &str = "https://www.tradingview.com/chart/";

/// Interval used by the chart URL tool when none is given.
pub const DEFAULT_CHART_INTERVAL: &str = "1D";
