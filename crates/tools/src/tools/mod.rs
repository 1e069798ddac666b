//! Tools exposed by the agent server:
//! - GetOhlcvTool: candles with primary/fallback provider selection
//! - ChartUrlTool: TradingView chart link for a symbol and interval
//! - BacktestInUiTool: Strategy Tester run in the TradingView UI (not available in this build)

pub mod backtest;
pub mod chart_url;
pub mod get_ohlcv;

pub use backtest::BacktestInUiTool;
pub use chart_url::ChartUrlTool;
pub use get_ohlcv::GetOhlcvTool;
