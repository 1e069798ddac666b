//! Market data models
//!
//! This module contains the core data types for candle retrieval:
//! - `types` - Type alias for provider symbols (ProviderSymbol)
//! - `interval` - The fixed timeframe enumeration (Interval)
//! - `candle` - A single OHLCV bar (Candle)
//! - `query` - A validated retrieval request (CandleQuery)
//! - `result` - The response and its origin tag (CandleResult, CandleSource)

mod candle;
mod interval;
mod query;
mod result;
mod types;

pub use candle::Candle;
pub use interval::Interval;
pub use query::{CandleQuery, DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT};
pub use result::{CandleResult, CandleSource};
pub use types::ProviderSymbol;
