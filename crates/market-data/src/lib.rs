//! TV Agent Market Data Crate
//!
//! Fetches OHLCV candles from public quote services with a single,
//! sequential fallback.
//!
//! # Overview
//!
//! - Stooq CSV as the primary provider
//! - Yahoo v8 chart JSON as the fallback provider
//! - Per-provider symbol aliases and interval tokens
//! - Bar validation and tail truncation to the requested limit
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |   CandleQuery    |  (symbol, interval, limit)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! | ProviderRegistry |  validate, resolve, fetch, fall back once
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! | ProviderMappings | --> | ResolvedRequest  |  (provider-specific)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  CandleProvider  |  (Stooq, Yahoo)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   CandleResult   |  (candles + source tag)
//!                          +------------------+
//! ```

pub mod errors;
pub mod models;
pub mod provider;
pub mod registry;
pub mod resolver;

pub use models::{
    Candle, CandleQuery, CandleResult, CandleSource, Interval, ProviderSymbol,
    DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT,
};

pub use resolver::{IntervalMap, ProviderMappings, ProviderSymbols, ResolvedRequest, SymbolMap};

pub use provider::stooq::StooqProvider;
pub use provider::yahoo::YahooProvider;
pub use provider::{build_client, CandleProvider, DEFAULT_FETCH_TIMEOUT};

pub use registry::{
    truncate_tail, CandleValidator, EmptyReason, ProviderOutcome, ProviderRegistry,
    ValidationIssue, ValidationSeverity, ValidatorConfig,
};

pub use errors::MarketDataError;
