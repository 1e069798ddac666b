//! Symbol and interval resolution for candle providers.
//!
//! Converts a user-facing [`CandleQuery`](crate::CandleQuery) into the
//! provider-specific request each provider consumes.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                   ProviderMappings                   │
//! │                                                      │
//! │  SymbolMap     alias table, then default case rule   │
//! │                "OMXS30" -> ("^omxs", "^OMX")         │
//! │                "aapl.us" -> ("aapl.us", "AAPL.US")   │
//! │                                                      │
//! │  IntervalMap   one per provider slot                 │
//! │                primary:  1h -> "60", 1D -> "d"       │
//! │                fallback: 1h -> "1h", 1D -> "1d"      │
//! └──────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//!                  ResolvedRequest  (symbol, token, limit)
//! ```
//!
//! All tables are plain values built once and handed to the registry, so
//! tests can swap them out without touching globals. Resolution never fails.

mod interval_map;
mod mappings;
mod symbol_map;

pub use interval_map::IntervalMap;
pub use mappings::{ProviderMappings, ResolvedRequest};
pub use symbol_map::{ProviderSymbols, SymbolMap};
