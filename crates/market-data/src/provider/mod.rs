//! Candle provider abstractions and implementations.
//!
//! This module contains:
//! - The `CandleProvider` trait that all providers implement
//! - A shared HTTP helper that applies the fetch timeout and status checks
//! - Concrete providers: Stooq (CSV, primary) and Yahoo (chart JSON, fallback)
//!
//! Providers receive a pre-resolved [`ResolvedRequest`](crate::resolver::ResolvedRequest).
//! Mapping user symbols and intervals to provider tokens happens in the
//! resolver module, not in the providers themselves.

mod http;
mod traits;

pub mod stooq;
pub mod yahoo;

pub use http::{build_client, fetch_text, DEFAULT_FETCH_TIMEOUT};
pub use traits::CandleProvider;
