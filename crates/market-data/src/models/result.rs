use serde::{Deserialize, Serialize};

use super::candle::Candle;
use super::interval::Interval;

/// Which provider slot satisfied the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandleSource {
    Primary,
    Fallback,
}

/// Response of a candle retrieval.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandleResult {
    /// Provider identifier of the symbol that was fetched
    pub symbol: String,

    pub interval: Interval,

    /// Oldest-to-newest, at most `limit` entries
    pub candles: Vec<Candle>,

    pub source: CandleSource,

    /// Id of the provider behind `source` (e.g. "STOOQ")
    pub provider: String,
}
