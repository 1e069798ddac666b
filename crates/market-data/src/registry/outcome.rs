//! Result of a single provider attempt.

use std::fmt;

use crate::models::Candle;

/// Why an attempt produced no usable candles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmptyReason {
    /// The provider answered, but no bar survived parsing and validation.
    NoRows,
    /// The provider call failed (network, timeout, HTTP status, payload).
    Failed(String),
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyReason::NoRows => f.write_str("no valid rows"),
            EmptyReason::Failed(message) => write!(f, "failed: {}", message),
        }
    }
}

/// What one provider attempt yielded.
///
/// The fallback decision matches on this value; provider errors never
/// propagate past the attempt that produced them.
#[derive(Clone, Debug, PartialEq)]
pub enum ProviderOutcome {
    /// Non-empty, validated, truncated candles.
    Candles(Vec<Candle>),
    /// Nothing usable.
    Empty { reason: EmptyReason },
}

impl ProviderOutcome {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Empty {
            reason: EmptyReason::Failed(message.into()),
        }
    }

    /// Wrap candles, collapsing an empty list into `Empty { NoRows }`.
    pub fn from_candles(candles: Vec<Candle>) -> Self {
        if candles.is_empty() {
            Self::Empty {
                reason: EmptyReason::NoRows,
            }
        } else {
            Self::Candles(candles)
        }
    }

    /// Candles carried by this outcome; empty for `Empty`.
    pub fn into_candles(self) -> Vec<Candle> {
        match self {
            Self::Candles(candles) => candles,
            Self::Empty { .. } => Vec::new(),
        }
    }
}
