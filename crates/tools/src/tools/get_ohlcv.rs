//! OHLCV tool - fetch candles through the provider registry.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{de, Deserialize, Deserializer, Serialize};
use tvagent_market_data::{
    CandleQuery, CandleResult, Interval, ProviderRegistry, DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT,
};

use crate::error::ToolError;
use crate::tool::{Tool, ToolDefinition};

// ============================================================================
// Tool Arguments
// ============================================================================

/// Arguments for the get_ohlcv tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetOhlcvArgs {
    pub symbol: String,
    #[serde(default)]
    pub interval: Interval,
    #[serde(default = "default_limit", deserialize_with = "deserialize_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Accept any integral JSON number, so `10` and `10.0` are the same limit.
fn deserialize_limit<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(n) = number.as_u64() {
        return usize::try_from(n).map_err(de::Error::custom);
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= 0.0 && f <= MAX_LIMIT as f64 => Ok(f as usize),
        Some(f) if f.fract() == 0.0 && f > MAX_LIMIT as f64 => Ok(usize::MAX),
        _ => Err(de::Error::custom(format!(
            "limit must be a non-negative integer, got {}",
            number
        ))),
    }
}

// ============================================================================
// Tool Implementation
// ============================================================================

/// Tool returning OHLCV candles, primary provider first with one fallback.
pub struct GetOhlcvTool {
    candles: Arc<ProviderRegistry>,
}

impl GetOhlcvTool {
    pub fn new(candles: Arc<ProviderRegistry>) -> Self {
        Self { candles }
    }
}

#[async_trait]
impl Tool for GetOhlcvTool {
    const NAME: &'static str = "get_ohlcv";

    type Args = GetOhlcvArgs;
    type Output = CandleResult;

    fn definition(&self) -> ToolDefinition {
        let intervals: Vec<&str> = Interval::ALL.iter().map(|i| i.as_str()).collect();

        ToolDefinition {
            name: Self::NAME.to_string(),
            title: "Get OHLCV candles".to_string(),
            description: "Fetch OHLCV candles from Stooq, falling back to Yahoo Finance when Stooq has no data.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "symbol": {
                        "type": "string",
                        "description": "Ticker or alias, e.g. aapl.us, spy.us, btcusd, OMXS30"
                    },
                    "interval": {
                        "type": "string",
                        "enum": intervals,
                        "default": Interval::default().as_str()
                    },
                    "limit": {
                        "type": "integer",
                        "minimum": MIN_LIMIT,
                        "maximum": MAX_LIMIT,
                        "default": DEFAULT_LIMIT
                    }
                },
                "required": ["symbol"]
            }),
            output_schema: Some(serde_json::json!({
                "type": "object",
                "properties": {
                    "symbol": { "type": "string" },
                    "interval": { "type": "string" },
                    "candles": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "time": { "type": "string" },
                                "open": { "type": "number" },
                                "high": { "type": "number" },
                                "low": { "type": "number" },
                                "close": { "type": "number" },
                                "volume": { "type": "number" }
                            },
                            "required": ["time", "open", "high", "low", "close"]
                        }
                    },
                    "source": { "type": "string", "enum": ["primary", "fallback"] },
                    "provider": { "type": "string" }
                },
                "required": ["symbol", "interval", "candles", "source"]
            })),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, ToolError> {
        let query = CandleQuery {
            symbol: args.symbol,
            interval: args.interval,
            limit: args.limit,
        };
        query.validate_tool_bounds()?;

        Ok(self.candles.fetch_candles(&query).await?)
    }
}
