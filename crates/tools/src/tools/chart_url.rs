//! Chart URL tool - build a TradingView chart link.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CHART_INTERVAL, DEFAULT_CHART_URL};
use crate::error::ToolError;
use crate::tool::{Tool, ToolDefinition};

/// Arguments for the tradingview_chart_url tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartUrlArgs {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartUrlOutput {
    pub url: String,
}

/// Build the chart URL for a symbol, upper-casing and percent-encoding it.
pub fn chart_url(symbol: &str, interval: Option<&str>) -> Result<String, ToolError> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(ToolError::invalid_input("symbol must not be empty"));
    }
    let interval = interval
        .map(str::trim)
        .filter(|i| !i.is_empty())
        .unwrap_or(DEFAULT_CHART_INTERVAL);

    Ok(format!(
        "{}?symbol={}&interval={}",
        DEFAULT_CHART_URL,
        urlencoding::encode(&symbol.to_uppercase()),
        urlencoding::encode(interval)
    ))
}

/// Tool returning a TradingView chart URL. Makes no network calls.
#[derive(Debug, Default, Clone)]
pub struct ChartUrlTool;

impl ChartUrlTool {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for ChartUrlTool {
    const NAME: &'static str = "tradingview_chart_url";

    type Args = ChartUrlArgs;
    type Output = ChartUrlOutput;

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            title: "TradingView chart URL".to_string(),
            description: "Return a TradingView chart URL for a symbol+interval.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "symbol": { "type": "string", "description": "Eg AAPL, BTCUSD, OMX30" },
                    "interval": { "type": "string", "description": "1m, 15m, 1h, 4h, 1D, etc" }
                },
                "required": ["symbol"]
            }),
            output_schema: Some(serde_json::json!({
                "type": "object",
                "properties": { "url": { "type": "string" } },
                "required": ["url"]
            })),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, ToolError> {
        let url = chart_url(&args.symbol, args.interval.as_deref())?;
        Ok(ChartUrlOutput { url })
    }
}
