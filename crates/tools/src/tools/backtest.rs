//! Backtest tool - run a Pine strategy in the TradingView Strategy Tester.
//!
//! Driving the TradingView UI needs a logged-in browser session. This build
//! has no browser driver, so the tool validates its input and then reports
//! itself unavailable.

use async_trait::async_trait;
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::ToolError;
use crate::tool::{Tool, ToolDefinition};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestArgs {
    pub pine_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_url: Option<String>,
}

/// Strategy Tester summary as scraped from the UI. Fields are absent when the
/// metric could not be read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestMetrics {
    pub net_profit: Option<String>,
    pub win_rate: Option<String>,
    pub drawdown: Option<String>,
}

pub struct BacktestInUiTool {
    default_chart_url: String,
}

impl BacktestInUiTool {
    pub fn new(default_chart_url: impl Into<String>) -> Self {
        Self {
            default_chart_url: default_chart_url.into(),
        }
    }

    fn resolve_chart_url<'a>(&'a self, args: &'a BacktestArgs) -> Result<&'a str, ToolError> {
        let url = args
            .chart_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(self.default_chart_url.as_str());

        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ToolError::invalid_input(format!(
                "chartUrl must be an http(s) URL, got '{}'",
                url
            )));
        }
        Ok(url)
    }
}

#[async_trait]
impl Tool for BacktestInUiTool {
    const NAME: &'static str = "tv_backtest_in_ui";

    type Args = BacktestArgs;
    type Output = BacktestMetrics;

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            title: "Backtest Pine in TradingView UI".to_string(),
            description: "Opens TradingView, pastes Pine code, runs Strategy Tester, and returns key metrics. Requires a browser driver; unavailable in this build.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "pineCode": { "type": "string", "description": "Full Pine v5 script" },
                    "chartUrl": {
                        "type": "string",
                        "description": "TradingView chart URL. Defaults to TV_CHART_URL"
                    }
                },
                "required": ["pineCode"]
            }),
            output_schema: Some(serde_json::json!({
                "type": "object",
                "properties": {
                    "netProfit": { "type": ["string", "null"] },
                    "winRate": { "type": ["string", "null"] },
                    "drawdown": { "type": ["string", "null"] }
                }
            })),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, ToolError> {
        if args.pine_code.trim().is_empty() {
            return Err(ToolError::invalid_input("pineCode must not be empty"));
        }
        let url = self.resolve_chart_url(&args)?;

        info!(
            "Backtest requested on {} ({} bytes of Pine), no browser driver available",
            url,
            args.pine_code.len()
        );
        Err(ToolError::Unavailable(
            "tv_backtest_in_ui needs a browser session and is not available on this server"
                .to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_CHART_URL;

    fn args(pine: &str, url: Option<&str>) -> BacktestArgs {
        BacktestArgs {
            pine_code: pine.to_string(),
            chart_url: url.map(str::to_string),
        }
    }

    #[test]
    fn test_args_use_camel_case() {
        let parsed: BacktestArgs = serde_json::from_value(serde_json::json!({
            "pineCode": "strategy(\"x\")",
            "chartUrl": "https://www.tradingview.com/chart/abc/"
        }))
        .unwrap();
        assert_eq!(parsed.chart_url.as_deref(), Some("https://www.tradingview.com/chart/abc/"));
    }

    #[test]
    fn test_chart_url_falls_back_to_default() {
        let tool = BacktestInUiTool::new(DEFAULT_CHART_URL);
        let a = args("strategy(\"x\")", None);
        assert_eq!(tool.resolve_chart_url(&a).unwrap(), DEFAULT_CHART_URL);

        let a = args("strategy(\"x\")", Some("ftp://nope"));
        assert!(tool.resolve_chart_url(&a).is_err());
    }

    #[tokio::test]
    async fn test_valid_input_is_unavailable() {
        let tool = BacktestInUiTool::new(DEFAULT_CHART_URL);
        let err = tool.call(args("strategy(\"x\")", None)).await.unwrap_err();
        assert_eq!(err.code(), "UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_blank_pine_is_invalid() {
        let tool = BacktestInUiTool::new(DEFAULT_CHART_URL);
        let err = tool.call(args("  ", None)).await.unwrap_err();
        assert_eq!(err.code(), "INVALID_INPUT");
    }
}
