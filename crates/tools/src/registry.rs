//! Name-indexed tool registry.

use std::sync::Arc;

use log::{debug, warn};
use serde_json::Value;
use tvagent_market_data::ProviderRegistry;

use crate::error::ToolError;
use crate::tool::{ErasedTool, Tool, ToolDefinition, ToolInvocation};
use crate::tools::{BacktestInUiTool, ChartUrlTool, GetOhlcvTool};

/// Holds the registered tools in listing order and dispatches calls by name.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn ErasedTool>>,
}

impl ToolRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard tool set: candles, chart URL and the backtest placeholder.
    pub fn standard(candles: Arc<ProviderRegistry>, chart_url: impl Into<String>) -> Self {
        Self::new()
            .register(GetOhlcvTool::new(candles))
            .register(ChartUrlTool::new())
            .register(BacktestInUiTool::new(chart_url))
    }

    /// Add a tool. A tool registered under an existing name replaces it.
    pub fn register<T: Tool + 'static>(mut self, tool: T) -> Self {
        self.tools.retain(|t| t.tool_name() != T::NAME);
        self.tools.push(Arc::new(tool));
        self
    }

    /// Definitions of every registered tool.
    pub fn list(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.describe()).collect()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.tool_name()).collect()
    }

    /// Run the named tool with a raw JSON input.
    pub async fn invoke(&self, name: &str, input: Value) -> Result<ToolInvocation, ToolError> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.tool_name() == name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        debug!("Invoking tool '{}'", name);
        let result = tool.invoke(input).await;
        if let Err(e) = &result {
            warn!("Tool '{}' failed: {}", name, e);
        }
        result
    }
}
