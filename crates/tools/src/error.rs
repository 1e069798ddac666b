//! Tool error types.

use thiserror::Error;
use tvagent_market_data::MarketDataError;

/// Errors raised while resolving or running a tool.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool is registered under this name.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The tool input failed to decode or validate.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The tool exists but cannot run in this build.
    #[error("{0}")]
    Unavailable(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Error code for programmatic handling by clients.
    pub fn code(&self) -> &'static str {
        match self {
            ToolError::UnknownTool(_) => "UNKNOWN_TOOL",
            ToolError::InvalidInput(_) => "INVALID_INPUT",
            ToolError::Unavailable(_) => "UNAVAILABLE",
            ToolError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<MarketDataError> for ToolError {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::InvalidQuery { field, message } => {
                ToolError::InvalidInput(format!("{}: {}", field, message))
            }
            other => ToolError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(ToolError::UnknownTool("x".into()).code(), "UNKNOWN_TOOL");
        assert_eq!(ToolError::invalid_input("x").code(), "INVALID_INPUT");
        assert_eq!(ToolError::Unavailable("x".into()).code(), "UNAVAILABLE");
        assert_eq!(ToolError::internal("x").code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_invalid_query_maps_to_invalid_input() {
        let err: ToolError = MarketDataError::invalid_query("limit", "too small").into();
        assert!(matches!(err, ToolError::InvalidInput(ref m) if m == "limit: too small"));
    }

    #[test]
    fn test_provider_errors_map_to_internal() {
        let err: ToolError = MarketDataError::Timeout {
            provider: "STOOQ".to_string(),
        }
        .into();
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }
}
