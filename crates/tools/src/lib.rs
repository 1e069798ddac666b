//! Tool layer for the TradingView agent.
//!
//! Each tool declares its input schema, decodes a JSON input into typed
//! arguments, and returns a serializable result. [`ToolRegistry`] lists the
//! tools and dispatches calls by name.

pub mod constants;
pub mod error;
pub mod registry;
pub mod tool;
pub mod tools;

pub use constants::*;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolDefinition, ToolInvocation};
pub use tools::{BacktestInUiTool, ChartUrlTool, GetOhlcvTool};
