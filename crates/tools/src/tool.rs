//! The tool abstraction and its type-erased form.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ToolError;

/// Metadata advertised for a tool in the listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub title: String,
    pub description: String,
    /// JSON schema of the accepted input object.
    pub input_schema: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<Value>,
}

/// A callable tool with typed arguments and output.
///
/// `Args` is serialized back after decoding so callers can see the input with
/// defaults applied.
#[async_trait]
pub trait Tool: Send + Sync {
    const NAME: &'static str;

    type Args: DeserializeOwned + Serialize + Send;
    type Output: Serialize + Send;

    fn definition(&self) -> ToolDefinition;

    async fn call(&self, args: Self::Args) -> Result<Self::Output, ToolError>;
}

/// Result of a successful invocation: the tool name, the normalized input and
/// the tool output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
    pub tool: String,
    pub input: Value,
    pub result: Value,
}

/// Object-safe wrapper so tools with different `Args`/`Output` types can live
/// in one registry.
#[async_trait]
pub(crate) trait ErasedTool: Send + Sync {
    fn tool_name(&self) -> &'static str;

    fn describe(&self) -> ToolDefinition;

    async fn invoke(&self, input: Value) -> Result<ToolInvocation, ToolError>;
}

#[async_trait]
impl<T> ErasedTool for T
where
    T: Tool + 'static,
{
    fn tool_name(&self) -> &'static str {
        T::NAME
    }

    fn describe(&self) -> ToolDefinition {
        Tool::definition(self)
    }

    async fn invoke(&self, input: Value) -> Result<ToolInvocation, ToolError> {
        let input = if input.is_null() {
            Value::Object(Default::default())
        } else {
            input
        };

        let args: T::Args = serde_json::from_value(input)
            .map_err(|e| ToolError::invalid_input(e.to_string()))?;
        let normalized =
            serde_json::to_value(&args).map_err(|e| ToolError::internal(e.to_string()))?;

        let output = self.call(args).await?;
        let result = serde_json::to_value(output).map_err(|e| ToolError::internal(e.to_string()))?;

        Ok(ToolInvocation {
            tool: T::NAME.to_string(),
            input: normalized,
            result,
        })
    }
}
