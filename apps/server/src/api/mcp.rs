//! MCP-style REST endpoints: ping, tool listing and tool invocation.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tvagent_tools::{ToolDefinition, ToolInvocation};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Debug, Serialize)]
pub struct PingResponse {
    status: &'static str,
    message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ToolsResponse {
    tools: Vec<ToolDefinition>,
}

#[derive(Debug, Deserialize)]
struct RunRequest {
    tool: String,
    #[serde(default)]
    input: Value,
}

async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        message: "MCP server running",
    })
}

async fn list_tools(State(state): State<Arc<AppState>>) -> Json<ToolsResponse> {
    Json(ToolsResponse {
        tools: state.tools.list(),
    })
}

async fn run_tool(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RunRequest>, JsonRejection>,
) -> ApiResult<Json<ToolInvocation>> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    tracing::debug!("Running tool '{}'", request.tool);

    let invocation = state.tools.invoke(&request.tool, request.input).await?;
    Ok(Json(invocation))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(ping))
        .route("/tools", get(list_tools).post(list_tools))
        .route("/run", post(run_tool))
}
