// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request dispatch and the line-delimited stdio loop.

use crate::mcp::protocol::{
    error, success, InitializeResponse, JsonRpcRequest, JsonRpcResponse, McpTool,
    ServerCapabilities, ServerInfo, ToolsCallRequest, ToolsCallResponse, ToolsListResponse,
    INTERNAL_ERROR, INVALID_PARAMS, MCP_PROTOCOL_VERSION, METHOD_NOT_FOUND, PARSE_ERROR,
    SERVER_NAME,
};
use crate::services::WeatherTool;
use serde::Serialize;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Handle one request. Notifications (no `id`) get no response.
pub async fn handle_request(
    tool: &WeatherTool,
    request: JsonRpcRequest,
) -> Option<JsonRpcResponse> {
    let Some(id) = request.id else {
        tracing::debug!(method = %request.method, "Ignoring notification");
        return None;
    };

    let response = match request.method.as_str() {
        "initialize" => to_result(id, initialize()),
        "ping" => success(id, serde_json::json!({})),
        "tools/list" => to_result(id, list_tools(tool)),
        "tools/call" => match serde_json::from_value::<ToolsCallRequest>(request.params) {
            Ok(call) if call.name == WeatherTool::NAME => {
                to_result(id, call_weather(tool, &call.arguments).await)
            }
            Ok(call) => error(id, METHOD_NOT_FOUND, format!("unknown tool: {}", call.name)),
            Err(e) => error(id, INVALID_PARAMS, format!("invalid tools/call params: {}", e)),
        },
        other => error(id, METHOD_NOT_FOUND, format!("method not found: {}", other)),
    };

    Some(response)
}

fn initialize() -> InitializeResponse {
    InitializeResponse {
        protocol_version: MCP_PROTOCOL_VERSION.to_string(),
        capabilities: ServerCapabilities::default(),
        server_info: ServerInfo {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    }
}

fn list_tools(tool: &WeatherTool) -> ToolsListResponse {
    ToolsListResponse {
        tools: vec![McpTool {
            name: WeatherTool::NAME.to_string(),
            description: tool.description().to_string(),
            input_schema: tool.parameters(),
        }],
    }
}

async fn call_weather(tool: &WeatherTool, arguments: &Value) -> ToolsCallResponse {
    let result = tool.call(arguments).await;
    let is_error = result.is_null();
    ToolsCallResponse::text(result.to_string(), is_error)
}

fn to_result<T: Serialize>(id: Value, result: T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => success(id, value),
        Err(e) => error(id, INTERNAL_ERROR, format!("failed to encode result: {}", e)),
    }
}

/// Serve line-delimited JSON-RPC from `reader` to `writer` until EOF.
pub async fn serve<R, W>(tool: &WeatherTool, reader: R, mut writer: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<JsonRpcRequest>(trimmed) {
            Ok(request) => handle_request(tool, request).await,
            Err(e) => Some(error(Value::Null, PARSE_ERROR, format!("parse error: {}", e))),
        };

        if let Some(response) = response {
            writer
                .write_all(serde_json::to_string(&response)?.as_bytes())
                .await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
    }

    Ok(())
}
