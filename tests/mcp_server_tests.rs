// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON-RPC dispatch tests for the weather MCP server.

use serde_json::{json, Value};
use strava_toolkit::mcp::protocol::JsonRpcRequest;
use strava_toolkit::mcp::{handle_request, serve};
use strava_toolkit::services::{WeatherClient, WeatherTool};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::test_weather_config;

fn test_tool(server: &MockServer) -> WeatherTool {
    WeatherTool::new(WeatherClient::new(&test_weather_config(server)))
}

/// Feed `lines` through the stdio loop and collect the JSON responses.
async fn run_session(tool: &WeatherTool, lines: &[Value]) -> Vec<Value> {
    let input = lines
        .iter()
        .map(|line| format!("{}\n", line))
        .collect::<String>();
    let mut output = Vec::new();

    serve(tool, input.as_bytes(), &mut output).await.unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_initialize_and_list_tools() {
    let server = MockServer::start().await;
    let tool = test_tool(&server);

    let responses = run_session(
        &tool,
        &[
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
        ],
    )
    .await;

    // The notification gets no reply.
    assert_eq!(responses.len(), 2);

    let init = &responses[0];
    assert_eq!(init["id"], 1);
    assert_eq!(init["result"]["protocolVersion"], "2025-03-26");
    assert_eq!(init["result"]["serverInfo"]["name"], "weather_mcp");

    let tools = responses[1]["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0]["name"], "get_forecast_weather_data");
    assert_eq!(tools[0]["inputSchema"]["type"], "object");
    assert_eq!(tools[0]["inputSchema"]["required"], json!(["location"]));
    assert_eq!(
        tools[0]["inputSchema"]["properties"]["location"]["type"],
        "string"
    );
}

#[tokio::test]
async fn test_tools_call_dispatches_to_weather_tool() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/weather/forecast"))
        .and(query_param("location", "paris"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(include_str!("fixtures/forecast_daily.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let tool = test_tool(&server);
    let responses = run_session(
        &tool,
        &[json!({
            "jsonrpc": "2.0",
            "id": "call-1",
            "method": "tools/call",
            "params": {
                "name": "get_forecast_weather_data",
                "arguments": {"location": "paris"}
            }
        })],
    )
    .await;

    assert_eq!(responses.len(), 1);
    let result = &responses[0]["result"];
    assert_eq!(responses[0]["id"], "call-1");
    assert_eq!(result["isError"], false);
    assert_eq!(result["content"][0]["type"], "text");

    let forecast: Value =
        serde_json::from_str(result["content"][0]["text"].as_str().unwrap()).unwrap();
    assert!(forecast["location"].as_str().unwrap().starts_with("Paris"));
    assert_eq!(forecast["forecast"].as_array().unwrap().len(), 2);
    assert!(forecast["forecast"][1]["humidity_avg"].is_null());
}

#[tokio::test]
async fn test_tools_call_upstream_failure_is_error_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/weather/forecast"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid apikey"))
        .mount(&server)
        .await;

    let tool = test_tool(&server);
    let response = handle_request(
        &tool,
        serde_json::from_value::<JsonRpcRequest>(json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "tools/call",
            "params": {"name": "get_forecast_weather_data", "arguments": {"location": "paris"}}
        }))
        .unwrap(),
    )
    .await
    .expect("request with id gets a response");

    let result = response.result.expect("tool failures are results, not errors");
    assert_eq!(result["isError"], true);
    assert_eq!(result["content"][0]["text"], "null");
}

#[tokio::test]
async fn test_unknown_tool_and_method() {
    let server = MockServer::start().await;
    let tool = test_tool(&server);

    let responses = run_session(
        &tool,
        &[
            json!({"jsonrpc": "2.0", "id": 1, "method": "tools/call",
                   "params": {"name": "get_activities", "arguments": {}}}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "resources/list"}),
        ],
    )
    .await;

    assert_eq!(responses[0]["error"]["code"], -32601);
    assert!(responses[0]["error"]["message"]
        .as_str()
        .unwrap()
        .contains("get_activities"));
    assert_eq!(responses[1]["error"]["code"], -32601);
    assert!(responses[1].get("result").is_none());
}

#[tokio::test]
async fn test_malformed_line_is_parse_error() {
    let server = MockServer::start().await;
    let tool = test_tool(&server);

    let mut output = Vec::new();
    serve(&tool, &b"{not json\n"[..], &mut output).await.unwrap();

    let response: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(response["error"]["code"], -32700);
    assert!(response["id"].is_null());
}
