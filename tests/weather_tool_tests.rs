// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weather tool tests against a mocked Tomorrow.io endpoint.

use serde_json::json;
use strava_toolkit::services::{WeatherClient, WeatherTool};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::test_weather_config;

fn test_tool(server: &MockServer) -> WeatherTool {
    WeatherTool::new(WeatherClient::new(&test_weather_config(server)))
}

#[tokio::test]
async fn test_forecast_is_flattened() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/weather/forecast"))
        .and(query_param("location", "paris"))
        .and(query_param("timesteps", "1d"))
        .and(query_param("units", "metric"))
        .and(query_param("apikey", "test_api_key"))
        .and(header("accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(include_str!("fixtures/forecast_daily.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let forecast = test_tool(&server)
        .execute("paris")
        .await
        .expect("forecast should be returned");

    assert!(forecast.location.starts_with("Paris"));
    assert_eq!(forecast.forecast.len(), 2);

    let first = &forecast.forecast[0];
    assert_eq!(first.date, "2026-10-19T04:00:00Z");
    assert_eq!(first.humidity_avg, Some(81.2));
    assert_eq!(first.precipitation_probability_max, Some(45.0));
    assert_eq!(first.sunset_time.as_deref(), Some("2026-10-19T17:02:00Z"));

    let second = &forecast.forecast[1];
    assert_eq!(second.humidity_avg, None);
    assert_eq!(second.temperature_avg, Some(12.8));
}

#[tokio::test]
async fn test_tool_call_emits_null_for_missing_values() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/weather/forecast"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(include_str!("fixtures/forecast_daily.json")),
        )
        .mount(&server)
        .await;

    let result = test_tool(&server).call(&json!({"location": "paris"})).await;
    let day = result["forecast"][1].as_object().unwrap();

    assert_eq!(day.len(), 15);
    assert!(day.contains_key("humidity_avg"));
    assert!(day["humidity_avg"].is_null());
    assert!(day["sunrise_time"].is_null());
}

#[tokio::test]
async fn test_upstream_error_returns_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/weather/forecast"))
        .respond_with(ResponseTemplate::new(401).set_body_string(
            r#"{"code":401001,"type":"Invalid Auth","message":"The method requires authentication but it was not presented or is invalid."}"#,
        ))
        .mount(&server)
        .await;

    let tool = test_tool(&server);
    assert!(tool.execute("paris").await.is_none());
    assert!(tool.call(&json!({"location": "paris"})).await.is_null());
}

#[tokio::test]
async fn test_payload_without_timelines_returns_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/weather/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"location": {"name": "x"}})))
        .mount(&server)
        .await;

    assert!(test_tool(&server).execute("x").await.is_none());
}

#[tokio::test]
async fn test_call_without_location_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let tool = test_tool(&server);
    assert!(tool.call(&json!({})).await.is_null());
    assert_eq!(tool.parameters()["required"], json!(["location"]));
    assert_eq!(WeatherTool::NAME, "get_forecast_weather_data");
}
