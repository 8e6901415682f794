// SPDX-FileCopyrightText: 2025 WorkTrace Contributors
//
// SPDX-License-Identifier: MIT

//! Integration tests for the public documentation routes and the CORS policy

use api::{AppConfig, Server, ShutdownConfig};
use axum::http::StatusCode;

async fn start_server() -> std::net::SocketAddr {
    let (addr, _) = Server::new(AppConfig::for_testing(), ShutdownConfig::default())
        .expect("Failed to create server")
        .run_for_testing()
        .await
        .expect("Failed to start test server");
    addr
}

#[tokio::test]
async fn openapi_spec_is_public() {
    let addr = start_server().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{addr}/api-doc/openapi.json"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let spec: serde_json::Value = response.json().await.expect("Failed to parse spec");
    assert_eq!(spec["info"]["title"], "WorkTraceApi");
    assert_eq!(
        spec["components"]["securitySchemes"]["Bearer"]["scheme"],
        "bearer"
    );
    assert_eq!(
        spec["components"]["securitySchemes"]["Bearer"]["bearerFormat"],
        "JWT"
    );
}

#[tokio::test]
async fn swagger_ui_is_public() {
    let addr = start_server().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{addr}/swagger-ui"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("swagger-ui"));
}

#[tokio::test]
async fn health_is_public() {
    let addr = start_server().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{addr}/health"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["status"], "Up");
}

#[tokio::test]
async fn preflight_from_arbitrary_origin_is_allowed() {
    let addr = start_server().await;

    let client = reqwest::Client::new();
    let response = client
        .request(reqwest::Method::OPTIONS, format!("http://{addr}/v1/me"))
        .header("Origin", "https://random-frontend.example")
        .header("Access-Control-Request-Method", "GET")
        .header("Access-Control-Request-Headers", "authorization")
        .send()
        .await
        .expect("Failed to send preflight");

    assert!(response.status().is_success());
    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("allow-origin header")
        .to_str()
        .expect("header value");
    assert_eq!(allow_origin, "*");

    let allow_methods = response
        .headers()
        .get("access-control-allow-methods")
        .expect("allow-methods header")
        .to_str()
        .expect("header value");
    assert_eq!(allow_methods, "*");
}

#[tokio::test]
async fn cors_headers_attach_to_simple_requests() {
    let addr = start_server().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{addr}/health"))
        .header("Origin", "https://random-frontend.example")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .expect("allow-origin header"),
        "*"
    );
}
