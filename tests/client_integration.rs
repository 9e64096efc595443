// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Integration tests for the HTTP client
//!
//! These tests verify bearer decoration, action routing, status handling
//! and lenient decoding against a mocked backend.

use anyhow::Result;
use fittrack_client::auth::StaticToken;
use fittrack_client::client::ApiClient;
use fittrack_client::config::ClientConfig;
use fittrack_client::errors::ApiError;
use fittrack_client::models::{LoginRequest, PlanListResponse};
use fittrack_client::services::{AuthService, ExerciseService, WorkoutPlanService};
use mockito::{Matcher, Server};
use serde_json::json;
use std::sync::Arc;

fn client_for(server: &Server) -> Result<ApiClient> {
    ApiClient::new(&ClientConfig::with_base_url(server.url()))
}

#[tokio::test]
async fn test_bearer_token_attached_when_available() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/esercizi.php")
        .match_header("authorization", "Bearer tok_live")
        .with_status(200)
        .with_body(json!([{"id": "3", "nome": "Squat"}]).to_string())
        .create_async()
        .await;

    let client = client_for(&server)?;
    client
        .attach_token_source(Arc::new(StaticToken::new("tok_live")))
        .await;

    let exercises = client.list_exercises().await?;
    assert_eq!(exercises.len(), 1);
    assert_eq!(exercises[0].id, 3);
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_requests_go_out_unauthenticated_without_token() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/esercizi.php")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("[]")
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server)?;
    client.attach_token_source(Arc::new(StaticToken::none())).await;
    assert!(client.list_exercises().await?.is_empty());

    client.detach_token_source().await;
    assert!(client.list_exercises().await?.is_empty());

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_action_query_and_body_are_sent() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/auth.php")
        .match_query(Matcher::UrlEncoded("action".into(), "login".into()))
        .match_body(Matcher::PartialJson(json!({"username": "anna", "password": "pw"})))
        .with_status(200)
        .with_body(json!({"token": "t1", "user": {"id": 4, "username": "anna"}}).to_string())
        .create_async()
        .await;

    let client = client_for(&server)?;
    let response = client
        .login(&LoginRequest {
            username: "anna".to_string(),
            password: "pw".to_string(),
        })
        .await?;

    assert_eq!(response.token.as_deref(), Some("t1"));
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_non_success_status_is_an_error() -> Result<()> {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/schede_standalone.php")
        .match_query(Matcher::UrlEncoded("user_id".into(), "1".into()))
        .with_status(401)
        .with_body(json!({"message": "Token non valido"}).to_string())
        .create_async()
        .await;

    let client = client_for(&server)?;
    let err = WorkoutPlanService::list_plans(&client, 1).await.unwrap_err();

    assert_eq!(err.status_code(), Some(401));
    assert!(err.to_string().contains("Token non valido"));
    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() -> Result<()> {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/schede_standalone.php")
        .match_query(Matcher::UrlEncoded("user_id".into(), "1".into()))
        .with_status(200)
        .with_body("{\"success\": true, \"schede\": [")
        .create_async()
        .await;

    let client = client_for(&server)?;
    let err = WorkoutPlanService::list_plans(&client, 1).await.unwrap_err();

    assert!(err.is_decode());
    assert!(!err.is_network());
    Ok(())
}

#[tokio::test]
async fn test_lenient_body_with_php_notice() -> Result<()> {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/schede_standalone.php")
        .match_query(Matcher::UrlEncoded("user_id".into(), "9".into()))
        .with_status(200)
        .with_body(
            "<b>Warning</b>: session_start() already sent\n\
             {\"success\": \"1\", \"schede\": [{\"id\": \"12\", \"nome\": \"Forza A\", \
             \"esercizi\": [{\"id\": 1, \"nome\": \"Stacco\", \"peso\": \"82,5\", \"serie\": \"5\"}]}]}",
        )
        .create_async()
        .await;

    let client = client_for(&server)?;
    let response: PlanListResponse = WorkoutPlanService::list_plans(&client, 9).await?;

    assert!(response.success);
    assert_eq!(response.plans[0].id, 12);
    assert_eq!(response.plans[0].exercises[0].weight, 82.5);
    assert_eq!(response.plans[0].exercises[0].sets, 5);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_backend_is_a_network_error() -> Result<()> {
    let client = ApiClient::new(&ClientConfig::with_base_url("http://127.0.0.1:1/"))?;
    let err = client.get_exercise(1).await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
    assert!(err.is_network());
    Ok(())
}
