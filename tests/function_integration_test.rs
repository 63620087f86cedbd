use httpmock::prelude::*;
use waitlist_relay::adapters::function::{handle_event, FunctionEvent};
use waitlist_relay::{LambdaConfig, WaitlistService};

fn service_for(resend: &MockServer) -> WaitlistService {
    let config = LambdaConfig::from_lookup(|name| match name {
        "RESEND_API_KEY" => Some("re_lambda".to_string()),
        "RESEND_API_BASE" => Some(resend.base_url()),
        _ => None,
    });
    WaitlistService::from_config(&config).unwrap()
}

fn post(body: &str) -> FunctionEvent {
    FunctionEvent {
        http_method: "POST".to_string(),
        body: Some(body.to_string()),
    }
}

#[tokio::test]
async fn test_function_sends_mastermind_welcome() {
    let resend = MockServer::start_async().await;
    let send_mock = resend
        .mock_async(|when, then| {
            when.method(POST)
                .path("/emails")
                .header("authorization", "Bearer re_lambda")
                .json_body_partial(r#"{ "subject": "Welcome to the Mastermind Waitlist" }"#);
            then.status(200).json_body(serde_json::json!({ "id": "fn-1" }));
        })
        .await;

    let service = service_for(&resend);
    let response = handle_event(&service, post(r#"{"email":"a@b.com","type":"mastermind"}"#)).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["data"]["id"], "fn-1");
    send_mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_function_rejects_get_without_calling_provider() {
    let resend = MockServer::start_async().await;
    let send_mock = resend
        .mock_async(|when, then| {
            when.method(POST).path("/emails");
            then.status(200).json_body(serde_json::json!({ "id": "never" }));
        })
        .await;

    let service = service_for(&resend);
    let event: FunctionEvent = serde_json::from_str(r#"{"httpMethod":"GET"}"#).unwrap();
    let response = handle_event(&service, event).await;

    assert_eq!(response.status_code, 405);
    assert_eq!(response.body, "Method Not Allowed");
    send_mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_function_missing_email() {
    let resend = MockServer::start_async().await;
    let send_mock = resend
        .mock_async(|when, then| {
            when.method(POST).path("/emails");
            then.status(200).json_body(serde_json::json!({ "id": "never" }));
        })
        .await;

    let service = service_for(&resend);
    let response = handle_event(&service, post(r#"{"type":"retreat"}"#)).await;

    assert_eq!(response.status_code, 400);
    assert_eq!(response.body, r#"{"error":"Email is required"}"#);
    send_mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_function_provider_failure() {
    let resend = MockServer::start_async().await;
    resend
        .mock_async(|when, then| {
            when.method(POST).path("/emails");
            then.status(401).json_body(serde_json::json!({
                "statusCode": 401,
                "message": "API key is invalid",
                "name": "validation_error"
            }));
        })
        .await;

    let service = service_for(&resend);
    let response = handle_event(&service, post(r#"{"email":"a@b.com","type":"system"}"#)).await;

    assert_eq!(response.status_code, 400);
    assert_eq!(response.body, r#"{"error":"API key is invalid"}"#);
}

#[tokio::test]
async fn test_function_unrecognized_category_still_succeeds() {
    let resend = MockServer::start_async().await;
    let send_mock = resend
        .mock_async(|when, then| {
            when.method(POST)
                .path("/emails")
                .json_body_partial(r#"{ "subject": "Welcome to the Remote Retreat Waitlist" }"#);
            then.status(200).json_body(serde_json::json!({ "id": "fn-2" }));
        })
        .await;

    let service = service_for(&resend);
    let response = handle_event(&service, post(r#"{"email":"a@b.com","type":"vip"}"#)).await;

    assert_eq!(response.status_code, 200);
    send_mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_function_non_string_category_still_succeeds() {
    let resend = MockServer::start_async().await;
    let send_mock = resend
        .mock_async(|when, then| {
            when.method(POST)
                .path("/emails")
                .json_body_partial(r#"{ "subject": "Welcome to the Remote Retreat Waitlist" }"#);
            then.status(200).json_body(serde_json::json!({ "id": "fn-3" }));
        })
        .await;

    let service = service_for(&resend);
    let response = handle_event(&service, post(r#"{"email":"a@b.com","type":1}"#)).await;

    assert_eq!(response.status_code, 200);
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["data"]["id"], "fn-3");
    send_mock.assert_hits_async(1).await;
}
