//! Serverless entry point: API-gateway style events in, `{statusCode, headers, body}` out.

use crate::core::waitlist::WaitlistService;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    #[serde(default)]
    pub http_method: String,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl FunctionResponse {
    fn json(status_code: u16, body: &impl Serialize) -> Self {
        let (status_code, body) = match serde_json::to_string(body) {
            Ok(body) => (status_code, body),
            Err(e) => {
                tracing::error!("failed to encode response body: {}", e);
                (500, r#"{"error":"Internal Server Error"}"#.to_string())
            }
        };

        Self {
            status_code,
            headers: HashMap::from([("Content-Type".to_string(), "application/json".to_string())]),
            body,
        }
    }

    fn method_not_allowed() -> Self {
        Self {
            status_code: 405,
            headers: HashMap::from([
                ("Content-Type".to_string(), "text/plain".to_string()),
                ("Allow".to_string(), "POST".to_string()),
            ]),
            body: "Method Not Allowed".to_string(),
        }
    }
}

/// Handles one invocation. Only `POST` reaches the service.
pub async fn handle_event(service: &WaitlistService, event: FunctionEvent) -> FunctionResponse {
    if event.http_method != "POST" {
        tracing::debug!(method = %event.http_method, "rejecting non-POST invocation");
        return FunctionResponse::method_not_allowed();
    }

    let body = event.body.unwrap_or_default();
    match service.handle(body.as_bytes()).await {
        Ok(ack) => FunctionResponse::json(200, &ack),
        Err(e) => FunctionResponse::json(e.status_code(), &e.error_body()),
    }
}
