/// Event payload fixtures
use comment_relay_worker::ApiResponse;
use lambda_runtime::{Context, LambdaEvent};
use serde_json::{Value, json};

/// REST API proxy event carrying a JSON-encoded body
pub fn post_event(body: &str) -> Value {
    json!({
        "resource": "/comments",
        "path": "/comments",
        "httpMethod": "POST",
        "headers": { "Content-Type": "application/json" },
        "isBase64Encoded": false,
        "body": body
    })
}

/// REST API proxy event whose body is `{"comment": <comment>}`
pub fn comment_event(comment: &str) -> Value {
    post_event(&json!({ "comment": comment }).to_string())
}

pub fn preflight_event() -> Value {
    json!({
        "resource": "/comments",
        "path": "/comments",
        "httpMethod": "OPTIONS",
        "headers": {
            "Origin": "https://www.acme.com",
            "Access-Control-Request-Method": "POST"
        },
        "body": null
    })
}

/// HTTP API (payload format 2.0) event
pub fn http_api_event(method: &str, body: &str) -> Value {
    json!({
        "version": "2.0",
        "routeKey": "POST /comments",
        "rawPath": "/comments",
        "requestContext": {
            "http": { "method": method, "path": "/comments" }
        },
        "isBase64Encoded": false,
        "body": body
    })
}

pub fn lambda_event(payload: Value) -> LambdaEvent<Value> {
    LambdaEvent::new(payload, Context::default())
}

/// Parses the handler output back into a response
pub fn parse_response(value: Value) -> ApiResponse {
    serde_json::from_value(value).expect("handler output is a proxy response")
}
