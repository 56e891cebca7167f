/// Response returned to the Lambda proxy integration
use crate::constants::{
    ALLOW_HEADERS_HEADER, ALLOW_METHODS_HEADER, ALLOW_ORIGIN_HEADER, CONTENT_TYPE_HEADER,
    CONTENT_TYPE_JSON, CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS, CORS_ALLOW_ORIGIN,
};
use crate::error::RelayError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Proxy integration response
///
/// `body` is a JSON document serialized to a string, as API Gateway expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

/// JSON document carried in [`ApiResponse::body`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl ApiResponse {
    pub fn new(status_code: u16, message: impl Into<String>, cors_enabled: bool) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE_HEADER.to_string(), CONTENT_TYPE_JSON.to_string());

        if cors_enabled {
            headers.insert(ALLOW_ORIGIN_HEADER.to_string(), CORS_ALLOW_ORIGIN.to_string());
            headers.insert(ALLOW_METHODS_HEADER.to_string(), CORS_ALLOW_METHODS.to_string());
            headers.insert(ALLOW_HEADERS_HEADER.to_string(), CORS_ALLOW_HEADERS.to_string());
        }

        let message: String = message.into();
        let body = serde_json::json!({ "message": message }).to_string();

        Self {
            status_code,
            headers,
            body,
        }
    }

    pub fn ok(message: impl Into<String>, cors_enabled: bool) -> Self {
        Self::new(200, message, cors_enabled)
    }

    /// Maps an error to its status code, using `message` as the body text
    pub fn from_error(err: &RelayError, message: impl Into<String>, cors_enabled: bool) -> Self {
        Self::new(err.status_code(), message, cors_enabled)
    }

    /// Parses the message back out of the serialized body
    pub fn message(&self) -> Option<String> {
        serde_json::from_str::<MessageBody>(&self.body)
            .ok()
            .map(|b| b.message)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
