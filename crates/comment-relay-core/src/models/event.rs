/// Inbound Lambda invocation event
///
/// The relay accepts API Gateway proxy events (REST and HTTP API payloads)
/// as well as the legacy flat shape `{"comment": "..."}`. Every field is kept
/// as a raw JSON value so that a field of the wrong type only disqualifies
/// that field, never the whole event.
use crate::constants::PREFLIGHT_METHOD;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundEvent {
    #[serde(rename = "httpMethod", default)]
    pub http_method: Option<Value>,
    /// JSON-encoded request body, e.g. `"{\"comment\": \"...\"}"`
    #[serde(default)]
    pub body: Option<Value>,
    /// Legacy flat comment field
    #[serde(default)]
    pub comment: Option<Value>,
    #[serde(rename = "isBase64Encoded", default)]
    pub is_base64_encoded: Option<Value>,
    #[serde(rename = "requestContext", default)]
    pub request_context: Option<Value>,
}

impl InboundEvent {
    /// Builds an event from a raw invocation payload
    ///
    /// A payload that is not a JSON object yields an event with no fields.
    pub fn from_payload(payload: Value) -> Self {
        if !payload.is_object() {
            debug!("Payload is not an event object, treating as empty");
            return Self::default();
        }

        serde_json::from_value(payload).unwrap_or_else(|e| {
            debug!(error = %e, "Payload is not a valid event, treating as empty");
            Self::default()
        })
    }

    /// HTTP method of the request, if the event carries one
    ///
    /// Falls back to `requestContext.http.method` (HTTP API payload v2).
    pub fn method(&self) -> Option<&str> {
        self.http_method
            .as_ref()
            .and_then(Value::as_str)
            .or_else(|| {
                self.request_context
                    .as_ref()
                    .and_then(|ctx| ctx.pointer("/http/method"))
                    .and_then(Value::as_str)
            })
    }

    pub fn is_preflight(&self) -> bool {
        self.method()
            .is_some_and(|m| m.eq_ignore_ascii_case(PREFLIGHT_METHOD))
    }

    /// Extracts the submitted comment
    ///
    /// The enveloped `body` is consulted first, then the flat `comment`
    /// field. Returns `None` when neither yields a string; blankness is
    /// checked by the caller.
    pub fn comment(&self) -> Option<String> {
        self.enveloped_comment().or_else(|| self.flat_comment())
    }

    fn flat_comment(&self) -> Option<String> {
        self.comment
            .as_ref()
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn enveloped_comment(&self) -> Option<String> {
        let raw = self.body.as_ref()?.as_str()?;

        let decoded;
        let text = if self.body_is_base64() {
            decoded = decode_base64_body(raw)?;
            decoded.as_str()
        } else {
            raw
        };

        let parsed: Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(e) => {
                debug!(error = %e, "Request body is not valid JSON");
                return None;
            }
        };

        parsed
            .get("comment")
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn body_is_base64(&self) -> bool {
        self.is_base64_encoded
            .as_ref()
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

fn decode_base64_body(raw: &str) -> Option<String> {
    let bytes = STANDARD
        .decode(raw.trim())
        .map_err(|e| debug!(error = %e, "Request body is not valid base64"))
        .ok()?;

    String::from_utf8(bytes)
        .map_err(|e| debug!(error = %e, "Decoded request body is not UTF-8"))
        .ok()
}
