//! Response builders for the HTTP handler.

use serde_json::{Value, json};

use crate::core::models::SummarizeResponse;

/// Returns a 200 OK response carrying the summary.
#[must_use]
pub fn ok_summary(url: &str, summary: &str) -> Value {
    let body = SummarizeResponse {
        url: url.to_string(),
        summary: summary.to_string(),
    };
    json!({
        "statusCode": 200,
        "headers": { "Content-Type": "application/json" },
        "body": json!(body).to_string()
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": json!({ "error": message }).to_string()
    })
}
