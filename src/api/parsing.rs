use base64::{Engine as _, engine::general_purpose};
use serde_json::Value;
use url::Url;

use crate::core::models::SummarizeRequest;
use crate::errors::ReviewError;

pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL.";

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Decodes the request body of an API Gateway event, undoing base64 when
/// the gateway flagged it.
pub fn decode_body(payload: &Value) -> Result<Option<String>, ReviewError> {
    let Some(raw) = v_str(payload, &["body"]) else {
        return Ok(None);
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !is_base64 {
        return Ok(Some(raw.to_string()));
    }

    let bytes = general_purpose::STANDARD
        .decode(raw)
        .map_err(|e| ReviewError::InvalidRequest(format!("Invalid base64 body: {e}")))?;
    String::from_utf8(bytes)
        .map(Some)
        .map_err(|e| ReviewError::InvalidRequest(format!("Body is not UTF-8: {e}")))
}

/// Finds the product URL in an incoming event.
///
/// The JSON body's `url` field wins; otherwise the `url` query parameter is
/// used. A bare `{"url": ...}` payload (direct invocation) is accepted too.
pub fn extract_product_url(payload: &Value) -> Result<String, ReviewError> {
    if let Some(body) = decode_body(payload)?
        && !body.trim().is_empty()
    {
        let request: SummarizeRequest = serde_json::from_str(&body)
            .map_err(|e| ReviewError::InvalidRequest(format!("Invalid JSON body: {e}")))?;
        return validate_product_url(&request.url);
    }

    let candidate = v_str(payload, &["queryStringParameters", "url"])
        .or_else(|| v_str(payload, &["url"]))
        .ok_or_else(|| ReviewError::InvalidRequest(INVALID_URL_MESSAGE.to_string()))?;

    validate_product_url(candidate)
}

/// Accepts only absolute `http`/`https` URLs.
pub fn validate_product_url(raw: &str) -> Result<String, ReviewError> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed)
        .map_err(|_| ReviewError::InvalidRequest(INVALID_URL_MESSAGE.to_string()))?;

    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(parsed.to_string()),
        _ => Err(ReviewError::InvalidRequest(INVALID_URL_MESSAGE.to_string())),
    }
}
