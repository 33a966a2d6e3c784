//! HTTP Lambda handler: validate the product URL, run the pipeline, and map
//! the outcome onto a status code.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use super::{helpers, parsing};
use crate::app::SmartShop;
use crate::core::models::SummarizeResult;
use crate::errors::ReviewError;

/// Lambda handler for the summarize endpoint.
///
/// # Errors
///
/// Never fails at the Lambda level; every outcome is mapped to an HTTP
/// response payload.
#[tracing::instrument(level = "info", skip(app, event), fields(correlation_id = tracing::field::Empty))]
pub async fn function_handler(
    app: &SmartShop,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let correlation_id = Uuid::new_v4().to_string();
    tracing::Span::current().record("correlation_id", correlation_id.as_str());

    Ok(handle_payload(app, &event.payload).await)
}

/// Maps one request payload to a response payload.
pub async fn handle_payload(app: &SmartShop, payload: &Value) -> Value {
    let url = match parsing::extract_product_url(payload) {
        Ok(url) => url,
        Err(e) => {
            info!("Rejected request: {}", e);
            return helpers::err_response(400, parsing::INVALID_URL_MESSAGE);
        }
    };

    info!(url = %url, "Summarizing reviews");

    match app.summarize_url(&url).await {
        Ok(SummarizeResult::Summary(summary)) => helpers::ok_summary(&url, &summary),
        Ok(SummarizeResult::NoReviews) => helpers::err_response(404, "No reviews found"),
        Err(ReviewError::InvalidRequest(msg)) => helpers::err_response(400, &msg),
        Err(e @ ReviewError::Acquisition(_)) => {
            error!("Failed to fetch reviews: {}", e);
            helpers::err_response(502, &e.to_string())
        }
        Err(e) => {
            error!("Failed to summarize reviews: {}", e);
            helpers::err_response(500, &e.to_string())
        }
    }
}
