use async_trait::async_trait;
use serde_json::{Value, json};
use smartshop::api::handler::handle_payload;
use smartshop::core::models::{GenerationParams, SummarizeResult, SummaryOutput};
use smartshop::{ReviewError, SmartShop};
use smartshop::ai::SummarizationModel;
use smartshop::scrape::ReviewSource;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

enum Page {
    Reviews(&'static str),
    Unreachable,
}

struct StaticSource(Page);

#[async_trait]
impl ReviewSource for StaticSource {
    async fn fetch_reviews(&self, url: &str) -> Result<String, ReviewError> {
        match &self.0 {
            Page::Reviews(text) => Ok((*text).to_string()),
            Page::Unreachable => Err(ReviewError::Acquisition(format!(
                "HTTP status 503 Service Unavailable for {url}"
            ))),
        }
    }
}

struct CountingModel {
    calls: AtomicUsize,
}

#[async_trait]
impl SummarizationModel for CountingModel {
    async fn summarize(
        &self,
        _text: &str,
        _params: &GenerationParams,
    ) -> Result<Vec<SummaryOutput>, ReviewError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![SummaryOutput {
            summary_text: "Buyers like the build quality.".to_string(),
        }])
    }
}

fn app_for(page: Page) -> (SmartShop, Arc<CountingModel>) {
    let model = Arc::new(CountingModel {
        calls: AtomicUsize::new(0),
    });
    let app = SmartShop::with_model(Arc::new(StaticSource(page)), model.clone());
    (app, model)
}

fn body_of(response: &Value) -> Value {
    serde_json::from_str(response["body"].as_str().unwrap()).unwrap()
}

#[tokio::test]
async fn pipeline_summarizes_fetched_reviews() {
    let (app, model) = app_for(Page::Reviews("Solid kettle. Boils fast."));

    let result = app
        .summarize_url("https://shop.example.com/dp/123")
        .await
        .unwrap();

    assert_eq!(
        result,
        SummarizeResult::Summary("Buyers like the build quality.".to_string())
    );
    assert_eq!(model.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn pipeline_reports_missing_reviews_without_calling_model() {
    let (app, model) = app_for(Page::Reviews("   "));

    let result = app
        .summarize_url("https://shop.example.com/dp/123")
        .await
        .unwrap();

    assert_eq!(result, SummarizeResult::NoReviews);
    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn pipeline_propagates_acquisition_failure() {
    let (app, model) = app_for(Page::Unreachable);

    let err = app
        .summarize_url("https://shop.example.com/dp/123")
        .await
        .unwrap_err();

    assert!(matches!(err, ReviewError::Acquisition(_)));
    assert!(err.to_string().starts_with("Error fetching page:"));
    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn pipeline_rejects_blank_url() {
    let (app, _) = app_for(Page::Reviews("unused"));

    let err = app.summarize_url("  ").await.unwrap_err();

    assert!(matches!(err, ReviewError::InvalidRequest(_)));
}

#[tokio::test]
async fn handler_returns_summary_for_json_body() {
    let (app, _) = app_for(Page::Reviews("Great blender."));
    let payload = json!({ "body": json!({ "url": "https://shop.example.com/dp/1" }).to_string() });

    let response = handle_payload(&app, &payload).await;

    assert_eq!(response["statusCode"], 200);
    let body = body_of(&response);
    assert_eq!(body["summary"], "Buyers like the build quality.");
    assert_eq!(body["url"], "https://shop.example.com/dp/1");
}

#[tokio::test]
async fn handler_accepts_query_string_url() {
    let (app, _) = app_for(Page::Reviews("Great blender."));
    let payload = json!({
        "queryStringParameters": { "url": "https://shop.example.com/dp/1" }
    });

    let response = handle_payload(&app, &payload).await;

    assert_eq!(response["statusCode"], 200);
}

#[tokio::test]
async fn handler_maps_outcomes_to_status_codes() {
    let payload = json!({ "url": "https://shop.example.com/dp/1" });

    let (no_reviews, _) = app_for(Page::Reviews(""));
    assert_eq!(handle_payload(&no_reviews, &payload).await["statusCode"], 404);

    let (unreachable, _) = app_for(Page::Unreachable);
    assert_eq!(handle_payload(&unreachable, &payload).await["statusCode"], 502);

    let (app, model) = app_for(Page::Reviews("Great blender."));
    let bad = handle_payload(&app, &json!({ "url": "ftp://shop.example.com" })).await;
    assert_eq!(bad["statusCode"], 400);
    assert_eq!(body_of(&bad)["error"], "Please enter a valid URL.");
    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
}
