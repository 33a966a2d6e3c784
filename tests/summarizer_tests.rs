use async_trait::async_trait;
use smartshop::ReviewError;
use smartshop::ai::{ReviewSummarizer, SummarizationModel};
use smartshop::core::models::{ChunkSummary, GenerationParams, NO_CONTENT_SENTINEL, SummaryOutput};
use smartshop::utils::word_count;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Model double that answers from a script and records what it was sent.
struct ScriptedModel {
    replies: Vec<Result<Vec<&'static str>, &'static str>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedModel {
    fn new(replies: Vec<Result<Vec<&'static str>, &'static str>>) -> Arc<Self> {
        Arc::new(Self {
            replies,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummarizationModel for ScriptedModel {
    async fn summarize(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> Result<Vec<SummaryOutput>, ReviewError> {
        assert_eq!(*params, GenerationParams::default());
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(text.to_string());
            calls.len() - 1
        };

        match &self.replies[index] {
            Ok(texts) => Ok(texts
                .iter()
                .map(|t| SummaryOutput {
                    summary_text: (*t).to_string(),
                })
                .collect()),
            Err(detail) => Err(ReviewError::Summarization((*detail).to_string())),
        }
    }
}

/// Model double whose first chunk is the slowest to answer.
struct SlowFirstModel;

#[async_trait]
impl SummarizationModel for SlowFirstModel {
    async fn summarize(
        &self,
        text: &str,
        _params: &GenerationParams,
    ) -> Result<Vec<SummaryOutput>, ReviewError> {
        let first_word = text.split_whitespace().next().unwrap_or_default().to_string();
        if first_word == "w0" {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        Ok(vec![SummaryOutput {
            summary_text: first_word,
        }])
    }
}

fn words(count: usize) -> String {
    (0..count)
        .map(|i| format!("w{i}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[tokio::test]
async fn blank_text_returns_sentinel_without_calling_model() {
    let model = ScriptedModel::new(vec![]);
    let summarizer = ReviewSummarizer::new(model.clone());

    assert_eq!(summarizer.summarize("").await, NO_CONTENT_SENTINEL);
    assert_eq!(summarizer.summarize("   ").await, NO_CONTENT_SENTINEL);
    assert!(model.calls().is_empty());
}

#[tokio::test]
async fn short_text_is_summarized_in_one_call() {
    let model = ScriptedModel::new(vec![Ok(vec!["Short summary."])]);
    let summarizer = ReviewSummarizer::new(model.clone());
    let text = words(300);

    let summary = summarizer.summarize(&text).await;

    assert_eq!(summary, "Short summary.");
    assert_eq!(model.calls(), vec![text]);
}

#[tokio::test]
async fn text_at_threshold_is_not_split() {
    let model = ScriptedModel::new(vec![Ok(vec!["One."])]);
    let summarizer = ReviewSummarizer::new(model.clone());

    summarizer.summarize(&words(500)).await;

    assert_eq!(model.calls().len(), 1);
}

#[tokio::test]
async fn long_text_is_chunked_and_joined_in_order() {
    let model = ScriptedModel::new(vec![Ok(vec!["A"]), Ok(vec!["B"]), Ok(vec!["C"])]);
    let summarizer = ReviewSummarizer::new(model.clone());

    let summary = summarizer.summarize(&words(1200)).await;

    assert_eq!(summary, "A B C");
    let sizes: Vec<usize> = model.calls().iter().map(|c| word_count(c)).collect();
    assert_eq!(sizes, vec![500, 500, 200]);
}

#[tokio::test]
async fn failed_chunk_is_replaced_inline() {
    let model = ScriptedModel::new(vec![
        Ok(vec!["A"]),
        Err("model overloaded"),
        Ok(vec!["C"]),
    ]);
    let summarizer = ReviewSummarizer::new(model.clone());

    let summary = summarizer.summarize(&words(1200)).await;

    assert!(summary.starts_with("A Error during summarization: "));
    assert!(summary.contains("model overloaded"));
    assert!(summary.ends_with(" C"));
    assert_eq!(model.calls().len(), 3);
}

#[tokio::test]
async fn only_first_output_of_a_chunk_is_used() {
    let model = ScriptedModel::new(vec![Ok(vec!["first", "second"])]);
    let summarizer = ReviewSummarizer::new(model);

    assert_eq!(summarizer.summarize("tiny review").await, "first");
}

#[tokio::test]
async fn chunk_with_no_output_contributes_nothing() {
    let model = ScriptedModel::new(vec![Ok(vec!["A"]), Ok(vec![]), Ok(vec!["C"])]);
    let summarizer = ReviewSummarizer::new(model);

    let chunks = summarizer.plan_chunks(&words(1200)).unwrap();
    let summaries = summarizer.summarize_chunks(&chunks).await;

    assert_eq!(
        summaries,
        vec![
            ChunkSummary::Generated("A".to_string()),
            ChunkSummary::Generated("C".to_string()),
        ]
    );
}

#[tokio::test]
async fn concurrent_chunks_keep_original_order() {
    let summarizer = ReviewSummarizer::new(Arc::new(SlowFirstModel)).with_concurrency(3);

    let summary = summarizer.summarize(&words(1200)).await;

    assert_eq!(summary, "w0 w500 w1000");
}

#[test]
fn plan_chunks_matches_threshold_rules() {
    let summarizer = ReviewSummarizer::new(ScriptedModel::new(vec![]));

    assert!(summarizer.plan_chunks(" \n ").unwrap().is_empty());

    let short = "  keeps   original spacing ";
    assert_eq!(summarizer.plan_chunks(short).unwrap(), vec![short.to_string()]);

    assert_eq!(summarizer.plan_chunks(&words(501)).unwrap().len(), 2);
}
