use anyhow::{Context, Result, bail};
use clap::Parser;
use smartshop::SmartShop;
use smartshop::api::parsing::validate_product_url;
use smartshop::core::config::AppConfig;
use smartshop::core::models::SummarizeResult;
use smartshop::worker::NO_REVIEWS_MESSAGE;

/// Summarize the customer reviews on a product page.
#[derive(Parser, Debug)]
#[command(name = "smartshop", about = "SmartShop review summarizer")]
struct Cli {
    /// Product page URL
    #[arg(value_name = "URL", required_unless_present = "url_flag")]
    url: Option<String>,

    /// Product page URL (alternative to the positional argument)
    #[arg(long = "url", id = "url_flag", env = "SMARTSHOP_PRODUCT_URL")]
    url_flag: Option<String>,

    /// Maximum chunk summaries requested at once
    #[arg(long)]
    concurrency: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    smartshop::setup_logging();
    let cli = Cli::parse();

    let raw_url = cli.url.or(cli.url_flag).unwrap_or_default();
    let url = validate_product_url(&raw_url)?;

    let mut config = AppConfig::from_env()?;
    if let Some(concurrency) = cli.concurrency {
        if concurrency == 0 {
            bail!("--concurrency must be at least 1");
        }
        config.chunk_concurrency = concurrency;
    }

    let app = SmartShop::new(&config).context("failed to initialize summarizer")?;

    eprintln!("Fetching reviews...");
    match app.summarize_url(&url).await? {
        SummarizeResult::Summary(summary) => {
            println!("Review Summary:");
            println!("{summary}");
            Ok(())
        }
        SummarizeResult::NoReviews => bail!(NO_REVIEWS_MESSAGE),
    }
}
