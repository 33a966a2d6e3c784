use smartshop::SmartShop;
use smartshop::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    smartshop::setup_logging();

    // Built once per cold start and shared by every invocation.
    let config = AppConfig::from_env()?;
    let app = SmartShop::new(&config)?;
    let app = &app;

    lambda_runtime::run(lambda_runtime::service_fn(move |event| async move {
        smartshop::api::handler(app, event).await
    }))
    .await
}
