use anyhow::Context;
use comment_relay_worker::{WorkerContext, handler};
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    info!("Starting comment relay Lambda function");

    let ctx = WorkerContext::from_env()
        .await
        .context("Failed to initialize comment relay")?;

    // Run the Lambda runtime
    run(service_fn(|event: LambdaEvent<Value>| {
        let ctx = ctx.clone();
        async move { handler(ctx, event).await }
    }))
    .await
}
