/// Comment Relay Worker - comment relay Lambda
///
/// This module wires the core request handler into the Lambda runtime.
pub mod context;

pub use comment_relay_core::*;
pub use context::WorkerContext;

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;
use tracing::{Instrument, info, info_span};

/// Main Lambda handler - one proxy response per invocation
pub async fn handler(ctx: Arc<WorkerContext>, event: LambdaEvent<Value>) -> Result<Value, Error> {
    let span = info_span!("invocation", request_id = %event.context.request_id);

    async move {
        let response = process(&ctx, event.payload).await;

        info!(status_code = response.status_code, "Invocation complete");

        Ok::<_, Error>(serde_json::to_value(response)?)
    }
    .instrument(span)
    .await
}

/// Runs the relay for a raw invocation payload
pub async fn process(ctx: &WorkerContext, payload: Value) -> ApiResponse {
    let event = InboundEvent::from_payload(payload);
    handle(&ctx.config, ctx.sender.as_ref(), &event).await
}
