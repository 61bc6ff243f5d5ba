use std::time::Instant;

use bytes::Bytes;
use serde_json::{Value, json};

use crate::constants::{ENDPOINT_EMBEDDINGS, LOG_PREFIX_SUCCESS};
use crate::error::MockError;
use crate::generator::generate_embeddings;
use crate::handlers::RequestContext;
use crate::http::{json_response, parse_lenient_body};
use crate::logging::{LogConfig, log_handler_io, log_rejected_model, log_request, log_timed};
use crate::model::ModelKind;
use crate::model::types::{EmbeddingRequest, EmbeddingResponse};

pub async fn handle_embeddings(
    context: RequestContext<'_>,
    body: Bytes,
) -> Result<warp::reply::Response, MockError> {
    let start_time = Instant::now();
    let request: EmbeddingRequest = parse_lenient_body("embedding", &body);
    log_request("POST", ENDPOINT_EMBEDDINGS, Some(request.model.as_str()));

    let model = context
        .models()
        .resolve(ModelKind::Embedding, &request.model)
        .inspect_err(|e| log_rejected_model("embeddings", e, start_time))?;
    let inputs = request.effective_inputs();
    let response = generate_embeddings(model, &inputs);

    if LogConfig::get().debug_enabled {
        log_handler_io("embeddings", Some(&request), Some(&summarize(&response)));
    }
    log_timed(
        LOG_PREFIX_SUCCESS,
        &format!("embeddings - {} inputs", response.data.len()),
        start_time,
    );
    Ok(json_response(&response))
}

/// Debug view of a response without the full vectors.
fn summarize(response: &EmbeddingResponse) -> Value {
    json!({
        "object": response.object,
        "model": response.model,
        "data": response
            .data
            .iter()
            .map(|item| json!({
                "index": item.index,
                "dimensions": item.embedding.len(),
                "head": item.embedding.iter().take(4).collect::<Vec<_>>(),
            }))
            .collect::<Vec<_>>(),
        "usage": response.usage,
    })
}
