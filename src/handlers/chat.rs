use std::time::Instant;

use bytes::Bytes;

use crate::constants::{ENDPOINT_CHAT_COMPLETIONS, LOG_PREFIX_SUCCESS};
use crate::error::MockError;
use crate::generator::generate_chat_completion;
use crate::handlers::RequestContext;
use crate::http::{json_response, parse_lenient_body};
use crate::logging::{log_handler_io, log_request, log_rejected_model, log_timed};
use crate::model::ModelKind;
use crate::model::types::ChatCompletionRequest;

pub async fn handle_chat_completions(
    context: RequestContext<'_>,
    body: Bytes,
) -> Result<warp::reply::Response, MockError> {
    let start_time = Instant::now();
    let request: ChatCompletionRequest = parse_lenient_body("chat completion", &body);
    log_request("POST", ENDPOINT_CHAT_COMPLETIONS, Some(request.model.as_str()));

    let model = context
        .models()
        .resolve(ModelKind::Chat, &request.model)
        .inspect_err(|e| log_rejected_model("chat completion", e, start_time))?;
    let messages = request.effective_messages();
    let response = generate_chat_completion(model, &messages);

    log_handler_io("chat", Some(&request), Some(&response));
    log_timed(LOG_PREFIX_SUCCESS, "chat completion", start_time);
    Ok(json_response(&response))
}
