use crate::constants::ENDPOINT_MODELS;
use crate::error::MockError;
use crate::generator::list_models;
use crate::handlers::RequestContext;
use crate::http::json_response;
use crate::logging::{log_handler_io, log_request};

pub async fn handle_models(
    context: RequestContext<'_>,
) -> Result<warp::reply::Response, MockError> {
    log_request("GET", ENDPOINT_MODELS, None);
    let response = list_models(context.models());
    log_handler_io::<(), _>("models", None, Some(&response));
    Ok(json_response(&response))
}
