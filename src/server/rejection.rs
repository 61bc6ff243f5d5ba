use std::convert::Infallible;

use warp::Rejection;
use warp::http::StatusCode;

use crate::error::MockError;
use crate::http::json_response_with_status;

pub async fn handle_rejection(rejection: Rejection) -> Result<warp::reply::Response, Infallible> {
    let error = if let Some(mock_err) = rejection.find::<MockError>() {
        mock_err.clone()
    } else if rejection.is_not_found() {
        MockError::not_found("endpoint not found")
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        MockError::method_not_allowed("method not allowed")
    } else if rejection.find::<warp::cors::CorsForbidden>().is_some() {
        MockError::forbidden("CORS request forbidden")
    } else {
        log::error!("unhandled rejection: {:?}", rejection);
        MockError::internal_server_error("internal server error")
    };

    let status =
        StatusCode::from_u16(error.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    Ok(json_response_with_status(&error.to_envelope(), status))
}
