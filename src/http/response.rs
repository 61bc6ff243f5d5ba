use serde::Serialize;
use warp::http::StatusCode;

use crate::constants::{CONTENT_TYPE_JSON, HEADER_CACHE_CONTROL};

pub fn json_response<T: Serialize>(value: &T) -> warp::reply::Response {
    json_response_with_status(value, StatusCode::OK)
}

pub fn json_response_with_status<T: Serialize>(
    value: &T,
    status: StatusCode,
) -> warp::reply::Response {
    let json_string = serde_json::to_string(value).unwrap_or_else(|e| {
        log::error!("failed to serialize response: {}", e);
        "{}".to_string()
    });
    let content_length = json_string.len();

    warp::http::Response::builder()
        .status(status)
        .header("Content-Type", CONTENT_TYPE_JSON)
        .header("Content-Length", content_length.to_string())
        .header("Cache-Control", HEADER_CACHE_CONTROL)
        .body(json_string.into())
        .unwrap_or_else(|_| {
            let mut fallback = warp::reply::Response::new("Internal Server Error".into());
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        })
}
