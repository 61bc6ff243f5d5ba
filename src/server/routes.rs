use std::convert::Infallible;
use std::sync::Arc;

use bytes::Bytes;
use warp::Filter;

use crate::config::ServiceConfig;
use crate::handlers::{
    RequestContext, handle_chat_completions, handle_embeddings, handle_models,
};
use crate::server::handle_rejection;
use crate::server::latency::latency_stage;

pub fn create_routes(
    config: Arc<ServiceConfig>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let with_config = warp::any().map(move || config.clone());

    let chat_route = warp::path!("v1" / "chat" / "completions")
        .and(warp::post())
        .and(warp::body::bytes())
        .and(with_config.clone())
        .and_then(|body: Bytes, c: Arc<ServiceConfig>| async move {
            handle_chat_completions(RequestContext::new(&c), body)
                .await
                .map_err(warp::reject::custom)
        });

    let embeddings_route = warp::path!("v1" / "embeddings")
        .and(warp::post())
        .and(warp::body::bytes())
        .and(with_config.clone())
        .and_then(|body: Bytes, c: Arc<ServiceConfig>| async move {
            handle_embeddings(RequestContext::new(&c), body)
                .await
                .map_err(warp::reject::custom)
        });

    let models_route = warp::path!("v1" / "models")
        .and(warp::get())
        .and(with_config.clone())
        .and_then(|c: Arc<ServiceConfig>| async move {
            handle_models(RequestContext::new(&c))
                .await
                .map_err(warp::reject::custom)
        });

    chat_route.or(embeddings_route).or(models_route)
}

/// Latency stage, then dispatch, with CORS and error rendering around it.
pub fn build_pipeline(
    config: Arc<ServiceConfig>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = Infallible> + Clone {
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec![
            "Content-Type",
            "Authorization",
            "Accept",
            "Origin",
            "X-Requested-With",
        ])
        .allow_methods(vec!["GET", "POST", "OPTIONS"]);

    latency_stage(config.latency())
        .and(create_routes(config))
        .with(cors)
        .recover(handle_rejection)
}
