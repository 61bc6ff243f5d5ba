pub mod latency;
pub mod mock;
pub mod rejection;
pub mod routes;

pub use latency::LatencySimulator;
pub use mock::MockServer;
pub use rejection::handle_rejection;
pub use routes::build_pipeline;
