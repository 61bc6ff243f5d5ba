use clap::Parser;

mod config;
mod constants;
mod error;
mod generator;
mod handlers;
mod http;
mod logging;
mod model;
mod server;


pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = config::Config::parse();

    config::validate_config(&cli)?;

    logging::setup_logging(&cli.log_level)?;

    let debug_enabled =
        cli.log_level.eq_ignore_ascii_case("debug") || cli.log_level.eq_ignore_ascii_case("trace");
    logging::LogConfig::init(debug_enabled);

    let service_config = config::ServiceConfig::resolve(&cli);

    let server = server::MockServer::new(service_config, &cli.host)?;
    server.run().await
}
