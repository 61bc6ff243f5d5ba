use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::logging::LogConfig;
use crate::server::build_pipeline;

pub struct MockServer {
    pub config: Arc<ServiceConfig>,
    pub addr: SocketAddr,
}

impl MockServer {
    pub fn new(config: ServiceConfig, host: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let addr = config.listen_addr(host)?;
        Ok(Self {
            config: Arc::new(config),
            addr,
        })
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        // warp's own bind panics on failure, so hand it a listener we own
        let listener = TcpListener::bind(self.addr)
            .await
            .map_err(|e| format!("failed to bind {}: {}", self.addr, e))?;
        let local_addr = listener.local_addr().unwrap_or(self.addr);

        if LogConfig::get().debug_enabled {
            log::info!(
                "starting OpenAI mock server v{} on {} (debug mode)",
                crate::VERSION,
                local_addr
            );
        } else {
            log::info!(
                "starting OpenAI mock server v{} on {}",
                crate::VERSION,
                local_addr
            );
        }
        log::info!("latency: {}", self.config.latency().describe());
        log::info!("chat models: {:?}", self.config.models.chat());
        log::info!("embedding models: {:?}", self.config.models.embedding());

        warp::serve(build_pipeline(self.config.clone()))
            .incoming(listener)
            .run()
            .await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MockServer;
    use crate::config::ServiceConfig;

    #[tokio::test]
    async fn run_reports_port_in_use() {
        let held = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = held.local_addr().unwrap().port();

        let config = ServiceConfig {
            port,
            ..ServiceConfig::default()
        };
        let server = MockServer::new(config, "127.0.0.1").unwrap();
        let err = server.run().await.unwrap_err();

        assert!(err.to_string().starts_with("failed to bind 127.0.0.1:"));
        drop(held);
    }

    #[test]
    fn new_rejects_invalid_host() {
        assert!(MockServer::new(ServiceConfig::default(), "not-a-host").is_err());
    }
}
