//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use statuskit_config::{Config, HealthConfig, ServerConfig, TelemetryConfig, WebSocketConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with every route enabled
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    websocket: WebSocketConfig::default(),
                },
                telemetry: TelemetryConfig::default(),
            },
        }
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Serve health checks on a different path
    pub fn with_health_path(mut self, path: &str) -> Self {
        self.config.server.health.path = path.to_string();
        self
    }

    /// Disable the WebSocket close route
    pub fn without_websocket(mut self) -> Self {
        self.config.server.websocket.enabled = false;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
