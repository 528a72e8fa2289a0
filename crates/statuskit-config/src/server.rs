use std::net::SocketAddr;

use serde::Deserialize;

/// Address the showcase server binds when none is configured
pub const DEFAULT_LISTEN_ADDRESS: SocketAddr = SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED), 3000);

/// Route prefixes the showcase server always owns
pub const CATALOG_ROUTE_PREFIXES: [&str; 2] = ["/catalog", "/raise"];

/// Route prefix of the WebSocket close showcase
pub const WEBSOCKET_ROUTE_PREFIX: &str = "/ws/close";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_address: Option<SocketAddr>,
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub websocket: WebSocketConfig,
}

impl ServerConfig {
    /// Configured listen address, or `0.0.0.0:3000`
    pub fn listen_address(&self) -> SocketAddr {
        self.listen_address.unwrap_or(DEFAULT_LISTEN_ADDRESS)
    }

    /// Built-in route prefix that `path` would land on, if any
    pub fn reserved_prefix_of(&self, path: &str) -> Option<&'static str> {
        let websocket = self.websocket.enabled.then_some(WEBSOCKET_ROUTE_PREFIX);

        CATALOG_ROUTE_PREFIXES
            .into_iter()
            .chain(websocket)
            .find(|prefix| {
                path.strip_prefix(*prefix)
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
            })
    }
}

/// Health check endpoint configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_health_path")]
    pub path: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_health_path(),
        }
    }
}

/// WebSocket close-code showcase route
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebSocketConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for WebSocketConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_enabled() -> bool {
    true
}

fn default_health_path() -> String {
    "/health".to_string()
}
