//! Showcase server for the statuskit catalog
//!
//! Serves the catalog as JSON and raises any HTTP exception or WebSocket
//! close on request, so clients can see exactly what each code looks like
//! on the wire.

mod catalog;
mod raise;

use std::net::SocketAddr;

use axum::{Router, routing::get};
use statuskit_config::Config;
use statuskit_http::HttpException;
use tower_http::trace::TraceLayer;

pub use raise::NAME_HEADER;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation, for example a
    /// health path that collides with a built-in route
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        config.validate()?;

        let mut app = Router::new()
            .route("/catalog", get(catalog::list_handler))
            .route("/catalog/http/{code}", get(catalog::http_entry_handler))
            .route("/catalog/ws/{code}", get(catalog::ws_entry_handler))
            .route("/raise/{code}", get(raise::raise_handler));

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, get(|| async { "ok" }));
        }

        if config.server.websocket.enabled {
            app = app.route("/ws/close/{code}", get(raise::close_handler));
        }

        let router = app
            .fallback(|| async { HttpException::not_found(None, None) })
            .layer(TraceLayer::new_for_http());

        Ok(Self {
            router,
            listen_address: config.server.listen_address(),
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address)
            .await
            .map_err(|e| anyhow::anyhow!("failed to bind {}: {e}", self.listen_address))?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
