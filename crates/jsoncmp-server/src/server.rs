use std::sync::Arc;

use tokio::net::TcpListener;

use jsoncmp_diff::Differ;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// Shared state handed to every request handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub differ: Differ,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let differ = config.differ();
        Self {
            config: Arc::new(config),
            differ,
        }
    }
}

/// HTTP server for document comparisons.
pub struct JsonCmpServer {
    state: AppState,
}

impl JsonCmpServer {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.state.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let addr = self.state.config.bind_addr;
        let app = build_router(self.state);
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("jsoncmp server listening on {}", addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = JsonCmpServer::new(ServerConfig::default());
        assert_eq!(server.config().bind_addr, "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn state_uses_configured_depth() {
        let mut config = ServerConfig::default();
        config.diff.max_depth = Some(4);
        let state = AppState::new(config);
        assert_eq!(state.differ.options().max_depth, Some(4));
    }

    #[test]
    fn router_builds() {
        let server = JsonCmpServer::new(ServerConfig::default());
        let _router = server.router();
    }
}
