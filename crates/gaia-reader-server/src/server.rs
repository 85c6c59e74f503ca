use std::sync::Arc;

use tokio::net::TcpListener;

use gaia_reader_core::DiskReader;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::AppState;
use crate::router::build_router;

/// Gaia read-path server.
pub struct ReaderServer {
    config: ServerConfig,
}

impl ReaderServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Open the resolver and build the router (useful for testing).
    ///
    /// Fails when the configured storage root does not exist.
    pub fn router(&self) -> ServerResult<axum::Router> {
        let reader = DiskReader::open(self.config.disk.clone())?;
        Ok(build_router(AppState {
            reader: Arc::new(reader),
        }))
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router()?;
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("gaia reader listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use gaia_reader_core::DiskSettings;

    #[test]
    fn server_construction() {
        let server = ReaderServer::new(ServerConfig::default());
        assert_eq!(server.config().bind_addr, "127.0.0.1:8008".parse().unwrap());
    }

    #[test]
    fn router_requires_existing_root() {
        let config = ServerConfig {
            disk: DiskSettings::new("/no/such/root"),
            ..Default::default()
        };
        let err = ReaderServer::new(config).router().unwrap_err();
        assert!(matches!(err, ServerError::Reader(_)));
    }
}
