use std::sync::Arc;

use tokio::net::TcpListener;

use cmdbook_service::CommandService;
use cmdbook_store::{CommandStore, FileCommandStore, InMemoryCommandStore};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// Command catalog server.
pub struct CmdbookServer {
    config: ServerConfig,
    service: CommandService,
}

impl CmdbookServer {
    /// Build a server from `config`, opening the backing store it names.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let store: Arc<dyn CommandStore> = match &config.data_path {
            Some(path) => Arc::new(FileCommandStore::open(path)?),
            None => Arc::new(InMemoryCommandStore::new()),
        };
        Ok(Self {
            config,
            service: CommandService::new(store),
        })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.service.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("cmdbook server listening on {}", self.config.bind_addr);
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
        let server = CmdbookServer::new(ServerConfig::default()).unwrap();
        assert_eq!(server.config().bind_addr, "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn router_builds() {
        let server = CmdbookServer::new(ServerConfig::default()).unwrap();
        let _router = server.router();
    }

    #[test]
    fn file_backed_construction() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            data_path: Some(dir.path().join("catalog.json")),
            ..ServerConfig::default()
        };
        let server = CmdbookServer::new(config).unwrap();
        assert!(server.config().data_path.is_some());
    }

    #[test]
    fn corrupt_catalog_fails_construction() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "not json").unwrap();

        let config = ServerConfig {
            data_path: Some(path),
            ..ServerConfig::default()
        };
        assert!(matches!(
            CmdbookServer::new(config),
            Err(ServerError::Store(_))
        ));
    }
}
