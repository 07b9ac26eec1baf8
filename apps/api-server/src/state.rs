//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostRepository;
use quill_infra::database::{self, DatabaseConfig, InMemoryPostRepository, PostgresPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state with the appropriate repository.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let posts: Arc<dyn PostRepository> = match db_config {
            Some(config) => match database::connect(config).await {
                Ok(conn) => Arc::new(PostgresPostRepository::new(conn)),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Arc::new(InMemoryPostRepository::new())
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryPostRepository::new())
            }
        };

        tracing::info!("Application state initialized");

        Self { posts }
    }
}
