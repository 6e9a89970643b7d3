//! Application state - shared across all handlers.

use std::sync::Arc;

use blogicum_core::ports::{
    CategoryRepository, CommentRepository, LocationRepository, PostRepository, UserRepository,
};
use blogicum_infra::InMemoryRepository;

use crate::config::AppConfig;

/// Shared application state: one repository handle per entity.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub locations: Arc<dyn LocationRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

impl AppState {
    /// Build the application state with appropriate repository
    /// implementations: Postgres when configured and reachable, the
    /// in-memory store otherwise.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        if let Some(url) = &config.database_url {
            use blogicum_infra::database::{DatabaseConfig, connect};

            let db_config = DatabaseConfig {
                url: url.clone(),
                max_connections: config.db_max_connections,
                min_connections: config.db_min_connections,
            };

            match connect(&db_config).await {
                Ok(conn) => return Self::postgres(conn),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        }

        #[cfg(not(feature = "postgres"))]
        let _ = config;

        tracing::warn!("Running without a database - state is in-memory only");
        Self::from_repository(Arc::new(InMemoryRepository::new()))
    }

    /// Wire every repository port to one in-memory store.
    pub fn from_repository(repo: Arc<InMemoryRepository>) -> Self {
        Self {
            users: repo.clone(),
            categories: repo.clone(),
            locations: repo.clone(),
            posts: repo.clone(),
            comments: repo,
        }
    }

    #[cfg(feature = "postgres")]
    fn postgres(conn: blogicum_infra::database::DbConn) -> Self {
        use blogicum_infra::database::{
            PostgresCategoryRepository, PostgresCommentRepository, PostgresLocationRepository,
            PostgresPostRepository, PostgresUserRepository,
        };

        Self {
            users: Arc::new(PostgresUserRepository::new(conn.clone())),
            categories: Arc::new(PostgresCategoryRepository::new(conn.clone())),
            locations: Arc::new(PostgresLocationRepository::new(conn.clone())),
            posts: Arc::new(PostgresPostRepository::new(conn.clone())),
            comments: Arc::new(PostgresCommentRepository::new(conn)),
        }
    }
}
