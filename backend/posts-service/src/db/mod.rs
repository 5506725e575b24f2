/// Database access layer
///
/// - `post_repo`: SQL for the `posts` table
/// - `PostStore`: storage seam used by the post service
/// - `create_pool`: PostgreSQL pool construction
pub mod post_repo;

use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::models::Post;
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Storage operations the posts surface needs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Up to `limit` posts ordered by `created_at` descending.
    async fn find_recent(&self, limit: i64) -> Result<Vec<Post>>;

    async fn create(&self, user_id: &str, content: &str, name: &str) -> Result<Post>;
}

/// `PostStore` backed by PostgreSQL.
#[derive(Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn find_recent(&self, limit: i64) -> Result<Vec<Post>> {
        Ok(post_repo::find_recent_posts(&self.pool, limit).await?)
    }

    async fn create(&self, user_id: &str, content: &str, name: &str) -> Result<Post> {
        Ok(post_repo::create_post(&self.pool, user_id, content, name).await?)
    }
}

/// Build the PostgreSQL pool and verify it with a round trip.
pub async fn create_pool(config: &DatabaseConfig) -> std::result::Result<PgPool, sqlx::Error> {
    tracing::info!(
        max_connections = config.max_connections,
        acquire_timeout_secs = config.acquire_timeout_secs,
        "creating database pool"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .test_before_acquire(true)
        .connect(&config.url)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;
    tracing::info!("database pool created and verified");

    Ok(pool)
}
