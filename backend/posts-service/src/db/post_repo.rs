use crate::models::Post;
use sqlx::PgPool;
use uuid::Uuid;

/// Insert a new post and return the stored row
pub async fn create_post(
    pool: &PgPool,
    user_id: &str,
    content: &str,
    name: &str,
) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, user_id, content, name, created_at)
        VALUES ($1, $2, $3, $4, NOW())
        RETURNING id, user_id, content, created_at, name
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(content)
    .bind(name)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Fetch the most recent posts, newest first
pub async fn find_recent_posts(pool: &PgPool, limit: i64) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, user_id, content, created_at, name
        FROM posts
        ORDER BY created_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}
