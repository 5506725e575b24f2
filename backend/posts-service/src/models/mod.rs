/// Data models for posts-service
///
/// - `Post`: a stored post row
/// - `UserRecord`: a user as returned by the identity directory
/// - `AuthorProfile`: the public projection of a `UserRecord`
/// - `PostWithAuthor`: list response item
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validation::validate_post_content;

/// Display name stored on every post created through this service.
pub const DEFAULT_POST_NAME: &str = "name";

/// A post as stored in the `posts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    /// Identity-provider id of the author
    pub user_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub name: String,
}

/// User record returned by the identity directory. Only the fields this
/// service projects are decoded; the rest of the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub image_url: String,
}

/// Public author view attached to listed posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorProfile {
    pub id: String,
    pub username: Option<String>,
    pub image_url: String,
}

impl From<UserRecord> for AuthorProfile {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            username: user.username,
            image_url: user.image_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PostWithAuthor {
    pub post: Post,
    pub user: AuthorProfile,
}

/// Input of `posts.create`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    /// 1-255 UTF-16 code units, emoji only
    #[validate(custom(function = "validate_post_content"))]
    pub content: String,
}
