/// Post service - lists posts with their authors and creates new posts
use crate::clients::IdentityClient;
use crate::db::PostStore;
use crate::error::{AppError, Result, AUTHOR_NOT_FOUND};
use crate::metrics::IDENTITY_LOOKUP_DURATION_SECONDS;
use crate::models::{AuthorProfile, CreatePostRequest, Post, PostWithAuthor, DEFAULT_POST_NAME};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use validator::Validate;

/// Upper bound on posts returned by a listing and on users fetched per batch.
pub const POSTS_LIST_LIMIT: usize = 100;

pub struct PostService {
    store: Arc<dyn PostStore>,
    identity: Arc<dyn IdentityClient>,
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>, identity: Arc<dyn IdentityClient>) -> Self {
        Self { store, identity }
    }

    /// List the most recent posts, each paired with its author.
    ///
    /// Fails as a whole if any post's author is missing from the identity
    /// batch; no partial listing is returned.
    pub async fn list_posts(&self) -> Result<Vec<PostWithAuthor>> {
        let posts = self.store.find_recent(POSTS_LIST_LIMIT as i64).await?;
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let user_ids = distinct_author_ids(&posts);

        let timer = IDENTITY_LOOKUP_DURATION_SECONDS.start_timer();
        let users = self
            .identity
            .get_user_list(&user_ids, POSTS_LIST_LIMIT)
            .await;
        timer.observe_duration();

        let authors: HashMap<String, AuthorProfile> = users?
            .into_iter()
            .map(AuthorProfile::from)
            .map(|profile| (profile.id.clone(), profile))
            .collect();

        posts
            .into_iter()
            .map(|post| {
                let Some(user) = authors.get(&post.user_id).cloned() else {
                    tracing::error!(
                        post_id = %post.id,
                        user_id = %post.user_id,
                        "author missing from identity batch"
                    );
                    return Err(AppError::Internal(AUTHOR_NOT_FOUND.to_string()));
                };
                Ok(PostWithAuthor { post, user })
            })
            .collect()
    }

    /// Validate `req` and store it as a post authored by `user_id`.
    pub async fn create_post(&self, user_id: &str, req: &CreatePostRequest) -> Result<Post> {
        req.validate()?;

        let post = self
            .store
            .create(user_id, &req.content, DEFAULT_POST_NAME)
            .await?;

        tracing::info!(post_id = %post.id, %user_id, "post created");

        Ok(post)
    }
}

/// Author ids of `posts`, deduplicated in first-seen order.
fn distinct_author_ids(posts: &[Post]) -> Vec<String> {
    let mut seen = HashSet::new();
    posts
        .iter()
        .filter(|post| seen.insert(post.user_id.as_str()))
        .map(|post| post.user_id.clone())
        .collect()
}
