//! In-memory PostStore for Integration Tests

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use posts_service::db::PostStore;
use posts_service::models::Post;
use posts_service::Result;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct InMemoryPostStore {
    posts: Arc<Mutex<Vec<Post>>>,
    write_count: Arc<Mutex<usize>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed one post per author id, the first being the oldest.
    pub fn seeded(author_ids: &[&str]) -> Self {
        let store = Self::new();
        let base = Utc::now() - Duration::days(1);
        {
            let mut posts = store.posts.lock().unwrap();
            for (i, author) in author_ids.iter().enumerate() {
                posts.push(post_at(author, base + Duration::seconds(i as i64)));
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn write_count(&self) -> usize {
        *self.write_count.lock().unwrap()
    }
}

pub fn post_at(user_id: &str, created_at: DateTime<Utc>) -> Post {
    Post {
        id: Uuid::new_v4(),
        user_id: user_id.to_string(),
        content: "😀".to_string(),
        created_at,
        name: "name".to_string(),
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn find_recent(&self, limit: i64) -> Result<Vec<Post>> {
        let mut posts = self.posts.lock().unwrap().clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts.truncate(limit.max(0) as usize);
        Ok(posts)
    }

    async fn create(&self, user_id: &str, content: &str, name: &str) -> Result<Post> {
        *self.write_count.lock().unwrap() += 1;

        let post = Post {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
            name: name.to_string(),
        };
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }
}
