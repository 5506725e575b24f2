//! Mock IdentityClient for Integration Tests
//!
//! Serves user records from an in-memory directory and counts batch calls.

use async_trait::async_trait;
use posts_service::clients::IdentityClient;
use posts_service::models::UserRecord;
use posts_service::Result;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockIdentityClient {
    /// Simulated directory: user_id -> record
    users: Arc<Mutex<HashMap<String, UserRecord>>>,
    /// Number of get_user_list calls
    batch_call_count: Arc<Mutex<usize>>,
}

impl MockIdentityClient {
    pub fn new<I: IntoIterator<Item = &'static str>>(user_ids: I) -> Self {
        let users = user_ids
            .into_iter()
            .map(|id| {
                (
                    id.to_string(),
                    UserRecord {
                        id: id.to_string(),
                        username: Some(format!("{id}_name")),
                        image_url: format!("https://img.example/{id}.png"),
                    },
                )
            })
            .collect();

        Self {
            users: Arc::new(Mutex::new(users)),
            batch_call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn batch_call_count(&self) -> usize {
        *self.batch_call_count.lock().unwrap()
    }
}

#[async_trait]
impl IdentityClient for MockIdentityClient {
    async fn get_user_list(&self, user_ids: &[String], limit: usize) -> Result<Vec<UserRecord>> {
        *self.batch_call_count.lock().unwrap() += 1;

        let users = self.users.lock().unwrap();
        Ok(user_ids
            .iter()
            .filter_map(|id| users.get(id).cloned())
            .take(limit)
            .collect())
    }
}
