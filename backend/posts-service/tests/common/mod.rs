#![allow(dead_code)]

pub mod in_memory_post_store;
pub mod mock_identity_client;

pub use in_memory_post_store::{post_at, InMemoryPostStore};
pub use mock_identity_client::MockIdentityClient;

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use posts_service::middleware::{Claims, JwtAuthMiddleware, JwtValidator};
use std::sync::Arc;

pub const TEST_JWT_SECRET: &str = "posts-service-test-secret";

pub fn auth_middleware() -> JwtAuthMiddleware {
    JwtAuthMiddleware::new(Some(Arc::new(JwtValidator::hs256(TEST_JWT_SECRET))))
}

/// HS256 session token for `user_id`, valid for an hour.
pub fn bearer_token(user_id: &str) -> String {
    let claims = Claims {
        sub: user_id.to_string(),
        exp: (Utc::now() + Duration::hours(1)).timestamp(),
        iat: Some(Utc::now().timestamp()),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("encode test token");
    format!("Bearer {token}")
}

/// Build the posts procedures over the given store and identity doubles.
macro_rules! posts_app {
    ($store:expr, $identity:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(
                    posts_service::services::PostService::new(
                        std::sync::Arc::new($store.clone()),
                        std::sync::Arc::new($identity.clone()),
                    ),
                ))
                .configure(|cfg| {
                    posts_service::handlers::configure(cfg, $crate::common::auth_middleware())
                }),
        )
        .await
    };
}
