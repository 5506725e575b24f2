// Integration tests for the posts procedures
//
// The real route configuration and auth middleware run against an
// in-memory post store and a mock identity directory.

#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::{bearer_token, InMemoryPostStore, MockIdentityClient};
use posts_service::db::PostStore;
use posts_service::models::{Post, PostWithAuthor};
use posts_service::AppError;
use serde_json::{json, Value};

// ============================================================================
// posts.getAll
// ============================================================================

#[actix_web::test]
async fn get_all_pairs_posts_with_authors_newest_first() {
    let store = InMemoryPostStore::seeded(&["user_a", "user_b", "user_a"]);
    let identity = MockIdentityClient::new(["user_a", "user_b"]);
    let app = posts_app!(store, identity);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/trpc/posts.getAll")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let listed: Vec<PostWithAuthor> = test::read_body_json(resp).await;
    assert_eq!(listed.len(), 3);
    for item in &listed {
        assert_eq!(item.user.id, item.post.user_id);
        assert_eq!(
            item.user.image_url,
            format!("https://img.example/{}.png", item.post.user_id)
        );
    }
    for pair in listed.windows(2) {
        assert!(pair[0].post.created_at >= pair[1].post.created_at);
    }
    assert_eq!(identity.batch_call_count(), 1);
}

#[actix_web::test]
async fn get_all_serializes_public_author_shape() {
    let store = InMemoryPostStore::seeded(&["user_a"]);
    let identity = MockIdentityClient::new(["user_a"]);
    let app = posts_app!(store, identity);

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/trpc/posts.getAll")
            .to_request(),
    )
    .await;

    assert_eq!(
        body[0]["user"],
        json!({
            "id": "user_a",
            "username": "user_a_name",
            "imageUrl": "https://img.example/user_a.png",
        })
    );
    assert_eq!(body[0]["post"]["userId"], "user_a");
    assert_eq!(body[0]["post"]["name"], "name");
}

#[actix_web::test]
async fn get_all_returns_at_most_one_hundred_posts() {
    let store = InMemoryPostStore::new();
    for i in 0..150 {
        let author = if i % 2 == 0 { "user_a" } else { "user_b" };
        store.create(author, "😀", "name").await.unwrap();
    }
    let identity = MockIdentityClient::new(["user_a", "user_b"]);
    let app = posts_app!(store, identity);

    let listed: Vec<PostWithAuthor> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/trpc/posts.getAll")
            .to_request(),
    )
    .await;

    assert_eq!(store.len(), 150);
    assert_eq!(listed.len(), 100);
}

#[actix_web::test]
async fn get_all_fails_when_an_author_cannot_be_resolved() {
    let store = InMemoryPostStore::seeded(&["user_a", "user_deleted"]);
    let identity = MockIdentityClient::new(["user_a"]);
    let app = posts_app!(store, identity);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/trpc/posts.getAll")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "user for post not found");
    assert_eq!(body["code"], "INTERNAL_SERVER_ERROR");
    assert!(body.get("post").is_none());
}

#[actix_web::test]
async fn get_all_with_no_posts_is_empty() {
    let store = InMemoryPostStore::new();
    let identity = MockIdentityClient::empty();
    let app = posts_app!(store, identity);

    let listed: Vec<PostWithAuthor> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/trpc/posts.getAll")
            .to_request(),
    )
    .await;

    assert!(listed.is_empty());
    assert_eq!(identity.batch_call_count(), 0);
}

// ============================================================================
// posts.create
// ============================================================================

#[actix_web::test]
async fn create_stores_emoji_post_for_caller() {
    let store = InMemoryPostStore::new();
    let identity = MockIdentityClient::new(["user_a"]);
    let app = posts_app!(store, identity);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/trpc/posts.create")
            .insert_header(("Authorization", bearer_token("user_a")))
            .set_json(json!({ "content": "😀" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let post: Post = test::read_body_json(resp).await;
    assert_eq!(post.content, "😀");
    assert_eq!(post.user_id, "user_a");
    assert_eq!(post.name, "name");
    assert_eq!(store.write_count(), 1);
}

#[actix_web::test]
async fn created_post_is_listed_first() {
    let store = InMemoryPostStore::seeded(&["user_b"]);
    let identity = MockIdentityClient::new(["user_a", "user_b"]);
    let app = posts_app!(store, identity);

    let created: Post = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/trpc/posts.create")
            .insert_header(("Authorization", bearer_token("user_a")))
            .set_json(json!({ "content": "🎉🎉" }))
            .to_request(),
    )
    .await;

    let listed: Vec<PostWithAuthor> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/trpc/posts.getAll")
            .to_request(),
    )
    .await;

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].post.id, created.id);
    assert_eq!(listed[0].user.id, "user_a");
}

#[actix_web::test]
async fn create_without_token_is_unauthorized_and_writes_nothing() {
    let store = InMemoryPostStore::new();
    let identity = MockIdentityClient::empty();
    let app = posts_app!(store, identity);

    let result = test::try_call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/trpc/posts.create")
            .set_json(json!({ "content": "😀" }))
            .to_request(),
    )
    .await;
    let Err(err) = result else {
        panic!("missing token must be rejected by the auth middleware");
    };

    assert_eq!(
        err.as_response_error().status_code(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        err.as_error::<AppError>().map(AppError::code),
        Some("UNAUTHORIZED")
    );
    assert_eq!(store.write_count(), 0);
}

#[actix_web::test]
async fn create_with_invalid_token_is_unauthorized() {
    let store = InMemoryPostStore::new();
    let identity = MockIdentityClient::empty();
    let app = posts_app!(store, identity);

    for header in ["Bearer not-a-jwt", "Basic dXNlcjpwYXNz"] {
        let result = test::try_call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/trpc/posts.create")
                .insert_header(("Authorization", header))
                .set_json(json!({ "content": "😀" }))
                .to_request(),
        )
        .await;
        let Err(err) = result else {
            panic!("header {header} must be rejected");
        };

        assert_eq!(
            err.as_response_error().status_code(),
            StatusCode::UNAUTHORIZED,
            "header {header}"
        );
    }
    assert_eq!(store.write_count(), 0);
}

#[actix_web::test]
async fn create_rejects_invalid_content() {
    let store = InMemoryPostStore::new();
    let identity = MockIdentityClient::empty();
    let app = posts_app!(store, identity);

    let too_long_text = "a".repeat(256);
    // Emoji only, 256 UTF-16 units.
    let too_long_emoji = "😀".repeat(128);
    for content in [
        "",
        "hello",
        too_long_text.as_str(),
        too_long_emoji.as_str(),
    ] {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/trpc/posts.create")
                .insert_header(("Authorization", bearer_token("user_a")))
                .set_json(json!({ "content": content }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "content {content:?}");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "BAD_REQUEST");
        assert!(body["fields"]["content"].is_array());
    }
    assert_eq!(store.write_count(), 0);
}

#[actix_web::test]
async fn create_accepts_content_at_length_limit() {
    let store = InMemoryPostStore::new();
    let identity = MockIdentityClient::empty();
    let app = posts_app!(store, identity);

    let at_limit = format!("{}✅", "😀".repeat(127));
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/trpc/posts.create")
            .insert_header(("Authorization", bearer_token("user_a")))
            .set_json(json!({ "content": at_limit.as_str() }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let post: Post = test::read_body_json(resp).await;
    assert_eq!(post.content, at_limit);
    assert_eq!(store.write_count(), 1);
}

#[actix_web::test]
async fn create_rejects_malformed_body() {
    let store = InMemoryPostStore::new();
    let identity = MockIdentityClient::empty();
    let app = posts_app!(store, identity);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/trpc/posts.create")
            .insert_header(("Authorization", bearer_token("user_a")))
            .set_json(json!({ "text": "😀" }))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.write_count(), 0);
}
