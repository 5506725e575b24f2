/// Post procedures - `posts.getAll` and `posts.create`
use crate::error::Result;
use crate::metrics::record_procedure;
use crate::middleware::UserId;
use crate::models::{CreatePostRequest, Post, PostWithAuthor};
use crate::services::PostService;
use actix_web::{web, HttpResponse};

/// List the 100 most recent posts with their authors
#[utoipa::path(
    get,
    path = "/api/trpc/posts.getAll",
    tag = "posts",
    responses(
        (status = 200, description = "Posts newest first, each with its author", body = Vec<PostWithAuthor>),
        (status = 500, description = "Storage or identity failure, or a post without author")
    )
)]
pub async fn get_all(service: web::Data<PostService>) -> Result<HttpResponse> {
    let result = service.list_posts().await;
    record_procedure("posts.getAll", &result);

    Ok(HttpResponse::Ok().json(result?))
}

/// Create a post authored by the caller
#[utoipa::path(
    post,
    path = "/api/trpc/posts.create",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = Post),
        (status = 400, description = "Content empty, too long, or not emoji-only"),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create(
    service: web::Data<PostService>,
    user_id: UserId,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let result = service.create_post(&user_id.0, &req).await;
    record_procedure("posts.create", &result);

    Ok(HttpResponse::Created().json(result?))
}
