/// OpenAPI documentation for Posts Service
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers::posts;
use crate::models::{AuthorProfile, CreatePostRequest, Post, PostWithAuthor};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Posts Service API",
        version = "1.0.0",
        description = "Recent posts joined with author profiles from the identity directory, and emoji post creation for signed-in users.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8085", description = "Development server"),
    ),
    paths(posts::get_all, posts::create),
    components(schemas(Post, AuthorProfile, PostWithAuthor, CreatePostRequest)),
    tags(
        (name = "posts", description = "Post listing and creation"),
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token issued by the identity provider"))
                        .build(),
                ),
            )
        }
    }
}

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/api/v1/openapi.json"
    }
}
