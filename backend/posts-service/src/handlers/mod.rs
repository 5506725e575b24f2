/// HTTP handlers for the posts procedures
///
/// Procedures are exposed RPC-style under `/api/trpc/<router>.<procedure>`:
/// - `posts.getAll`: public
/// - `posts.create`: requires a bearer token
pub mod posts;

use crate::error::AppError;
use crate::middleware::JwtAuthMiddleware;
use actix_web::web;

pub use posts::{create, get_all};

/// Register the posts procedures.
///
/// Expects `web::Data<PostService>` to be registered on the app.
pub fn configure(cfg: &mut web::ServiceConfig, auth: JwtAuthMiddleware) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into());

    cfg.service(
        web::scope("/api/trpc")
            .app_data(json_config)
            .route("/posts.getAll", web::get().to(get_all))
            .service(
                web::resource("/posts.create")
                    .wrap(auth)
                    .route(web::post().to(create)),
            ),
    );
}
