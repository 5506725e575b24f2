/// Posts Service Library
///
/// Serves the `posts` procedures of the social feed: recent posts joined with
/// author profiles from the external identity directory, and creation of
/// emoji posts by signed-in users.
///
/// # Modules
///
/// - `handlers`: RPC-style HTTP procedures
/// - `models`: Posts, author profiles, request DTOs
/// - `services`: List/join and create logic
/// - `db`: Storage seam and PostgreSQL repository
/// - `clients`: Identity directory client
/// - `middleware`: Bearer authentication and request metrics
/// - `validation`: Emoji-only content rule
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
/// - `metrics`: Prometheus collectors
pub mod clients;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod services;
pub mod validation;

pub use config::Config;
pub use error::{AppError, Result};
