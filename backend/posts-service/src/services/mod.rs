/// Business logic layer
///
/// - `posts`: listing posts with authors, creating posts
pub mod posts;

pub use posts::{PostService, POSTS_LIST_LIMIT};
