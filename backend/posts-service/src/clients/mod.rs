/// Clients for services this crate depends on
pub mod identity;

pub use identity::{HttpIdentityClient, IdentityClient};
