//! Application services built on the ports.

mod auth;
mod posts;

pub use auth::{TokenAuthorizer, bearer_token};
pub use posts::PostService;
