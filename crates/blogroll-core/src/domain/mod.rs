//! Domain entities and the pure rules that operate on them.

mod identity;
mod post;
mod user;

pub mod ownership;
pub mod stats;

pub use identity::Identity;
pub use ownership::{Owned, UpdatePolicy};
pub use post::{MAX_LIKES, Post, PostDraft, PostPatch};
pub use user::User;
