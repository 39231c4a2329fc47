use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity - a principal that can own posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    /// Ids of the posts this user created, in creation order.
    pub posts: Vec<Uuid>,
}

impl User {
    /// Create a new user with a generated ID and no posts.
    pub fn new(username: String, name: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            name,
            posts: Vec::new(),
        }
    }
}
