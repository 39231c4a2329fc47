use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ownership::Owned;
use crate::error::ValidationError;

/// Largest like count a post may hold; storage keeps likes in a signed 64-bit column.
pub const MAX_LIKES: u64 = i64::MAX as u64;

fn check_likes(likes: Option<u64>) -> Result<(), ValidationError> {
    match likes {
        Some(n) if n > MAX_LIKES => Err(ValidationError::LikesOutOfRange(n)),
        _ => Ok(()),
    }
}

/// Post entity - a single blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    /// The user who created the post. Never rewritten after creation.
    pub owner_id: Uuid,
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: u64,
    pub comments: Vec<String>,
}

impl Post {
    /// Create a new post owned by `owner_id` from a draft, applying field defaults.
    pub fn new(owner_id: Uuid, draft: PostDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            title: draft.title,
            author: draft.author,
            url: draft.url,
            likes: draft.likes.unwrap_or(0),
            comments: draft.comments.unwrap_or_default(),
        }
    }

    /// Overwrite exactly the fields present in `patch`.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = Some(title);
        }
        if let Some(author) = patch.author {
            self.author = Some(author);
        }
        if let Some(url) = patch.url {
            self.url = Some(url);
        }
        if let Some(likes) = patch.likes {
            self.likes = likes;
        }
        if let Some(comments) = patch.comments {
            self.comments = comments;
        }
    }
}

impl Owned for Post {
    fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}

/// Input for creating a post. Every field may be absent on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
    pub comments: Option<Vec<String>>,
}

impl PostDraft {
    /// A draft is rejected only when title and url are *both* missing.
    /// Missing just one of them is accepted.
    pub fn lacks_required_fields(&self) -> bool {
        self.title.is_none() && self.url.is_none()
    }

    /// Checks run before a post is created.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.lacks_required_fields() {
            return Err(ValidationError::MissingRequiredFields);
        }
        check_likes(self.likes)
    }
}

/// Partial update of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
    pub comments: Option<Vec<String>>,
}

impl PostPatch {
    /// Patch touching only the comment list.
    pub fn comments(comments: Vec<String>) -> Self {
        Self {
            comments: Some(comments),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_likes(self.likes)
    }
}
