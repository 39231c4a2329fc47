//! Post reads and mutations, guarded by ownership rules.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::ownership::{self, UpdatePolicy};
use crate::domain::stats::BlogStats;
use crate::domain::{Identity, Post, PostDraft, PostPatch};
use crate::error::DomainError;
use crate::ports::{AuthError, BaseRepository, PostRepository, UserRepository};

/// Orchestrates post storage on behalf of authenticated users.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
    update_policy: UpdatePolicy,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        users: Arc<dyn UserRepository>,
        update_policy: UpdatePolicy,
    ) -> Self {
        Self {
            posts,
            users,
            update_policy,
        }
    }

    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_all().await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })
    }

    /// Create a post owned by `identity`.
    ///
    /// The post is written first and the owner's post list second. The two
    /// writes are not atomic: if the second one fails the post still counts as
    /// created.
    pub async fn create(&self, identity: &Identity, draft: PostDraft) -> Result<Post, DomainError> {
        if let Err(e) = draft.validate() {
            tracing::debug!(user_id = %identity.user_id, error = %e, "Rejected post draft");
            return Err(e.into());
        }

        let owner = self
            .users
            .find_by_id(identity.user_id)
            .await?
            .ok_or_else(|| AuthError::InvalidToken("token subject does not exist".to_string()))?;

        let post = Post::new(ownership::attach_owner(identity), draft);
        let saved = self.posts.save(post).await?;

        if let Err(e) = self.users.append_post(owner.id, saved.id).await {
            tracing::error!(
                post_id = %saved.id,
                user_id = %owner.id,
                error = %e,
                "Post saved but owner post list was not updated"
            );
        }

        tracing::info!(post_id = %saved.id, user_id = %owner.id, "Post created");
        Ok(saved)
    }

    /// Delete a post. Only its owner may do so.
    pub async fn delete(&self, identity: &Identity, id: Uuid) -> Result<(), DomainError> {
        let post = self.get(id).await?;
        ownership::authorize_delete(identity, &post)?;

        self.posts.delete(id).await?;
        tracing::info!(post_id = %id, user_id = %identity.user_id, "Post deleted");
        Ok(())
    }

    /// Replace the fields present in `patch`, subject to the update policy.
    pub async fn update(
        &self,
        identity: Result<Option<&Identity>, AuthError>,
        id: Uuid,
        patch: PostPatch,
    ) -> Result<Post, DomainError> {
        patch.validate()?;
        let mut post = self.get(id).await?;
        ownership::authorize_update(self.update_policy, identity, &post)?;

        post.apply(patch);
        let saved = self.posts.save(post).await?;
        tracing::debug!(post_id = %id, "Post updated");
        Ok(saved)
    }

    pub async fn stats(&self) -> Result<BlogStats, DomainError> {
        let posts = self.list().await?;
        Ok(BlogStats::from_posts(&posts))
    }
}
