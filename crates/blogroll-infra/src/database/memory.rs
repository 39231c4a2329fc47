//! In-memory repositories - used when no database is configured, and in tests.
//!
//! Records are kept in insertion order so listings (and therefore the
//! first-wins tie-breaks in the stats) are reproducible. Data is lost on
//! process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blogroll_core::domain::{Post, User};
use blogroll_core::error::RepoError;
use blogroll_core::ports::{BaseRepository, PostRepository, UserRepository};

/// Post store backed by a `Vec` behind an async RwLock.
#[derive(Default)]
pub struct InMemoryPostRepository {
    rows: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|p| p.id == id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|p| p.id == post.id) {
            Some(existing) => *existing = post.clone(),
            None => rows.push(post.clone()),
        }
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        let position = rows
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        rows.remove(position);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.rows.read().await.clone())
    }
}

/// User store backed by a `Vec` behind an async RwLock.
#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|u| u.id == id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let mut rows = self.rows.write().await;
        if rows
            .iter()
            .any(|u| u.username == user.username && u.id != user.id)
        {
            return Err(RepoError::Constraint("username already taken".to_string()));
        }
        match rows.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => *existing = user.clone(),
            None => rows.push(user.clone()),
        }
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|u| u.id != id);
        if rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn append_post(&self, user_id: Uuid, post_id: Uuid) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        let user = rows
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(RepoError::NotFound)?;
        user.posts.push(post_id);
        Ok(())
    }
}
