//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use blogroll_core::domain::Post;
use blogroll_core::error::RepoError;
use blogroll_core::ports::{PostRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, db_error};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn append_post(&self, user_id: Uuid, post_id: Uuid) -> Result<(), RepoError> {
        tracing::debug!(user_id = %user_id, post_id = %post_id, "Appending post to owner");

        let model = UserEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(db_error)?
            .ok_or(RepoError::NotFound)?;

        // A column that does not decode aborts here, before anything is written.
        let mut posts = user::post_ids_from_json(model.id, model.posts.clone())?;
        posts.push(post_id);

        let mut active: user::ActiveModel = model.into();
        active.posts = Set(user::post_ids_to_json(&posts));
        active.update(&self.db).await.map_err(db_error)?;

        Ok(())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::CreatedAt)
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        result.into_iter().map(Post::try_from).collect()
    }
}
