//! User entity for SeaORM.

use blogroll_core::domain::User;
use blogroll_core::error::RepoError;
use sea_orm::Set;
use sea_orm::entity::prelude::*;

use super::bad_column;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub name: Option<String>,
    /// JSON array of owned post ids, in creation order.
    #[sea_orm(column_type = "JsonBinary")]
    pub posts: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub(crate) fn post_ids_to_json(ids: &[Uuid]) -> Json {
    Json::Array(ids.iter().map(|id| Json::String(id.to_string())).collect())
}

/// Decode the `posts` column of the user row `id`.
pub(crate) fn post_ids_from_json(id: Uuid, posts: Json) -> Result<Vec<Uuid>, RepoError> {
    serde_json::from_value(posts).map_err(|e| bad_column("users", id, "posts", e))
}

impl TryFrom<Model> for User {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, RepoError> {
        Ok(Self {
            id: model.id,
            posts: post_ids_from_json(model.id, model.posts)?,
            username: model.username,
            name: model.name,
        })
    }
}

impl TryFrom<User> for ActiveModel {
    type Error = RepoError;

    fn try_from(user: User) -> Result<Self, RepoError> {
        Ok(Self {
            id: Set(user.id),
            username: Set(user.username),
            name: Set(user.name),
            posts: Set(post_ids_to_json(&user.posts)),
        })
    }
}
