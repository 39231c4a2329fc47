//! Post entity for SeaORM.

use blogroll_core::domain::Post;
use blogroll_core::error::RepoError;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use super::bad_column;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: i64,
    /// JSON array of strings.
    #[sea_orm(column_type = "JsonBinary")]
    pub comments: Json,
    /// Filled by the database; gives listings a stable order.
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Post {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, RepoError> {
        let likes = u64::try_from(model.likes)
            .map_err(|e| bad_column("posts", model.id, "likes", e))?;
        let comments = serde_json::from_value(model.comments)
            .map_err(|e| bad_column("posts", model.id, "comments", e))?;

        Ok(Self {
            id: model.id,
            owner_id: model.user_id,
            title: model.title,
            author: model.author,
            url: model.url,
            likes,
            comments,
        })
    }
}

impl TryFrom<Post> for ActiveModel {
    type Error = RepoError;

    fn try_from(post: Post) -> Result<Self, RepoError> {
        let likes = i64::try_from(post.likes).map_err(|_| {
            RepoError::Query(format!("likes {} of {} exceed the column range", post.likes, post.id))
        })?;

        Ok(Self {
            id: Set(post.id),
            user_id: Set(post.owner_id),
            title: Set(post.title),
            author: Set(post.author),
            url: Set(post.url),
            likes: Set(likes),
            comments: Set(Json::from(post.comments)),
            created_at: NotSet,
        })
    }
}
