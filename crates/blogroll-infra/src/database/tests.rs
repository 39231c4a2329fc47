use blogroll_core::domain::{Post, User};
use blogroll_core::error::RepoError;
use blogroll_core::ports::{BaseRepository, PostRepository, UserRepository};
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};
use serde_json::json;
use uuid::Uuid;

use crate::database::entity::{post, user};
use crate::database::postgres_repo::{PostgresPostRepository, PostgresUserRepository};

fn row(title: &str, likes: i64) -> post::Model {
    post::Model {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        title: Some(title.to_owned()),
        author: Some("Michael Chan".to_owned()),
        url: Some("https://reactpatterns.com/".to_owned()),
        likes,
        comments: json!(["nice", "meh"]),
        created_at: chrono::Utc::now().into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let model = row("React patterns", 7);
    let post_id = model.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model.clone()]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.id, post_id);
    assert_eq!(post.owner_id, model.user_id);
    assert_eq!(post.title.as_deref(), Some("React patterns"));
    assert_eq!(post.likes, 7);
    assert_eq!(post.comments, vec!["nice".to_string(), "meh".to_string()]);
}

#[tokio::test]
async fn test_find_all_keeps_row_order() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row("first", 1), row("second", 2)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let posts = repo.find_all().await.unwrap();
    let titles: Vec<_> = posts.iter().filter_map(|p| p.title.as_deref()).collect();
    assert_eq!(titles, vec!["first", "second"]);
}

#[tokio::test]
async fn test_save_inserts_when_update_misses() {
    let model = row("Type wars", 2);
    let post = Post::try_from(model.clone()).unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // UPDATE ... RETURNING finds nothing, INSERT ... RETURNING yields the row.
        .append_query_results([Vec::<post::Model>::new(), vec![model.clone()]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let saved: Post = repo.save(post).await.unwrap();
    assert_eq!(saved.id, model.id);
    assert_eq!(saved.likes, 2);
}

#[tokio::test]
async fn test_delete_missing_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result = BaseRepository::<Post, Uuid>::delete(&repo, Uuid::new_v4()).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

fn user_row(posts: serde_json::Value) -> user::Model {
    user::Model {
        id: Uuid::new_v4(),
        username: "mluukkai".to_owned(),
        name: Some("Matti Luukkainen".to_owned()),
        posts,
    }
}

#[tokio::test]
async fn test_append_post_keeps_existing_ids() {
    let existing = Uuid::new_v4();
    let added = Uuid::new_v4();
    let model = user_row(json!([existing.to_string()]));
    let updated = user::Model {
        posts: json!([existing.to_string(), added.to_string()]),
        ..model.clone()
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // SELECT the user, then UPDATE ... RETURNING.
        .append_query_results([vec![model.clone()], vec![updated]])
        .into_connection();
    let repo = PostgresUserRepository::new(db);

    repo.append_post(model.id, added).await.unwrap();

    let log = repo.db.into_transaction_log();
    assert_eq!(log.len(), 2);
    let update = format!("{:?}", log[1]);
    assert!(update.contains("UPDATE"));
    assert!(update.contains(&existing.to_string()));
    assert!(update.contains(&added.to_string()));
}

#[tokio::test]
async fn test_append_post_to_missing_user_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<user::Model>::new()])
        .into_connection();
    let repo = PostgresUserRepository::new(db);

    let result = repo.append_post(Uuid::new_v4(), Uuid::new_v4()).await;

    assert!(matches!(result, Err(RepoError::NotFound)));
    assert_eq!(repo.db.into_transaction_log().len(), 1);
}

#[tokio::test]
async fn test_append_post_leaves_undecodable_row_untouched() {
    let model = user_row(json!({ "not": "a list" }));

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model.clone()]])
        .into_connection();
    let repo = PostgresUserRepository::new(db);

    let result = repo.append_post(model.id, Uuid::new_v4()).await;

    assert!(matches!(result, Err(RepoError::Query(_))));
    // Only the SELECT ran; no UPDATE was issued.
    assert_eq!(repo.db.into_transaction_log().len(), 1);
}

#[tokio::test]
async fn test_find_user_decodes_post_ids() {
    let first = Uuid::new_v4();
    let model = user_row(json!([first.to_string()]));

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model.clone()]])
        .into_connection();
    let repo = PostgresUserRepository::new(db);

    let found: User = repo.find_by_id(model.id).await.unwrap().unwrap();

    assert_eq!(found.username, "mluukkai");
    assert_eq!(found.name.as_deref(), Some("Matti Luukkainen"));
    assert_eq!(found.posts, vec![first]);
}

#[test]
fn test_user_round_trips_through_active_model() {
    let mut user = User::new("hellas".to_owned(), None);
    user.posts.push(Uuid::new_v4());

    let active = user::ActiveModel::try_from(user.clone()).unwrap();
    let stored = user::Model {
        id: active.id.unwrap(),
        username: active.username.unwrap(),
        name: active.name.unwrap(),
        posts: active.posts.unwrap(),
    };

    assert_eq!(User::try_from(stored).unwrap(), user);
}

#[test]
fn test_corrupt_user_posts_are_reported() {
    let result = User::try_from(user_row(json!(["not-a-uuid"])));
    assert!(matches!(result, Err(RepoError::Query(_))));
}

#[test]
fn test_negative_likes_are_reported() {
    let result = Post::try_from(row("odd", -5));
    assert!(matches!(result, Err(RepoError::Query(_))));
}

#[test]
fn test_corrupt_comments_are_reported() {
    let mut model = row("odd", 1);
    model.comments = json!("not a list");
    assert!(matches!(Post::try_from(model), Err(RepoError::Query(_))));
}

#[test]
fn test_likes_beyond_column_range_are_refused() {
    let mut post = Post::try_from(row("big", 1)).unwrap();
    post.likes = u64::MAX;

    let result = post::ActiveModel::try_from(post);
    assert!(matches!(result, Err(RepoError::Query(_))));
}

#[tokio::test]
async fn test_connection_errors_map_the_same_for_reads_and_deletes() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Conn(RuntimeErr::Internal("pool closed".to_owned()))])
        .append_exec_errors([DbErr::Conn(RuntimeErr::Internal("pool closed".to_owned()))])
        .into_connection();
    let repo = PostgresPostRepository::new(db);

    let read = BaseRepository::<Post, Uuid>::find_by_id(&repo, Uuid::new_v4()).await;
    assert!(matches!(read, Err(RepoError::Connection(_))));

    let delete = BaseRepository::<Post, Uuid>::delete(&repo, Uuid::new_v4()).await;
    assert!(matches!(delete, Err(RepoError::Connection(_))));
}
