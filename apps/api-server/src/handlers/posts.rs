//! Blog post handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blogroll_core::domain::{Post, PostDraft, PostPatch};
use blogroll_shared::dto::{
    CreatePostRequest, PostResponse, UpdateCommentsRequest, UpdatePostRequest,
};

use crate::middleware::auth::{Authenticated, MaybeAuthenticated};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Parse a path id. Malformed ids are a 400, never a 404.
fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("malformatted id: {raw}")))
}

pub(crate) fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        author: post.author,
        url: post.url,
        likes: post.likes,
        comments: post.comments,
        user: post.owner_id.to_string(),
    }
}

/// GET /api/blogs
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/blogs/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state.posts.get(id).await?;
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /api/blogs - requires a bearer token.
pub async fn create(
    state: web::Data<AppState>,
    Authenticated(identity): Authenticated,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let draft = PostDraft {
        title: req.title,
        author: req.author,
        url: req.url,
        likes: req.likes,
        comments: req.comments,
    };

    let post = state.posts.create(&identity, draft).await?;
    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /api/blogs/{id}
pub async fn update(
    state: web::Data<AppState>,
    auth: MaybeAuthenticated,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let req = body.into_inner();
    let patch = PostPatch {
        title: req.title,
        author: req.author,
        url: req.url,
        likes: req.likes,
        comments: req.comments,
    };

    let post = state.posts.update(auth.identity(), id, patch).await?;
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// PUT /api/blogs/{id}/comments
pub async fn update_comments(
    state: web::Data<AppState>,
    auth: MaybeAuthenticated,
    path: web::Path<String>,
    body: web::Json<UpdateCommentsRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let patch = PostPatch::comments(body.into_inner().comments);

    let post = state.posts.update(auth.identity(), id, patch).await?;
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /api/blogs/{id} - only the creator may delete.
pub async fn delete(
    state: web::Data<AppState>,
    Authenticated(identity): Authenticated,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    state.posts.delete(&identity, id).await?;
    Ok(HttpResponse::NoContent().finish())
}
