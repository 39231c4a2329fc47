//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a post. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
    pub comments: Option<Vec<String>>,
}

/// Request to update a post. Only the fields present are replaced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
    pub comments: Option<Vec<String>>,
}

/// Request to replace a post's comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCommentsRequest {
    pub comments: Vec<String>,
}

/// A post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: u64,
    pub comments: Vec<String>,
    /// Id of the user that created the post.
    pub user: String,
}

/// Most-liked post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritePostResponse {
    pub title: Option<String>,
    pub author: Option<String>,
    pub likes: u64,
}

/// Author with the most posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MostBlogsResponse {
    pub author: Option<String>,
    pub blogs: usize,
}

/// Author with the most likes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MostLikesResponse {
    pub author: Option<String>,
    pub likes: u64,
}

/// Per-author rollup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorStatsResponse {
    pub author: Option<String>,
    pub blogs: usize,
    pub likes: u64,
}

/// Aggregate statistics over every post. Empty reductions are `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_likes: u64,
    pub favorite_blog: Option<FavoritePostResponse>,
    pub most_blogs: Option<MostBlogsResponse>,
    pub most_likes: Option<MostLikesResponse>,
    pub authors: Vec<AuthorStatsResponse>,
}
