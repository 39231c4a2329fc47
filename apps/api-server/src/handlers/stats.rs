//! Aggregate statistics endpoint.

use actix_web::{HttpResponse, web};

use blogroll_core::domain::stats::BlogStats;
use blogroll_shared::dto::{
    AuthorStatsResponse, FavoritePostResponse, MostBlogsResponse, MostLikesResponse,
    StatsResponse,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(stats: BlogStats) -> StatsResponse {
    StatsResponse {
        total_likes: stats.total_likes,
        favorite_blog: stats.favorite.map(|p| FavoritePostResponse {
            title: p.title,
            author: p.author,
            likes: p.likes,
        }),
        most_blogs: stats.most_posts.map(|a| MostBlogsResponse {
            author: a.author,
            blogs: a.posts,
        }),
        most_likes: stats.most_likes.map(|a| MostLikesResponse {
            author: a.author,
            likes: a.likes,
        }),
        authors: stats
            .authors
            .into_iter()
            .map(|g| AuthorStatsResponse {
                author: g.author,
                blogs: g.posts,
                likes: g.likes,
            })
            .collect(),
    }
}

/// GET /api/blogs/stats
pub async fn stats(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let stats = state.posts.stats().await?;
    Ok(HttpResponse::Ok().json(to_response(stats)))
}
