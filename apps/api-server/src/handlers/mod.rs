//! HTTP handlers and route configuration.

mod health;
mod posts;
mod stats;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed JSON bodies get the same problem-details shape as other 400s.
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );

    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/blogs")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    // Registered before "/{id}" so it is not taken for an id.
                    .route("/stats", web::get().to(stats::stats))
                    .route("/{id}", web::get().to(posts::get))
                    .route("/{id}", web::put().to(posts::update))
                    .route("/{id}", web::delete().to(posts::delete))
                    .route("/{id}/comments", web::put().to(posts::update_comments)),
            ),
    );
}
