//! HTTP handlers and route configuration.

mod auth;
mod categories;
mod comments;
mod health;
mod posts;
mod profile;

use actix_web::{HttpResponse, http::header, web};
use serde::Deserialize;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            // Post routes
            .route("/posts", web::get().to(posts::index))
            .route("/posts", web::post().to(posts::create))
            .route("/posts/{post_id}", web::get().to(posts::detail))
            .route("/posts/{post_id}", web::put().to(posts::edit))
            .route("/posts/{post_id}", web::delete().to(posts::delete))
            // Comment routes
            .route(
                "/posts/{post_id}/comments",
                web::post().to(comments::create),
            )
            .route(
                "/posts/{post_id}/comments/{comment_id}",
                web::put().to(comments::edit),
            )
            .route(
                "/posts/{post_id}/comments/{comment_id}",
                web::delete().to(comments::delete),
            )
            // Category routes
            .route("/categories/{slug}/posts", web::get().to(categories::posts))
            // Profile routes
            .route("/profile", web::put().to(profile::edit))
            .route("/profile/{username}", web::get().to(profile::show)),
    );
}

/// Page number request parameter for listing endpoints.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: usize,
}

fn default_page() -> usize {
    1
}

/// 303 See Other to `location`. Mutations answer with a redirect to the
/// affected resource's view; ownership failures redirect the same way
/// instead of producing an error body.
pub(crate) fn see_other(location: String) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub(crate) fn post_detail_url(post_id: uuid::Uuid) -> String {
    format!("/api/posts/{post_id}")
}
