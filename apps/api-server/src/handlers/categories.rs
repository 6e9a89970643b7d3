//! Category listing handler.

use actix_web::{HttpResponse, web};
use chrono::Utc;

use blogicum_core::pagination::paginate;
use blogicum_shared::dto::{CategoryPostsResponse, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::PageQuery;

/// GET /api/categories/{slug}/posts - visible posts in a published category.
///
/// A missing category and an unpublished one both answer 404.
pub async fn posts(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let category = state
        .categories
        .find_published_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

    let posts = state
        .posts
        .list_published_by_category(category.id, Utc::now())
        .await?;
    let page = paginate(posts, query.page).map(PostResponse::from);

    Ok(HttpResponse::Ok().json(CategoryPostsResponse {
        category: category.into(),
        posts: page,
    }))
}
