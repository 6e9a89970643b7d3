//! Post handlers: index listing, detail, create, edit, delete.
//!
//! Mutation endpoints enforce ownership by redirecting non-authors to the
//! post's detail view with nothing persisted; the redirect itself is the
//! enforcement, never an error body.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use uuid::Uuid;

use blogicum_core::domain::Post;
use blogicum_core::pagination::paginate;
use blogicum_shared::dto::{CommentResponse, PostDetailResponse, PostResponse};
use blogicum_shared::forms::PostForm;

use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::{PageQuery, post_detail_url, see_other};

fn post_not_found() -> AppError {
    // One message for "absent" and "hidden": the two are indistinguishable
    // to the client.
    AppError::NotFound("Post not found".to_string())
}

/// Reject forms that reference a category or location that does not exist.
async fn validate_tags(state: &AppState, form: &PostForm) -> AppResult<()> {
    let mut errors = Vec::new();
    if let Some(category_id) = form.category_id {
        if state.categories.find_by_id(category_id).await?.is_none() {
            errors.push("category_id: unknown category".to_string());
        }
    }
    if let Some(location_id) = form.location_id {
        if state.locations.find_by_id(location_id).await?.is_none() {
            errors.push("location_id: unknown location".to_string());
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

/// GET /api/posts - paginated listing of publicly visible posts.
pub async fn index(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.list_published(Utc::now()).await?;
    let page = paginate(posts, query.page).map(PostResponse::from);

    Ok(HttpResponse::Ok().json(page))
}

/// GET /api/posts/{post_id} - post detail with its comments, oldest first.
///
/// The author sees the post regardless of publish state; anyone else only
/// gets it through the visibility filter, and a hidden post answers 404.
pub async fn detail(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    viewer: OptionalIdentity,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(post_not_found)?;

    let post = if viewer.is_user(post.author_id) {
        post
    } else {
        state
            .posts
            .find_published_by_id(post_id, Utc::now())
            .await?
            .ok_or_else(post_not_found)?
    };

    let comments = state.comments.list_by_post(post_id).await?;

    Ok(HttpResponse::Ok().json(PostDetailResponse {
        post: post.into(),
        comments: comments.into_iter().map(CommentResponse::from).collect(),
    }))
}

/// POST /api/posts - create a post owned by the acting identity.
///
/// The author is always the authenticated user; the form has no author
/// field, so nothing a client submits can reassign it.
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<PostForm>,
) -> AppResult<HttpResponse> {
    let form = body.into_inner();
    form.validate().map_err(AppError::Validation)?;
    validate_tags(&state, &form).await?;

    let mut post = Post::new(identity.user_id, form.title, form.text, form.pub_date);
    post.is_published = form.is_published;
    post.image_url = form.image_url;
    post.category_id = form.category_id;
    post.location_id = form.location_id;

    let saved = state.posts.save(post).await?;
    tracing::debug!(post_id = %saved.id, author = %identity.username, "Post created");

    Ok(see_other(format!("/api/profile/{}", identity.username)))
}

/// PUT /api/posts/{post_id} - edit a post in place.
pub async fn edit(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<PostForm>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let mut post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(post_not_found)?;

    if !post.is_authored_by(identity.user_id) {
        return Ok(see_other(post_detail_url(post_id)));
    }

    let form = body.into_inner();
    form.validate().map_err(AppError::Validation)?;
    validate_tags(&state, &form).await?;

    // Scalar fields only; author and creation time are immutable.
    post.title = form.title;
    post.text = form.text;
    post.pub_date = form.pub_date;
    post.is_published = form.is_published;
    post.image_url = form.image_url;
    post.category_id = form.category_id;
    post.location_id = form.location_id;

    state.posts.save(post).await?;

    Ok(see_other(post_detail_url(post_id)))
}

/// DELETE /api/posts/{post_id} - delete a post and redirect to the index.
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(post_not_found)?;

    if !post.is_authored_by(identity.user_id) {
        return Ok(see_other(post_detail_url(post_id)));
    }

    state.posts.delete(post_id).await?;
    tracing::debug!(post_id = %post_id, author = %identity.username, "Post deleted");

    Ok(see_other("/api/posts".to_string()))
}
