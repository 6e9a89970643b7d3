//! Comment handlers: create, edit, delete.
//!
//! Every outcome redirects back to the parent post's detail view, never to
//! the index. Only the comment's text is editable.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blogicum_core::domain::Comment;
use blogicum_shared::forms::CommentForm;

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::{post_detail_url, see_other};

fn comment_not_found() -> AppError {
    AppError::NotFound("Comment not found".to_string())
}

/// POST /api/posts/{post_id}/comments - comment on a post.
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<CommentForm>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    if state.posts.find_by_id(post_id).await?.is_none() {
        return Err(AppError::NotFound("Post not found".to_string()));
    }

    let form = body.into_inner();
    form.validate().map_err(AppError::Validation)?;

    let comment = Comment::new(post_id, identity.user_id, form.text);
    state.comments.save(comment).await?;

    Ok(see_other(post_detail_url(post_id)))
}

/// PUT /api/posts/{post_id}/comments/{comment_id} - edit a comment.
pub async fn edit(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<CommentForm>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    let mut comment = state
        .comments
        .find_by_id(comment_id)
        .await?
        .filter(|c| c.post_id == post_id)
        .ok_or_else(comment_not_found)?;

    if !comment.is_authored_by(identity.user_id) {
        return Ok(see_other(post_detail_url(post_id)));
    }

    let form = body.into_inner();
    form.validate().map_err(AppError::Validation)?;

    comment.text = form.text;
    state.comments.save(comment).await?;

    Ok(see_other(post_detail_url(post_id)))
}

/// DELETE /api/posts/{post_id}/comments/{comment_id} - delete a comment.
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<(Uuid, Uuid)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    let comment = state
        .comments
        .find_by_id(comment_id)
        .await?
        .filter(|c| c.post_id == post_id)
        .ok_or_else(comment_not_found)?;

    if !comment.is_authored_by(identity.user_id) {
        return Ok(see_other(post_detail_url(post_id)));
    }

    state.comments.delete(comment_id).await?;

    Ok(see_other(post_detail_url(post_id)))
}
