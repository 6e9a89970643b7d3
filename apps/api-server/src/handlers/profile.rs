//! Profile handlers: view a user's posts, edit one's own profile.

use actix_web::{HttpResponse, web};
use chrono::Utc;

use blogicum_core::pagination::paginate;
use blogicum_shared::dto::{PostResponse, ProfileResponse};
use blogicum_shared::forms::ProfileForm;

use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::{PageQuery, see_other};

/// GET /api/profile/{username} - a user's posts, paginated.
///
/// The profile owner sees all of their posts, unpublished and scheduled
/// ones included; everyone else sees only the publicly visible set.
pub async fn show(
    state: web::Data<AppState>,
    path: web::Path<String>,
    viewer: OptionalIdentity,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let username = path.into_inner();
    let user = state
        .users
        .find_by_username(&username)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let posts = if viewer.is_user(user.id) {
        state.posts.list_by_author(user.id).await?
    } else {
        state
            .posts
            .list_published_by_author(user.id, Utc::now())
            .await?
    };
    let page = paginate(posts, query.page).map(PostResponse::from);

    Ok(HttpResponse::Ok().json(ProfileResponse {
        profile: user.into(),
        posts: page,
    }))
}

/// PUT /api/profile - edit the acting user's own profile.
pub async fn edit(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<ProfileForm>,
) -> AppResult<HttpResponse> {
    let form = body.into_inner();
    form.validate().map_err(AppError::Validation)?;

    let mut user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if form.username != user.username
        && state
            .users
            .find_by_username(&form.username)
            .await?
            .is_some()
    {
        return Err(AppError::Conflict("Username already taken".to_string()));
    }

    user.username = form.username;
    user.first_name = form.first_name;
    user.last_name = form.last_name;
    user.email = form.email;

    let saved = state.users.save(user).await?;

    Ok(see_other(format!("/api/profile/{}", saved.username)))
}
