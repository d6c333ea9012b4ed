//! Handlers for the race-pick post board.
//!
//! Create is open to everyone; update and delete are gated on the password
//! chosen at create time (or the admin master password). Updates are
//! whole-record replaces, mirroring the edit form which resubmits every
//! field.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use shusso_core::error::CoreError;
use shusso_core::types::DbId;
use shusso_core::{conditions, post, retention};
use shusso_db::models::post::{DeleteRequest, Post, PostInput, PostResponse};
use shusso_db::repositories::PostRepo;

use crate::auth::password;
use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a post exists, returning the full row.
async fn ensure_post_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Post> {
    PostRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))
}

/// Apply the field validation rules shared by create and update.
fn validate_input(input: &PostInput) -> AppResult<()> {
    post::validate_horse_name(&input.horse_name)?;
    post::validate_club(&input.club)?;
    post::validate_racecourse(&input.racecourse)?;
    post::validate_confidence(input.confidence)?;
    Ok(())
}

/// Authorize a mutation: the admin master password always passes, otherwise
/// the submitted password must match the hash stored with the post.
fn authorize(config: &ServerConfig, submitted: &str, stored_hash: &str) -> AppResult<()> {
    if submitted == config.admin_password {
        return Ok(());
    }
    let matches = password::verify_password(submitted, stored_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if matches {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "Incorrect password".to_string(),
        )))
    }
}

// ---------------------------------------------------------------------------
// GET /posts
// ---------------------------------------------------------------------------

/// List all posts, soonest race first.
///
/// Posts whose race day has passed (judged on the JST calendar, with one
/// day of grace) are purged before listing, so the board cleans itself up
/// on read instead of needing a scheduler.
pub async fn list_posts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cutoff = retention::purge_cutoff(Utc::now());
    let purged = PostRepo::purge_expired(&state.pool, cutoff).await?;
    if purged > 0 {
        tracing::info!(purged, %cutoff, "Removed expired posts");
    }

    let posts = PostRepo::list(&state.pool).await?;
    tracing::debug!(count = posts.len(), "Listed posts");

    let items: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();
    Ok(Json(items))
}

// ---------------------------------------------------------------------------
// POST /posts
// ---------------------------------------------------------------------------

/// Create a new post. The submitted password becomes the edit/delete
/// credential, stored as an Argon2id hash.
pub async fn create_post(
    State(state): State<AppState>,
    Json(input): Json<PostInput>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    post::validate_password(&input.password)?;

    let password_hash = password::hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let created = PostRepo::create(&state.pool, &input, &password_hash).await?;

    let (surface, distance) = conditions::decode(&created.conditions);
    tracing::info!(
        id = created.id,
        horse = %created.horse_name,
        racecourse = %created.racecourse,
        surface,
        distance,
        "Post created"
    );
    Ok((StatusCode::CREATED, Json(PostResponse::from(created))))
}

// ---------------------------------------------------------------------------
// PUT /posts/{id}
// ---------------------------------------------------------------------------

/// Replace an existing post after checking its password.
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PostInput>,
) -> AppResult<impl IntoResponse> {
    let existing = ensure_post_exists(&state.pool, id).await?;
    authorize(&state.config, &input.password, &existing.password_hash)?;
    validate_input(&input)?;

    let updated = PostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;
    tracing::info!(id = updated.id, "Post updated");
    Ok(Json(PostResponse::from(updated)))
}

// ---------------------------------------------------------------------------
// DELETE /posts/{id}
// ---------------------------------------------------------------------------

/// Permanently delete a post after checking its password.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(req): Json<DeleteRequest>,
) -> AppResult<StatusCode> {
    let existing = ensure_post_exists(&state.pool, id).await?;
    authorize(&state.config, &req.password, &existing.password_hash)?;

    let deleted = PostRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Post deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Post", id }))
    }
}
