//! Post entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shusso_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full post row from the `posts` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`PostResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: DbId,
    pub horse_name: String,
    pub club: String,
    pub race_date: NaiveDate,
    pub racecourse: String,
    pub race_number: i32,
    pub race_name: Option<String>,
    pub conditions: String,
    pub confidence: i32,
    pub poster_name: Option<String>,
    pub comment: Option<String>,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// Safe post representation for API responses (no credential).
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: DbId,
    pub horse_name: String,
    pub club: String,
    pub race_date: NaiveDate,
    pub racecourse: String,
    pub race_number: i32,
    pub race_name: Option<String>,
    pub conditions: String,
    pub confidence: i32,
    pub poster_name: Option<String>,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            horse_name: post.horse_name,
            club: post.club,
            race_date: post.race_date,
            racecourse: post.racecourse,
            race_number: post.race_number,
            race_name: post.race_name,
            conditions: post.conditions,
            confidence: post.confidence,
            poster_name: post.poster_name,
            comment: post.comment,
            created_at: post.created_at,
        }
    }
}

/// DTO submitted on create and update.
///
/// Updates are whole-record replaces, so both operations share this shape.
/// `conditions` arrives pre-encoded (surface token + distance). `password`
/// is the plaintext credential: hashed and stored on create, compared
/// against the stored hash on update.
#[derive(Debug, Deserialize)]
pub struct PostInput {
    pub horse_name: String,
    pub club: String,
    pub race_date: NaiveDate,
    pub racecourse: String,
    pub race_number: i32,
    pub race_name: Option<String>,
    pub conditions: String,
    pub confidence: i32,
    pub poster_name: Option<String>,
    pub comment: Option<String>,
    pub password: String,
}

/// DTO for the delete request body.
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub password: String,
}
