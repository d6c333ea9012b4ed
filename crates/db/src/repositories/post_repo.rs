//! Repository for the `posts` table.

use chrono::NaiveDate;
use shusso_core::types::DbId;
use sqlx::PgPool;

use crate::models::post::{Post, PostInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, horse_name, club, race_date, racecourse, race_number, \
                        race_name, conditions, confidence, poster_name, comment, \
                        password_hash, created_at";

/// Provides CRUD operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post, returning the created row.
    ///
    /// `password_hash` is stored in place of the plaintext credential
    /// carried by `input`.
    pub async fn create(
        pool: &PgPool,
        input: &PostInput,
        password_hash: &str,
    ) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (horse_name, club, race_date, racecourse, race_number,
                                race_name, conditions, confidence, poster_name, comment,
                                password_hash)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(&input.horse_name)
            .bind(&input.club)
            .bind(input.race_date)
            .bind(&input.racecourse)
            .bind(input.race_number)
            .bind(&input.race_name)
            .bind(&input.conditions)
            .bind(input.confidence)
            .bind(&input.poster_name)
            .bind(&input.comment)
            .bind(password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a post by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all posts, soonest race first, then by racecourse and race slot.
    pub async fn list(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts
             ORDER BY race_date ASC, racecourse ASC, race_number ASC"
        );
        sqlx::query_as::<_, Post>(&query).fetch_all(pool).await
    }

    /// Replace all editable fields of a post. The stored credential is
    /// left untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &PostInput,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "UPDATE posts SET
                horse_name = $2,
                club = $3,
                race_date = $4,
                racecourse = $5,
                race_number = $6,
                race_name = $7,
                conditions = $8,
                confidence = $9,
                poster_name = $10,
                comment = $11
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .bind(&input.horse_name)
            .bind(&input.club)
            .bind(input.race_date)
            .bind(&input.racecourse)
            .bind(input.race_number)
            .bind(&input.race_name)
            .bind(&input.conditions)
            .bind(input.confidence)
            .bind(&input.poster_name)
            .bind(&input.comment)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a post. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every post whose race day is before `cutoff`.
    ///
    /// Returns the number of rows removed.
    pub async fn purge_expired(pool: &PgPool, cutoff: NaiveDate) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE race_date < $1")
            .bind(cutoff)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
