//! Route definitions for the post board, mounted at `/posts`.
//!
//! ```text
//! GET    /       -> list_posts
//! POST   /       -> create_post
//! PUT    /{id}   -> update_post
//! DELETE /{id}   -> delete_post
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list_posts).post(posts::create_post))
        .route("/{id}", put(posts::update_post).delete(posts::delete_post))
}
