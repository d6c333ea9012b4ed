pub mod clubs;
pub mod health;
pub mod posts;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /posts              list (GET), create (POST)
/// /posts/{id}         update (PUT), delete (DELETE)
/// /clubs              club registry (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/posts", posts::router())
        .nest("/clubs", clubs::router())
}
