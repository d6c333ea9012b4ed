//! Route definitions for the club registry, mounted at `/clubs`.

use axum::routing::get;
use axum::Router;

use crate::handlers::clubs;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(clubs::list_clubs))
}
