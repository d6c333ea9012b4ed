//! Handler for the club registry.

use axum::Json;

use shusso_core::clubs::{self, Club};

// ---------------------------------------------------------------------------
// GET /clubs
// ---------------------------------------------------------------------------

/// The full club registry: short code, display name, and style class for
/// each known racing club. Static data; clients use it for the club
/// dropdown and tag styling.
pub async fn list_clubs() -> Json<&'static [Club]> {
    Json(clubs::all())
}
