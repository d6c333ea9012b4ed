//! Race condition codec.
//!
//! A post stores its surface and distance as one string: the surface token
//! concatenated with the free-text distance (`"芝1600"`, `"ダート1200m"`).
//! There is no separator, so decoding relies on the surface tokens being
//! mutually non-prefixing. Any new token added here must keep that property
//! or decoding becomes ambiguous.

/// Turf surface token.
pub const SURFACE_TURF: &str = "芝";

/// Dirt surface token.
pub const SURFACE_DIRT: &str = "ダート";

/// Jump (steeplechase) surface token.
pub const SURFACE_JUMP: &str = "障害";

/// Surface prefixes in decode priority order. First match wins.
pub const SURFACE_PRIORITY: [&str; 3] = [SURFACE_TURF, SURFACE_DIRT, SURFACE_JUMP];

/// Join a surface token and distance into the stored `conditions` string.
pub fn encode(surface: &str, distance: &str) -> String {
    format!("{surface}{distance}")
}

/// Split a stored `conditions` string back into `(surface, distance)`.
///
/// Checks the known surface prefixes in priority order and strips the first
/// match. Rows that predate the surface prefix (or were entered by hand)
/// match nothing; those decode as turf with the whole string as the
/// distance, unmodified, so legacy data still renders instead of erroring.
pub fn decode(conditions: &str) -> (&'static str, &str) {
    for token in SURFACE_PRIORITY {
        if let Some(distance) = conditions.strip_prefix(token) {
            return (token, distance);
        }
    }
    (SURFACE_TURF, conditions)
}
