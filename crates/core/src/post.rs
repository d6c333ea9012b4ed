//! Field validation rules for race-pick posts.
//!
//! Create and update both submit the full replacement record, so the same
//! rules apply to both. Integer/date parseability of `race_number` and
//! `race_date` is enforced by typed deserialization at the HTTP boundary;
//! the functions here cover everything the wire format cannot express.

use crate::error::CoreError;

/// Minimum allowed confidence rating.
pub const MIN_CONFIDENCE: i32 = 1;

/// Maximum allowed confidence rating.
pub const MAX_CONFIDENCE: i32 = 5;

/// Validate that the horse name is present.
pub fn validate_horse_name(horse_name: &str) -> Result<(), CoreError> {
    if horse_name.is_empty() {
        return Err(CoreError::Validation {
            field: "horse_name",
            message: "Horse name must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Validate that a club code was submitted.
///
/// Any non-empty value is accepted, including codes absent from the club
/// registry -- unknown clubs are displayed verbatim, not rejected.
pub fn validate_club(club: &str) -> Result<(), CoreError> {
    if club.is_empty() {
        return Err(CoreError::Validation {
            field: "club",
            message: "Club must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Validate that the racecourse is present.
pub fn validate_racecourse(racecourse: &str) -> Result<(), CoreError> {
    if racecourse.is_empty() {
        return Err(CoreError::Validation {
            field: "racecourse",
            message: "Racecourse must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Validate a confidence rating is within the allowed star range.
pub fn validate_confidence(confidence: i32) -> Result<(), CoreError> {
    if confidence < MIN_CONFIDENCE || confidence > MAX_CONFIDENCE {
        return Err(CoreError::Validation {
            field: "confidence",
            message: format!(
                "Confidence must be between {MIN_CONFIDENCE} and {MAX_CONFIDENCE}, got {confidence}"
            ),
        });
    }
    Ok(())
}

/// Validate the edit/delete credential supplied on create.
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.is_empty() {
        return Err(CoreError::Validation {
            field: "password",
            message: "Password must not be empty".to_string(),
        });
    }
    Ok(())
}
