use uuid::Uuid;

use super::ApiError;

/// Course ids are UUIDs; anything else is rejected before touching the store.
/// Returns the canonical hyphenated lowercase form.
pub fn validate_course_id(id: &str) -> Result<String, ApiError> {
    Uuid::parse_str(id.trim())
        .map(|uuid| uuid.to_string())
        .map_err(|_| ApiError::validation("Invalid course ID format"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_course_id() {
        assert_eq!(
            validate_course_id("6A4F5C2E-1B3D-4E5F-8A9B-0C1D2E3F4A5B").unwrap(),
            "6a4f5c2e-1b3d-4e5f-8a9b-0c1d2e3f4a5b"
        );
        assert!(validate_course_id("6a4f5c2e1b3d4e5f8a9b0c1d2e3f4a5b").is_ok());

        for bad in ["", "123", "not-a-uuid", "507f1f77bcf86cd799439011"] {
            assert!(
                matches!(validate_course_id(bad), Err(ApiError::ValidationError(msg)) if msg == "Invalid course ID format"),
                "{bad}"
            );
        }
    }
}
