//! Field-level validation shared by the recipe entities

use super::DomainError;

/// Maximum length of short text columns (names, titles, links)
pub const MAX_TEXT_LENGTH: usize = 255;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const BLANK_MESSAGE: &str = "This field may not be blank.";

/// Trim a required short text field and reject missing, blank or oversized values.
///
/// Returns the trimmed value on success. Errors carry `field` so the API can
/// report which input was rejected.
pub fn clean_required_text(field: &str, value: Option<&str>) -> Result<String, DomainError> {
    let value = value.ok_or_else(|| DomainError::invalid_field(field, REQUIRED_MESSAGE))?;
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(DomainError::invalid_field(field, BLANK_MESSAGE));
    }

    check_length(field, trimmed)?;

    Ok(trimmed.to_string())
}

/// Trim an optional short text field; blank input becomes `None`.
pub fn clean_optional_text(field: &str, value: Option<&str>) -> Result<Option<String>, DomainError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(trimmed) => {
            check_length(field, trimmed)?;
            Ok(Some(trimmed.to_string()))
        }
    }
}

fn check_length(field: &str, value: &str) -> Result<(), DomainError> {
    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(DomainError::invalid_field(
            field,
            format!(
                "Ensure this field has no more than {} characters.",
                MAX_TEXT_LENGTH
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_trims() {
        let value = clean_required_text("name", Some("  Vegan ")).unwrap();
        assert_eq!(value, "Vegan");
    }

    #[test]
    fn test_required_text_missing() {
        let err = clean_required_text("name", None).unwrap_err();
        assert_eq!(err.field(), Some("name"));
        assert!(err.to_string().contains(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_required_text_blank() {
        let err = clean_required_text("title", Some("   ")).unwrap_err();
        assert_eq!(err.field(), Some("title"));
        assert!(err.to_string().contains(BLANK_MESSAGE));
    }

    #[test]
    fn test_required_text_too_long() {
        let long = "a".repeat(MAX_TEXT_LENGTH + 1);
        assert!(clean_required_text("name", Some(&long)).is_err());

        let exact = "a".repeat(MAX_TEXT_LENGTH);
        assert!(clean_required_text("name", Some(&exact)).is_ok());
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(clean_optional_text("link", None).unwrap(), None);
        assert_eq!(clean_optional_text("link", Some("  ")).unwrap(), None);
        assert_eq!(
            clean_optional_text("link", Some("https://example.com")).unwrap(),
            Some("https://example.com".to_string())
        );
    }
}
