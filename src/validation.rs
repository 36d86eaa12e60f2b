use crate::error::{ContactError, ContactResult};

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> ContactResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(ContactError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Trims an optional field. Blank input stays an empty string.
pub fn trim_field(value: &str) -> String {
    value.trim().to_string()
}

/// Trims an update field, returning None if blank so the caller keeps the current value.
pub fn trim_optional(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|s| !s.is_empty())
}
