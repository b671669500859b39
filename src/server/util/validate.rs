use crate::server::error::resource::ResourceError;

/// Rejects a blank required field.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), ResourceError> {
    if value.trim().is_empty() {
        return Err(ResourceError::Validation(format!("{} must not be empty", field)));
    }

    Ok(())
}

/// Block labels are stored comma separated, so a label cannot contain a comma.
pub fn validate_blocks(blocks: &[String]) -> Result<(), ResourceError> {
    if let Some(block) = blocks.iter().find(|block| block.contains(',')) {
        return Err(ResourceError::Validation(format!(
            "Block label \"{}\" must not contain a comma",
            block
        )));
    }

    Ok(())
}

/// Emails are stored trimmed and lowercase so lookups ignore case.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
