use crate::utils::error::{AppError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// A command compared against a whole input line must be a single word.
pub fn validate_single_word(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value.trim().split_whitespace().count() != 1 {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a single word".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("shell.prompt", "> ").is_ok());
        assert!(validate_non_empty_string("shell.prompt", "").is_err());
        assert!(validate_non_empty_string("shell.prompt", "   ").is_err());
    }

    #[test]
    fn test_validate_single_word() {
        assert!(validate_single_word("shell.exit_command", "exit").is_ok());
        assert!(validate_single_word("shell.exit_command", " quit ").is_ok());
        assert!(validate_single_word("shell.exit_command", "good bye").is_err());
        assert!(validate_single_word("shell.exit_command", "").is_err());
    }
}
