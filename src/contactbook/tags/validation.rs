//! Tag name validation.
//!
//! Valid tags:
//! - ASCII letters and digits only, so case folding never changes a tag's length
//! - At least one and at most [`MAX_LENGTH`] characters

/// Longest tag name accepted, in characters.
pub const MAX_LENGTH: usize = 30;

/// Validates a tag name.
///
/// # Examples
/// ```
/// use contactbook::tags::validation::validate_tag_name;
///
/// assert!(validate_tag_name("friends").is_ok());
/// assert!(validate_tag_name("team2024").is_ok());
///
/// assert!(validate_tag_name("").is_err());
/// assert!(validate_tag_name("best friends").is_err());
/// assert!(validate_tag_name("friend*").is_err());
/// ```
pub fn validate_tag_name(name: &str) -> Result<(), TagValidationError> {
    if name.is_empty() {
        return Err(TagValidationError::Empty);
    }

    if let Some(ch) = name.chars().find(|ch| !ch.is_ascii_alphanumeric()) {
        return Err(TagValidationError::InvalidCharacter(ch));
    }

    let length = name.chars().count();
    if length > MAX_LENGTH {
        return Err(TagValidationError::TooLong(length));
    }

    Ok(())
}

/// Error type for tag name validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValidationError {
    /// Tag name is empty
    Empty,
    /// Tag name contains a character that is not an ASCII letter or digit
    InvalidCharacter(char),
    /// Tag name is longer than [`MAX_LENGTH`]
    TooLong(usize),
}

impl std::fmt::Display for TagValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagValidationError::Empty => write!(f, "tag name cannot be empty"),
            TagValidationError::InvalidCharacter(ch) => {
                write!(
                    f,
                    "tag name contains invalid character '{}' (only letters and digits allowed)",
                    ch
                )
            }
            TagValidationError::TooLong(len) => {
                write!(
                    f,
                    "tag name is {} characters long (at most {} allowed)",
                    len, MAX_LENGTH
                )
            }
        }
    }
}

impl std::error::Error for TagValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(length: usize) -> String {
        "a".repeat(length)
    }

    #[test]
    fn test_valid_tags() {
        assert!(validate_tag_name("friend").is_ok());
        assert!(validate_tag_name("Sales").is_ok());
        assert!(validate_tag_name("2024").is_ok());
        assert!(validate_tag_name(&generate(MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_invalid_empty() {
        assert_eq!(validate_tag_name(""), Err(TagValidationError::Empty));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            validate_tag_name(" "),
            Err(TagValidationError::InvalidCharacter(' '))
        );
        assert_eq!(
            validate_tag_name("friend*"),
            Err(TagValidationError::InvalidCharacter('*'))
        );
        assert_eq!(
            validate_tag_name("my-team"),
            Err(TagValidationError::InvalidCharacter('-'))
        );
    }

    #[test]
    fn test_non_ascii_letters_rejected() {
        assert_eq!(
            validate_tag_name("Ärzte"),
            Err(TagValidationError::InvalidCharacter('Ä'))
        );
        assert_eq!(
            validate_tag_name("İstanbul"),
            Err(TagValidationError::InvalidCharacter('İ'))
        );
        assert_eq!(
            validate_tag_name("٣"),
            Err(TagValidationError::InvalidCharacter('٣'))
        );
    }

    #[test]
    fn test_invalid_too_long() {
        assert_eq!(
            validate_tag_name(&generate(MAX_LENGTH + 1)),
            Err(TagValidationError::TooLong(MAX_LENGTH + 1))
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            TagValidationError::Empty.to_string(),
            "tag name cannot be empty"
        );
        assert_eq!(
            TagValidationError::InvalidCharacter('@').to_string(),
            "tag name contains invalid character '@' (only letters and digits allowed)"
        );
    }
}
