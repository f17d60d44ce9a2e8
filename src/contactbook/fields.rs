//! Validated field values for a contact.
//!
//! Every type here wraps a `String` that was checked on construction, so a
//! `Name` or `Phone` in hand is always well-formed. Input is trimmed before it
//! is validated. Values serialize as plain strings and are re-validated when
//! deserialized, so a hand-edited contacts file cannot smuggle bad data in.

use crate::tags::TagValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}][\p{L}\p{N} '.,-]*$").unwrap());

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").unwrap());

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9](?:[A-Za-z0-9+_.-]*[A-Za-z0-9])?@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*$",
    )
    .unwrap()
});

/// Error raised when a field value fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error(
        "Names should start with a letter or digit and contain only letters, digits, spaces \
         and the characters ' - . , (got \"{0}\")"
    )]
    InvalidName(String),

    #[error("Phone numbers should only contain digits and be at least 3 digits long (got \"{0}\")")]
    InvalidPhone(String),

    #[error(
        "Emails should be of the format local-part@domain, where the local part holds \
         alphanumerics and + _ . - (not at either end) and the domain ends with a label \
         of at least 2 characters (got \"{0}\")"
    )]
    InvalidEmail(String),

    #[error("Company names can take any value but should not be blank")]
    InvalidCompany,

    #[error("Invalid tag \"{name}\": {reason}")]
    InvalidTag {
        name: String,
        reason: TagValidationError,
    },
}

/// Trims `name` and collapses runs of whitespace into single spaces.
///
/// This is the form names are compared in, both for duplicate detection and
/// for name-based targeting.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(name: impl AsRef<str>) -> Result<Self, FieldError> {
        let trimmed = name.as_ref().trim();
        if !NAME_RE.is_match(trimmed) {
            return Err(FieldError::InvalidName(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with whitespace collapsed, lowercased. Two names with the same
    /// key refer to the same person.
    pub fn match_key(&self) -> String {
        normalize_name(&self.0).to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(phone: impl AsRef<str>) -> Result<Self, FieldError> {
        let trimmed = phone.as_ref().trim();
        if !PHONE_RE.is_match(trimmed) {
            return Err(FieldError::InvalidPhone(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(email: impl AsRef<str>) -> Result<Self, FieldError> {
        let trimmed = email.as_ref().trim();
        if !Self::is_valid(trimmed) {
            return Err(FieldError::InvalidEmail(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    fn is_valid(email: &str) -> bool {
        if !EMAIL_RE.is_match(email) {
            return false;
        }
        // The regex guarantees an '@' and well-formed labels; only the length
        // of the last domain label is left to check.
        email
            .rsplit(['@', '.'])
            .next()
            .is_some_and(|label| label.len() >= 2)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Company(String);

impl Company {
    pub fn new(company: impl AsRef<str>) -> Result<Self, FieldError> {
        let trimmed = company.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FieldError::InvalidCompany);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_field_conversions {
    ($($ty:ident),*) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = FieldError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    $ty::new(value)
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.0
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }
        )*
    };
}

string_field_conversions!(Name, Phone, Email, Company);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  John    Smith "), "John Smith");
        assert_eq!(normalize_name("John\tSmith"), "John Smith");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn test_name_validation() {
        assert!(Name::new("Alex Yeoh").is_ok());
        assert!(Name::new("Jean-Luc O'Neil Jr.").is_ok());
        assert!(Name::new("0").is_ok());
        assert!(Name::new("").is_err());
        assert!(Name::new("   ").is_err());
        assert!(Name::new("*Alex").is_err());
        assert!(Name::new("Alex/Yeoh").is_err());
    }

    #[test]
    fn test_name_is_trimmed() {
        let name = Name::new("  Alex Yeoh  ").unwrap();
        assert_eq!(name.as_str(), "Alex Yeoh");
    }

    #[test]
    fn test_name_match_key() {
        let a = Name::new("John   SMITH").unwrap();
        let b = Name::new("john smith").unwrap();
        assert_eq!(a.match_key(), b.match_key());
        assert_ne!(a, b);
    }

    #[test]
    fn test_phone_validation() {
        assert!(Phone::new("911").is_ok());
        assert!(Phone::new("93121534").is_ok());
        assert!(Phone::new("91").is_err());
        assert!(Phone::new("9011p041").is_err());
        assert!(Phone::new("9312 1534").is_err());
        assert!(Phone::new("+6591234567").is_err());
        assert!(Phone::new("").is_err());
    }

    #[test]
    fn test_email_validation() {
        assert!(Email::new("alexyeoh@example.com").is_ok());
        assert!(Email::new("a+b_c.d-e@sub.example.co").is_ok());
        assert!(Email::new("linghui@nus.edu.sg").is_ok());
        assert!(Email::new("user@example").is_ok());

        assert!(Email::new("").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("user@").is_err());
        assert!(Email::new("user@@example.com").is_err());
        assert!(Email::new(".user@example.com").is_err());
        assert!(Email::new("user-@example.com").is_err());
        assert!(Email::new("user@example.c").is_err());
        assert!(Email::new("user@-example.com").is_err());
    }

    #[test]
    fn test_company_validation() {
        assert!(Company::new("NUS Computing").is_ok());
        assert!(Company::new("N/A").is_ok());
        assert_eq!(Company::new("   "), Err(FieldError::InvalidCompany));
    }

    #[test]
    fn test_serialization_roundtrip_revalidates() {
        let phone = Phone::new("80000001").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"80000001\"");

        let bad: Result<Phone, _> = serde_json::from_str("\"not a phone\"");
        assert!(bad.is_err());
    }
}
