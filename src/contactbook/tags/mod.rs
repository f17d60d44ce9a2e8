//! Tag support for contacts.
//!
//! Tags are short labels ("friends", "sales") used to group and filter
//! contacts. A contact owns a *set* of tags: order does not matter and each
//! tag appears once. Identity is case-sensitive, but the command parsers
//! lowercase every tag they read, so in practice stored tags are lowercase.
//!
//! See [`validation`] for the naming rules.

pub mod validation;

use crate::fields::FieldError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

pub use validation::{validate_tag_name, TagValidationError, MAX_LENGTH};

/// The tag set owned by a contact. Ordered so that rendering and
/// serialization are deterministic.
pub type TagSet = BTreeSet<Tag>;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    /// Builds a tag from `name` as given (no trimming, no case folding).
    pub fn new(name: impl Into<String>) -> Result<Self, FieldError> {
        let name = name.into();
        validate_tag_name(&name).map_err(|reason| FieldError::InvalidTag {
            name: name.clone(),
            reason,
        })?;
        Ok(Self(name))
    }

    /// Builds a tag the way the command parsers do: trimmed and lowercased.
    pub fn normalized(name: &str) -> Result<Self, FieldError> {
        Self::new(name.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Tag {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Tag::new(value)
    }
}

impl From<Tag> for String {
    fn from(value: Tag) -> Self {
        value.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// Builds a tag set from names, failing on the first invalid one.
pub fn tag_set<I, S>(names: I) -> Result<TagSet, FieldError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Tag::new).collect()
}
