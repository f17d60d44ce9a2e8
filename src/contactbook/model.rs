use crate::fields::{Company, Email, Name, Phone};
use crate::tags::{Tag, TagSet};
use serde::{Deserialize, Serialize};

/// A contact in the contact book.
///
/// All fields are mandatory and already validated. A `Contact` is never
/// changed in place: editing produces a new value that replaces the old one
/// in the [`ContactBook`](crate::collection::ContactBook).
///
/// Two notions of sameness apply:
/// - `==` compares every field, tags included.
/// - [`Contact::is_same_contact`] compares only name and phone, and is what
///   duplicate detection uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    name: Name,
    phone: Phone,
    email: Email,
    company: Company,
    #[serde(default)]
    tags: TagSet,
}

impl Contact {
    pub fn new(name: Name, phone: Phone, email: Email, company: Company, tags: TagSet) -> Self {
        Self {
            name,
            phone,
            email,
            company,
            tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn company(&self) -> &Company {
        &self.company
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// True if both contacts refer to the same person: same name once
    /// whitespace is collapsed and case ignored, and same phone number.
    pub fn is_same_contact(&self, other: &Contact) -> bool {
        self.name.match_key() == other.name.match_key() && self.phone == other.phone
    }

    /// The lexicographically smallest tag, lowercased, or `""` for an untagged
    /// contact. Sorting by tag orders contacts by this key.
    pub fn smallest_tag_key(&self) -> String {
        self.tags
            .iter()
            .map(|tag| tag.as_str().to_lowercase())
            .min()
            .unwrap_or_default()
    }

    /// True if any of this contact's tags equals one of `wanted`, ignoring case.
    pub fn has_any_tag(&self, wanted: &TagSet) -> bool {
        self.tags.iter().any(|own| {
            wanted
                .iter()
                .any(|tag| own.as_str().eq_ignore_ascii_case(tag.as_str()))
        })
    }
}

/// Formats a contact for user-facing messages, listing every field and tag.
///
/// ```text
/// Name: Alex Yeoh; Phone: 87438807; Email: alexyeoh@example.com; Company: Google; Tags: [sales]
/// ```
pub fn format_contact(contact: &Contact) -> String {
    let tags: String = contact.tags.iter().map(Tag::to_string).collect();
    format!(
        "Name: {}; Phone: {}; Email: {}; Company: {}; Tags: {}",
        contact.name, contact.phone, contact.email, contact.company, tags
    )
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::tags::tag_set;

    /// Builds contacts for tests with sensible defaults for every field.
    #[derive(Debug, Clone)]
    pub struct ContactBuilder {
        name: String,
        phone: String,
        email: String,
        company: String,
        tags: Vec<String>,
    }

    impl Default for ContactBuilder {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ContactBuilder {
        pub fn new() -> Self {
            Self {
                name: "Amy Bee".to_string(),
                phone: "85355255".to_string(),
                email: "amy@gmail.com".to_string(),
                company: "Google".to_string(),
                tags: Vec::new(),
            }
        }

        pub fn from_contact(contact: &Contact) -> Self {
            Self {
                name: contact.name.to_string(),
                phone: contact.phone.to_string(),
                email: contact.email.to_string(),
                company: contact.company.to_string(),
                tags: contact.tags.iter().map(|t| t.as_str().to_string()).collect(),
            }
        }

        pub fn name(mut self, name: &str) -> Self {
            self.name = name.to_string();
            self
        }

        pub fn phone(mut self, phone: &str) -> Self {
            self.phone = phone.to_string();
            self
        }

        pub fn email(mut self, email: &str) -> Self {
            self.email = email.to_string();
            self
        }

        pub fn company(mut self, company: &str) -> Self {
            self.company = company.to_string();
            self
        }

        pub fn tags(mut self, tags: &[&str]) -> Self {
            self.tags = tags.iter().map(|t| t.to_string()).collect();
            self
        }

        pub fn build(self) -> Contact {
            Contact::new(
                Name::new(&self.name).unwrap(),
                Phone::new(&self.phone).unwrap(),
                Email::new(&self.email).unwrap(),
                Company::new(&self.company).unwrap(),
                tag_set(self.tags).unwrap(),
            )
        }
    }
}
