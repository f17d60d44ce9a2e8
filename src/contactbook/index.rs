//! # Display Indexes and Targets
//!
//! Users address contacts by their position in the current view, counted from
//! one (`delete 2`), or by name (`delete Alex Yeoh`). This module holds the
//! user-facing index type, the pairing of a contact with its index for
//! rendering, and the rules for reading a target token.
//!
//! ## Target tokens
//!
//! A token made only of ASCII digits that parses to a positive number is an
//! index. The literal `0` is rejected outright as an invalid index: it is
//! never treated as a name, even if a contact happens to be called "0".
//! Anything else, once trimmed, is a name reference.

use crate::collection::ContactBook;
use crate::error::{ContactError, Result};
use crate::model::Contact;
use std::fmt;
use std::str::FromStr;

/// A one-based position in the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    /// Returns `None` for zero.
    pub fn from_one_based(n: usize) -> Option<Self> {
        (n > 0).then_some(Self(n))
    }

    pub fn from_zero_based(n: usize) -> Self {
        Self(n + 1)
    }

    pub fn one_based(&self) -> usize {
        self.0
    }

    pub fn zero_based(&self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("Invalid index format: {}", s));
        }
        let n: usize = s
            .parse()
            .map_err(|_| format!("Index out of range: {}", s))?;
        DisplayIndex::from_one_based(n).ok_or_else(|| format!("Index must be positive: {}", s))
    }
}

/// How a command addresses the contact it acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Index(DisplayIndex),
    Name(String),
}

/// Reads a target token. `usage` is reported when the token is empty.
pub fn parse_target(token: &str, usage: &str) -> Result<Target> {
    let trimmed = token.trim();
    if trimmed == "0" {
        return Err(ContactError::InvalidIndex);
    }
    // Digits too large for a usize fail here and are looked up as a name.
    if let Ok(index) = DisplayIndex::from_str(trimmed) {
        return Ok(Target::Index(index));
    }
    if trimmed.is_empty() {
        return Err(ContactError::missing_argument(usage));
    }
    Ok(Target::Name(trimmed.to_string()))
}

/// A contact paired with its current display index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayContact {
    pub index: DisplayIndex,
    pub contact: Contact,
}

/// The current view with display indexes assigned, ready for rendering.
pub fn index_contacts(book: &ContactBook) -> Vec<DisplayContact> {
    book.view()
        .into_iter()
        .enumerate()
        .map(|(i, contact)| DisplayContact {
            index: DisplayIndex::from_zero_based(i),
            contact: contact.clone(),
        })
        .collect()
}
