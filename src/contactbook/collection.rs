//! # Contact Collection
//!
//! [`ContactBook`] owns every contact, in insertion order, and a derived
//! *view*: the contacts that pass the current [`ViewFilter`], arranged by the
//! current [`SortKey`]. The view is what the user sees and what display
//! indexes point into.
//!
//! ```text
//! view = sort(filter(contacts, filter), order)
//! ```
//!
//! The view is stored as positions into the contact sequence and is rebuilt
//! eagerly by every call that changes the contacts, the filter or the order,
//! so [`ContactBook::view`] is always current.
//!
//! ## Invariants
//!
//! - No two contacts share a soft identity ([`Contact::is_same_contact`]).
//! - The view is a subsequence of the contacts, possibly reordered.
//! - Sorting is stable: contacts with equal keys keep their insertion order.

use crate::error::{ContactError, Result};
use crate::fields::normalize_name;
use crate::model::Contact;
use crate::tags::TagSet;
use log::debug;
use std::cmp::Ordering;
use std::fmt;

/// Which contacts the view shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewFilter {
    /// Every contact.
    #[default]
    All,
    /// Contacts with a name word equal to one of the keywords, ignoring case.
    NameKeywords(Vec<String>),
    /// Contacts whose normalized name equals this one, ignoring case.
    NameEquals(String),
    /// Contacts carrying at least one of these tags, ignoring case.
    AnyTag(TagSet),
    /// The single contact equal to this one.
    Exactly(Contact),
}

impl ViewFilter {
    /// Builds a [`ViewFilter::NameEquals`] from a raw name reference.
    pub fn name_equals(reference: &str) -> Self {
        ViewFilter::NameEquals(normalize_name(reference))
    }

    pub fn matches(&self, contact: &Contact) -> bool {
        match self {
            ViewFilter::All => true,
            ViewFilter::NameKeywords(keywords) => contact
                .name()
                .as_str()
                .split_whitespace()
                .any(|word| keywords.iter().any(|kw| word.to_lowercase() == kw.to_lowercase())),
            ViewFilter::NameEquals(name) => contact.name().match_key() == name.to_lowercase(),
            ViewFilter::AnyTag(tags) => contact.has_any_tag(tags),
            ViewFilter::Exactly(target) => contact == target,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Tag,
}

impl SortField {
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "name" => Some(SortField::Name),
            "tag" => Some(SortField::Tag),
            _ => None,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Name => write!(f, "name"),
            SortField::Tag => write!(f, "tag"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "asc" | "ascending" => Some(SortOrder::Ascending),
            "desc" | "descending" => Some(SortOrder::Descending),
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ascending"),
            SortOrder::Descending => write!(f, "descending"),
        }
    }
}

/// How the view is ordered when a sort is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortKey {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    pub fn compare(&self, a: &Contact, b: &Contact) -> Ordering {
        let ascending = match self.field {
            SortField::Name => a
                .name()
                .as_str()
                .to_lowercase()
                .cmp(&b.name().as_str().to_lowercase()),
            SortField::Tag => a.smallest_tag_key().cmp(&b.smallest_tag_key()),
        };
        match self.order {
            SortOrder::Ascending => ascending,
            SortOrder::Descending => ascending.reverse(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactBook {
    contacts: Vec<Contact>,
    filter: ViewFilter,
    order: Option<SortKey>,
    view: Vec<usize>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from contacts loaded elsewhere, rejecting duplicates.
    pub fn from_contacts<I: IntoIterator<Item = Contact>>(contacts: I) -> Result<Self> {
        let mut book = Self::new();
        for contact in contacts {
            book.add(contact)?;
        }
        Ok(book)
    }

    /// Every contact, in insertion order, regardless of the view.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn has_contact(&self, contact: &Contact) -> bool {
        self.contacts.iter().any(|c| c.is_same_contact(contact))
    }

    pub fn add(&mut self, contact: Contact) -> Result<()> {
        if self.has_contact(&contact) {
            return Err(ContactError::DuplicateContact);
        }
        self.contacts.push(contact);
        self.refresh_view();
        Ok(())
    }

    /// Removes the contact equal to `contact`. Does nothing if it is absent.
    pub fn remove(&mut self, contact: &Contact) {
        if let Some(pos) = self.contacts.iter().position(|c| c == contact) {
            self.contacts.remove(pos);
            self.refresh_view();
        }
    }

    /// Replaces `old` with `new` at the same position.
    ///
    /// Fails with [`ContactError::DuplicateContact`] if `new` is the same
    /// contact as any *other* entry. `old` itself never counts as a clash, so
    /// editing a contact's email or company always succeeds.
    pub fn replace(&mut self, old: &Contact, new: Contact) -> Result<()> {
        let pos = self
            .contacts
            .iter()
            .position(|c| c == old)
            .ok_or_else(|| ContactError::Store("Contact to replace is not in the book".into()))?;

        let clashes = self
            .contacts
            .iter()
            .enumerate()
            .any(|(i, c)| i != pos && c.is_same_contact(&new));
        if clashes {
            return Err(ContactError::DuplicateContact);
        }

        self.contacts[pos] = new;
        self.refresh_view();
        Ok(())
    }

    /// Removes every contact. The filter and order are kept.
    pub fn clear(&mut self) {
        self.contacts.clear();
        self.refresh_view();
    }

    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    pub fn order(&self) -> Option<SortKey> {
        self.order
    }

    pub fn set_view_filter(&mut self, filter: ViewFilter) {
        debug!("view filter set to {:?}", filter);
        self.filter = filter;
        self.refresh_view();
    }

    /// Sets the view order. `None` restores insertion order.
    pub fn set_view_order(&mut self, order: Option<SortKey>) {
        debug!("view order set to {:?}", order);
        self.order = order;
        self.refresh_view();
    }

    /// The contacts currently displayed, in display order.
    pub fn view(&self) -> Vec<&Contact> {
        self.view.iter().map(|&i| &self.contacts[i]).collect()
    }

    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    /// The contact at zero-based `position` in the view.
    pub fn view_get(&self, position: usize) -> Option<&Contact> {
        self.view.get(position).map(|&i| &self.contacts[i])
    }

    fn refresh_view(&mut self) {
        let contacts = &self.contacts;
        let mut view: Vec<usize> = (0..contacts.len())
            .filter(|&i| self.filter.matches(&contacts[i]))
            .collect();
        if let Some(key) = self.order {
            // sort_by is stable, so equal keys keep insertion order
            view.sort_by(|&a, &b| key.compare(&contacts[a], &contacts[b]));
        }
        self.view = view;
    }
}
