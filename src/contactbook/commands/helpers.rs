use crate::collection::{ContactBook, ViewFilter};
use crate::error::{ContactError, Result};
use crate::fields::normalize_name;
use crate::index::{DisplayIndex, Target};
use crate::model::Contact;
use log::debug;

/// Resolves the contact a delete or edit acts on.
///
/// An index points into the current view. A name is matched against every
/// contact in the book, whitespace-normalized and ignoring case. When more
/// than one contact carries the name, nothing is resolved: the view is
/// narrowed to the matching contacts so the user can pick one by index, and
/// [`ContactError::AmbiguousTarget`] is returned.
pub fn resolve_target(book: &mut ContactBook, target: &Target) -> Result<Contact> {
    match target {
        Target::Index(index) => resolve_index(book, *index),
        Target::Name(reference) => resolve_name(book, reference),
    }
}

fn resolve_index(book: &ContactBook, index: DisplayIndex) -> Result<Contact> {
    book.view_get(index.zero_based())
        .cloned()
        .ok_or(ContactError::InvalidIndex)
}

fn resolve_name(book: &mut ContactBook, reference: &str) -> Result<Contact> {
    let name = normalize_name(reference);
    let key = name.to_lowercase();
    let mut matches: Vec<Contact> = book
        .contacts()
        .iter()
        .filter(|c| c.name().match_key() == key)
        .cloned()
        .collect();

    match matches.len() {
        0 => Err(ContactError::NameNotFound(name)),
        1 => Ok(matches.remove(0)),
        count => {
            debug!("{} contacts named {:?}, narrowing view", count, name);
            book.set_view_filter(ViewFilter::name_equals(&name));
            Err(ContactError::AmbiguousTarget { name, count })
        }
    }
}
