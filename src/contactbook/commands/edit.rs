use crate::collection::{ContactBook, ViewFilter};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ContactError, Result};
use crate::fields::{Company, Email, Name, Phone};
use crate::index::{index_contacts, Target};
use crate::model::{format_contact, Contact};
use crate::tags::TagSet;

use super::helpers::resolve_target;

pub const USAGE: &str = "edit: Edits the contact identified by its index in the displayed list, or by its name. \
Fields given overwrite the existing values; t/ on its own removes every tag.\n\
Parameters: INDEX (must be a positive integer) or NAME [n/NAME] [p/PHONE] [e/EMAIL] [c/COMPANY] [t/TAG]...\n\
Example: edit 1 p/91234567 e/johndoe@example.com\n\
Example: edit John Doe c/Meta";

/// The fields an edit overwrites. Absent fields keep their old values; a
/// present tag set replaces the old one as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub company: Option<Company>,
    pub tags: Option<TagSet>,
}

impl EditDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.company.is_some()
            || self.tags.is_some()
    }

    /// Builds the edited copy of `contact`.
    pub fn apply(&self, contact: &Contact) -> Contact {
        Contact::new(
            self.name.clone().unwrap_or_else(|| contact.name().clone()),
            self.phone.clone().unwrap_or_else(|| contact.phone().clone()),
            self.email.clone().unwrap_or_else(|| contact.email().clone()),
            self.company
                .clone()
                .unwrap_or_else(|| contact.company().clone()),
            self.tags.clone().unwrap_or_else(|| contact.tags().clone()),
        )
    }
}

pub fn run(book: &mut ContactBook, target: &Target, descriptor: &EditDescriptor) -> Result<CmdResult> {
    if !descriptor.is_any_field_edited() {
        return Err(ContactError::NoFieldsEdited);
    }

    let old = resolve_target(book, target)?;
    let edited = descriptor.apply(&old);

    book.replace(&old, edited.clone()).map_err(|e| match e {
        ContactError::DuplicateContact => ContactError::EditWouldCreateDuplicate,
        other => other,
    })?;
    book.set_view_filter(ViewFilter::Exactly(edited.clone()));

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Edited contact: {}",
            format_contact(&edited)
        )))
        .with_listed_contacts(index_contacts(book))
        .with_affected_contacts(vec![edited]))
}
