use crate::collection::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{index_contacts, Target};
use crate::model::format_contact;

use super::helpers::resolve_target;

pub const USAGE: &str = "delete: Deletes the contact identified by its index in the displayed list, or by its name.\n\
Parameters: INDEX (must be a positive integer) or NAME\n\
Example: delete 1\n\
Example: delete John Doe";

pub fn run(book: &mut ContactBook, target: &Target) -> Result<CmdResult> {
    let contact = resolve_target(book, target)?;
    book.remove(&contact);

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Deleted contact:\n{}",
            format_contact(&contact)
        )))
        .with_listed_contacts(index_contacts(book))
        .with_affected_contacts(vec![contact]))
}
