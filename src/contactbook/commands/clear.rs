use crate::collection::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub const USAGE: &str = "clear: Removes every contact from the contact book.\n\
Example: clear";

pub fn run(book: &mut ContactBook) -> Result<CmdResult> {
    let removed = book.contacts().to_vec();
    book.clear();
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Contact book has been cleared!"))
        .with_affected_contacts(removed))
}
