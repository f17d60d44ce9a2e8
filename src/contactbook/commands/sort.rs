use crate::collection::{ContactBook, SortKey};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_contacts;

pub const USAGE: &str = "sort: Sorts the displayed contacts by name or by tag.\n\
Parameters: f/FIELD o/ORDER\n\
FIELD is one of: name, tag\n\
ORDER is one of: asc, ascending, desc, descending\n\
Example: sort f/name o/asc";

pub fn run(book: &mut ContactBook, key: SortKey) -> Result<CmdResult> {
    book.set_view_order(Some(key));
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Sorted contacts by {} in {} order.",
            key.field, key.order
        )))
        .with_listed_contacts(index_contacts(book)))
}
