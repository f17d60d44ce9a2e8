use crate::collection::{ContactBook, ViewFilter};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_contacts;

pub const USAGE: &str = "find: Finds all contacts whose names contain any of the given keywords (case-insensitive) \
and lists them with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

pub fn run(book: &mut ContactBook, keywords: &[String]) -> Result<CmdResult> {
    book.set_view_filter(ViewFilter::NameKeywords(keywords.to_vec()));
    let listed = index_contacts(book);
    Ok(CmdResult::default()
        .with_message(CmdMessage::info(format!("{} contacts listed!", listed.len())))
        .with_listed_contacts(listed))
}
