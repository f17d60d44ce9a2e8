use crate::collection::{ContactBook, ViewFilter};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_contacts;
use crate::tags::TagSet;

pub const USAGE: &str = "filter: Shows the contacts carrying any of the given tags (case-insensitive).\n\
Parameters: t/TAG [t/TAG]...\n\
Example: filter t/friends t/colleagues";

pub fn run(book: &mut ContactBook, tags: &TagSet) -> Result<CmdResult> {
    book.set_view_filter(ViewFilter::AnyTag(tags.clone()));
    let listed = index_contacts(book);
    let shown: String = tags.iter().map(|t| t.to_string()).collect();
    Ok(CmdResult::default()
        .with_message(CmdMessage::info(format!(
            "{} contacts tagged {} listed!",
            listed.len(),
            shown
        )))
        .with_listed_contacts(listed))
}
