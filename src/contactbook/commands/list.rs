use crate::collection::{ContactBook, ViewFilter};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_contacts;

pub const USAGE: &str = "list: Shows every contact, keeping the current sort order.\n\
Example: list";

pub fn run(book: &mut ContactBook) -> Result<CmdResult> {
    book.set_view_filter(ViewFilter::All);
    Ok(CmdResult::default()
        .with_message(CmdMessage::info("Listed all contacts"))
        .with_listed_contacts(index_contacts(book)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{SortField, SortKey, SortOrder};
    use crate::model::fixtures::ContactBuilder;

    #[test]
    fn resets_filter_but_keeps_order() {
        let mut book = ContactBook::from_contacts(vec![
            ContactBuilder::new().name("Alpha").phone("111").build(),
            ContactBuilder::new().name("Bravo").phone("222").build(),
        ])
        .unwrap();
        let key = SortKey::new(SortField::Name, SortOrder::Descending);
        book.set_view_order(Some(key));
        book.set_view_filter(ViewFilter::name_equals("Alpha"));

        let result = run(&mut book).unwrap();

        assert_eq!(book.filter(), &ViewFilter::All);
        assert_eq!(book.order(), Some(key));
        let names: Vec<_> = result
            .listed_contacts
            .iter()
            .map(|dc| dc.contact.name().as_str().to_string())
            .collect();
        assert_eq!(names, vec!["Bravo", "Alpha"]);
    }
}
