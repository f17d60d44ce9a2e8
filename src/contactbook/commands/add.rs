use crate::collection::{ContactBook, ViewFilter};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_contacts;
use crate::model::{format_contact, Contact};

pub const USAGE: &str = "add: Adds a contact to the contact book.\n\
Parameters: n/NAME p/PHONE e/EMAIL c/COMPANY [t/TAG]...\n\
Example: add n/John Doe p/98765432 e/johnd@example.com c/Google t/friends t/owesMoney";

/// Adds `contact` and clears any filter so the new contact is visible.
pub fn run(book: &mut ContactBook, contact: Contact) -> Result<CmdResult> {
    book.add(contact.clone())?;
    book.set_view_filter(ViewFilter::All);

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "New contact added: {}",
            format_contact(&contact)
        )))
        .with_listed_contacts(index_contacts(book))
        .with_affected_contacts(vec![contact]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactError;
    use crate::model::fixtures::ContactBuilder;

    #[test]
    fn adds_contact_and_resets_filter() {
        let mut book = ContactBook::from_contacts(vec![ContactBuilder::new()
            .name("Alice")
            .phone("111")
            .build()])
        .unwrap();
        book.set_view_filter(ViewFilter::name_equals("Alice"));

        let bob = ContactBuilder::new().name("Bob").phone("222").build();
        let result = run(&mut book, bob.clone()).unwrap();

        assert_eq!(book.len(), 2);
        assert_eq!(book.filter(), &ViewFilter::All);
        assert_eq!(book.view_len(), 2);
        assert_eq!(result.affected_contacts, vec![bob]);
        assert!(result.feedback().starts_with("New contact added: Name: Bob;"));
    }

    #[test]
    fn rejects_same_contact() {
        let mut book = ContactBook::new();
        run(&mut book, ContactBuilder::new().build()).unwrap();

        let twin = ContactBuilder::new()
            .name("amy   bee")
            .email("other@example.com")
            .build();
        assert!(matches!(
            run(&mut book, twin),
            Err(ContactError::DuplicateContact)
        ));
        assert_eq!(book.len(), 1);
    }
}
