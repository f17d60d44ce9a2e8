//! # API Facade
//!
//! [`ContactApi`] is the single entry point for user interfaces. It owns the
//! [`ContactBook`] and a [`ContactStore`], feeds input lines to the command
//! layer, and writes the book back to the store after every command that
//! changed it.
//!
//! Like the command layer it never prints. A failed save does not undo the
//! command that triggered it: the in-memory book keeps the change and the
//! failure is reported as an error message on the returned [`CmdResult`].
//!
//! `ContactApi<S: ContactStore>` is generic over the storage backend:
//! - Production: `ContactApi<JsonFileStore>`
//! - Testing: `ContactApi<InMemoryStore>`

use crate::collection::ContactBook;
use crate::commands;
use crate::error::Result;
use crate::index::{index_contacts, DisplayContact};
use crate::sample;
use crate::store::ContactStore;
use log::{info, warn};

pub use crate::commands::{CmdMessage, CmdResult, Command, MessageLevel};

pub struct ContactApi<S: ContactStore> {
    book: ContactBook,
    store: S,
}

impl<S: ContactStore> ContactApi<S> {
    /// Loads the book from `store`. When the store has never been saved to,
    /// the book starts with the sample contacts if `seed_samples` is set and
    /// empty otherwise.
    pub fn open(store: S, seed_samples: bool) -> Result<Self> {
        let book = match store.load()? {
            Some(contacts) => ContactBook::from_contacts(contacts)?,
            None if seed_samples => {
                info!("No saved contacts, starting with sample data");
                sample::sample_book()?
            }
            None => ContactBook::new(),
        };
        Ok(Self { book, store })
    }

    /// Runs one line of user input.
    pub fn interpret(&mut self, input: &str) -> Result<CmdResult> {
        let mut result = commands::interpret(&mut self.book, input)?;

        if result.book_changed {
            if let Err(e) = self.store.save(self.book.contacts()) {
                warn!("Failed to save contacts: {}", e);
                result.add_message(CmdMessage::error(format!(
                    "Could not save contacts: {}",
                    e
                )));
            }
        }
        Ok(result)
    }

    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    /// The current view with display indexes.
    pub fn view(&self) -> Vec<DisplayContact> {
        index_contacts(&self.book)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
