//! # Storage Layer
//!
//! The [`ContactStore`] trait is the only way contacts reach or leave the
//! disk. The core never calls it: the [`api`](crate::api) facade loads the
//! book once at startup and saves it after each command that changed it.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: a single pretty-printed JSON document.
//! - [`memory::InMemoryStore`]: no persistence, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── config.json     # ContactsConfig
//! └── contacts.json   # {"contacts": [{name, phone, email, company, tags}, ...]}
//! ```
//!
//! Field values are validated again when a file is read, so a hand-edited
//! file with a bad phone number fails to load instead of sneaking an invalid
//! contact into the book.

use crate::error::Result;
use crate::model::Contact;

pub mod fs;
pub mod memory;

pub trait ContactStore {
    /// Loads every stored contact. `None` means nothing has been saved yet,
    /// which is different from a saved empty book.
    fn load(&self) -> Result<Option<Vec<Contact>>>;

    /// Replaces the stored contacts with `contacts`.
    fn save(&mut self, contacts: &[Contact]) -> Result<()>;
}
