use super::ContactStore;
use crate::error::{ContactError, Result};
use crate::model::Contact;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contacts: Option<Vec<Contact>>,
    fail_saves: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn stored(&self) -> Option<&[Contact]> {
        self.contacts.as_deref()
    }
}

impl ContactStore for InMemoryStore {
    fn load(&self) -> Result<Option<Vec<Contact>>> {
        Ok(self.contacts.clone())
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        if self.fail_saves {
            return Err(ContactError::Store("store is read-only".to_string()));
        }
        self.contacts = Some(contacts.to_vec());
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::fixtures::ContactBuilder;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        fn push(&mut self, contact: Contact) {
            self.store.contacts.get_or_insert_with(Vec::new).push(contact);
        }

        /// Stores no contacts, but marks the store as already saved once.
        pub fn empty(mut self) -> Self {
            self.store.contacts.get_or_insert_with(Vec::new);
            self
        }

        pub fn with_contact(mut self, name: &str, phone: &str) -> Self {
            self.push(ContactBuilder::new().name(name).phone(phone).build());
            self
        }

        pub fn with_tagged_contact(mut self, name: &str, phone: &str, tags: &[&str]) -> Self {
            self.push(
                ContactBuilder::new()
                    .name(name)
                    .phone(phone)
                    .tags(tags)
                    .build(),
            );
            self
        }

        /// Every save fails with a store error.
        pub fn failing_saves(mut self) -> Self {
            self.store.fail_saves = true;
            self
        }
    }
}
