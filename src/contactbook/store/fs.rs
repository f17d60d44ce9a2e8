use super::ContactStore;
use crate::collection::ContactBook;
use crate::error::{ContactError, Result};
use crate::model::Contact;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
struct ContactsFile {
    #[serde(default)]
    contacts: Vec<Contact>,
}

/// Stores every contact in one JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ContactError::Io)?;
            }
        }
        Ok(())
    }
}

impl ContactStore for JsonFileStore {
    fn load(&self) -> Result<Option<Vec<Contact>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(ContactError::Io)?;
        let file: ContactsFile =
            serde_json::from_str(&content).map_err(ContactError::Serialization)?;

        // Rejects files holding the same contact twice.
        let book = ContactBook::from_contacts(file.contacts).map_err(|_| {
            ContactError::Store(format!(
                "{} contains duplicate contacts",
                self.path.display()
            ))
        })?;
        info!(
            "Loaded {} contacts from {}",
            book.len(),
            self.path.display()
        );
        Ok(Some(book.contacts().to_vec()))
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        self.ensure_parent_dir()?;
        let file = ContactsFile {
            contacts: contacts.to_vec(),
        };
        let content = serde_json::to_string_pretty(&file).map_err(ContactError::Serialization)?;
        fs::write(&self.path, content).map_err(ContactError::Io)?;
        info!("Saved {} contacts to {}", contacts.len(), self.path.display());
        Ok(())
    }
}
