use crate::error::{ContactError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CONTACTS_FILE: &str = "contacts.json";

/// Overrides the platform data directory.
pub const HOME_ENV_VAR: &str = "CONTACTBOOK_HOME";

/// Configuration for the contact book, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactsConfig {
    /// Contacts file name, relative to the data directory
    #[serde(default = "default_contacts_file")]
    pub contacts_file: String,

    /// Start with the sample contacts when no contacts file exists yet
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,
}

fn default_contacts_file() -> String {
    DEFAULT_CONTACTS_FILE.to_string()
}

fn default_seed_sample_data() -> bool {
    true
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            contacts_file: default_contacts_file(),
            seed_sample_data: default_seed_sample_data(),
        }
    }
}

impl ContactsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let config_path = data_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ContactError::Io)?;
        let config: ContactsConfig =
            serde_json::from_str(&content).map_err(ContactError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, data_dir: P) -> Result<()> {
        let data_dir = data_dir.as_ref();

        if !data_dir.exists() {
            fs::create_dir_all(data_dir).map_err(ContactError::Io)?;
        }

        let config_path = data_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ContactError::Serialization)?;
        fs::write(config_path, content).map_err(ContactError::Io)?;
        Ok(())
    }

    /// Like [`ContactsConfig::load`], but writes the defaults out on first use
    /// so there is a file to edit.
    pub fn load_or_create<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        if data_dir.join(CONFIG_FILENAME).exists() {
            return Self::load(data_dir);
        }
        let config = Self::default();
        config.save(data_dir)?;
        Ok(config)
    }

    pub fn contacts_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(&self.contacts_file)
    }
}

/// Picks the data directory: an explicit path first, then
/// `$CONTACTBOOK_HOME`, then the platform data directory.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = env::var_os(HOME_ENV_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "contactbook", "contactbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ContactError::Store("Could not determine data directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ContactsConfig::default();
        assert_eq!(config.contacts_file, "contacts.json");
        assert!(config.seed_sample_data);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = ContactsConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, ContactsConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let config = ContactsConfig {
            contacts_file: "people.json".to_string(),
            seed_sample_data: false,
        };
        config.save(dir.path().join("nested")).unwrap();

        let loaded = ContactsConfig::load(dir.path().join("nested")).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.contacts_path(dir.path()),
            dir.path().join("people.json")
        );
    }

    #[test]
    fn test_load_or_create_writes_defaults_once() {
        let dir = tempdir().unwrap();
        let data_dir = dir.path().join("fresh");

        let created = ContactsConfig::load_or_create(&data_dir).unwrap();
        assert_eq!(created, ContactsConfig::default());
        assert!(data_dir.join(CONFIG_FILENAME).exists());

        fs::write(
            data_dir.join(CONFIG_FILENAME),
            r#"{"seed_sample_data": false}"#,
        )
        .unwrap();
        let loaded = ContactsConfig::load_or_create(&data_dir).unwrap();
        assert!(!loaded.seed_sample_data);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: ContactsConfig = serde_json::from_str(r#"{"seed_sample_data": false}"#).unwrap();
        assert_eq!(parsed.contacts_file, "contacts.json");
        assert!(!parsed.seed_sample_data);
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let dir = PathBuf::from("/tmp/explicit-contacts");
        assert_eq!(resolve_data_dir(Some(dir.clone())).unwrap(), dir);
    }
}
