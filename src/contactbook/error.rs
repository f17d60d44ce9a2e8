use crate::fields::FieldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Invalid command format!\n{usage}")]
    InvalidFormat { usage: String },

    #[error("Missing argument!\n{usage}")]
    MissingArgument { usage: String },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Multiple values specified for the following single-valued field(s): {}", .0.join(" "))]
    DuplicatePrefixes(Vec<String>),

    #[error("{0}")]
    InvalidField(#[from] FieldError),

    #[error("The contact index provided is invalid")]
    InvalidIndex,

    #[error("No contact named \"{0}\" was found")]
    NameNotFound(String),

    #[error(
        "Multiple contacts named \"{name}\" found ({count} contacts listed). \
         Re-issue the command with the index of the intended contact."
    )]
    AmbiguousTarget { name: String, count: usize },

    #[error("This contact already exists in the contact book")]
    DuplicateContact,

    #[error("Editing this contact would duplicate another contact in the contact book")]
    EditWouldCreateDuplicate,

    #[error("At least one field to edit must be provided.")]
    NoFieldsEdited,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl ContactError {
    /// True for errors raised while turning input into a command, before any
    /// contact was looked at.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            ContactError::InvalidFormat { .. }
                | ContactError::MissingArgument { .. }
                | ContactError::UnknownCommand(_)
                | ContactError::DuplicatePrefixes(_)
                | ContactError::InvalidField(_)
                | ContactError::NoFieldsEdited
        )
    }

    pub fn invalid_format(usage: &str) -> Self {
        ContactError::InvalidFormat {
            usage: usage.to_string(),
        }
    }

    pub fn missing_argument(usage: &str) -> Self {
        ContactError::MissingArgument {
            usage: usage.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactError>;
