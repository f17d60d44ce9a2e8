//! # Commands
//!
//! Every user verb is a variant of [`Command`], built by the
//! [`parser`](crate::parser) and executed against a [`ContactBook`]. Each
//! verb lives in its own module exposing a `run` function and the `USAGE`
//! text shown when its arguments cannot be read.
//!
//! Commands never print and never touch storage. They report back through
//! [`CmdResult`]: leveled messages, the contacts to display, and whether the
//! application should exit. Persisting the book after a mutation is the
//! [`api`](crate::api) layer's job.

use crate::collection::{ContactBook, SortKey};
use crate::error::Result;
use crate::index::{DisplayContact, Target};
use crate::model::Contact;
use crate::parser;
use crate::tags::TagSet;
use log::debug;

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod exit;
pub mod filter;
pub mod find;
pub mod help;
pub mod helpers;
pub mod list;
pub mod sort;

pub use edit::EditDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_contacts: Vec<Contact>,
    pub listed_contacts: Vec<DisplayContact>,
    pub messages: Vec<CmdMessage>,
    pub exit: bool,
    /// Set by [`interpret`] when the command can have changed the contacts.
    pub book_changed: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.affected_contacts = contacts;
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<DisplayContact>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }

    /// All message contents joined by newlines.
    pub fn feedback(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A parsed, validated unit of user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Contact),
    Delete(Target),
    Edit {
        target: Target,
        descriptor: EditDescriptor,
    },
    List,
    Find(Vec<String>),
    Filter(TagSet),
    Sort(SortKey),
    Clear,
    Help,
    Exit,
}

impl Command {
    pub fn execute(&self, book: &mut ContactBook) -> Result<CmdResult> {
        match self {
            Command::Add(contact) => add::run(book, contact.clone()),
            Command::Delete(target) => delete::run(book, target),
            Command::Edit { target, descriptor } => edit::run(book, target, descriptor),
            Command::List => list::run(book),
            Command::Find(keywords) => find::run(book, keywords),
            Command::Filter(tags) => filter::run(book, tags),
            Command::Sort(key) => sort::run(book, *key),
            Command::Clear => clear::run(book),
            Command::Help => help::run(),
            Command::Exit => exit::run(),
        }
    }

    /// True for commands that can change the authoritative contact list.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Add(_) | Command::Delete(_) | Command::Edit { .. } | Command::Clear
        )
    }
}

/// Parses `input` and executes the resulting command against `book`.
pub fn interpret(book: &mut ContactBook, input: &str) -> Result<CmdResult> {
    let command = parser::parse_command(input)?;
    debug!("Executing {:?}", command);
    let mut result = command.execute(book)?;
    result.book_changed = command.is_mutating();
    Ok(result)
}
