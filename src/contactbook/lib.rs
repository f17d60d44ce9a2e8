//! # Contactbook Architecture
//!
//! Contactbook is a **command-driven contact library**. Users type one line per
//! command (`add n/Jane Doe p/91234567 ...`, `delete 2`, `sort f/name o/asc`) and
//! the library turns that line into a validated command, runs it against an
//! in-memory contact collection and hands back a structured result.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads lines, renders results, handles terminal I/O       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the ContactBook and the store                       │
//! │  - Persists after successful mutating commands              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (parser/, commands/, collection.rs)                   │
//! │  - parser: raw line → Command                               │
//! │  - commands: Command::execute(&mut ContactBook)             │
//! │  - No I/O whatsoever                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ContactStore trait                                       │
//! │  - JsonFileStore (production), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The View
//!
//! The [`collection::ContactBook`] keeps every contact in insertion order and
//! derives a *view* from it: the contacts that pass the current filter, in the
//! current sort order. Indexes typed by the user (`delete 2`) always address the
//! view, never the underlying sequence. See [`index`] for the one-based display
//! indexes and [`commands::helpers`] for how index-or-name targets are resolved.
//!
//! ## Module Overview
//!
//! - [`api`]: Facade pairing the contact book with a store
//! - [`commands`]: One module per command verb, plus `interpret`
//! - [`parser`]: Tokenizer, per-command parsers and the keyword registry
//! - [`collection`]: The contact collection and its filtered/sorted view
//! - [`model`]: The `Contact` record and its identity rules
//! - [`fields`]: Validated field values (name, phone, email, company)
//! - [`tags`]: The `Tag` value and tag-name validation
//! - [`index`]: Display indexes and contact targets
//! - [`store`]: Persistence abstraction and implementations
//! - [`config`]: Configuration stored next to the data file
//! - [`sample`]: Sample contacts for first start
//! - [`error`]: Error types

pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod index;
pub mod model;
pub mod parser;
pub mod sample;
pub mod store;
pub mod tags;
