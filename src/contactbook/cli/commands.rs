//! # CLI Layer
//!
//! The binary is one possible front end for the contact book. It is the only
//! place that reads stdin, writes stdout/stderr, or picks an exit code.
//!
//! - `run()`: builds the API from the data directory, then runs either the
//!   single command given on the command line or an interactive loop.
//! - `handle_line()`: hands one line to the API and renders the outcome.
//!
//! When a name matches several contacts the command fails, but the view has
//! been narrowed to those contacts, so it is printed along with the error.

use super::print::{print_contacts, print_error, print_hint, print_messages};
use super::setup::Cli;
use contactbook::api::ContactApi;
use contactbook::config::{resolve_data_dir, ContactsConfig};
use contactbook::error::{ContactError, Result};
use contactbook::store::fs::JsonFileStore;
use log::{debug, info};
use std::io::{self, BufRead, IsTerminal, Write};

const PROMPT: &str = "> ";
const HELP_HINT: &str = "Type `help` to see how each command is used.";

/// What happened to one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Done,
    Exit,
    Failed,
}

/// Runs the CLI. Returns `Ok(false)` when a one-shot command failed; the
/// failure has already been printed.
pub fn run(cli: Cli) -> Result<bool> {
    let mut api = init_api(&cli)?;

    match cli.command_line() {
        Some(line) => Ok(handle_line(&mut api, &line) != Outcome::Failed),
        None => run_interactive(&mut api).map(|_| true),
    }
}

fn init_api(cli: &Cli) -> Result<ContactApi<JsonFileStore>> {
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    let config = ContactsConfig::load_or_create(&data_dir)?;
    let contacts_path = config.contacts_path(&data_dir);
    info!("Using contacts file {}", contacts_path.display());

    let store = JsonFileStore::new(contacts_path);
    ContactApi::open(store, config.seed_sample_data)
}

fn run_interactive(api: &mut ContactApi<JsonFileStore>) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!("Welcome! Type `help` to see what you can do.");
        print_contacts(&api.view());
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{}", PROMPT);
            io::stdout().flush().map_err(ContactError::Io)?;
        }
        let line = match lines.next() {
            Some(line) => line.map_err(ContactError::Io)?,
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }
        if handle_line(api, &line) == Outcome::Exit {
            break;
        }
    }
    debug!("Leaving interactive loop");
    Ok(())
}

/// Runs one command and prints its outcome, errors included.
fn handle_line(api: &mut ContactApi<JsonFileStore>, line: &str) -> Outcome {
    match api.interpret(line) {
        Ok(result) => {
            if !result.listed_contacts.is_empty() {
                print_contacts(&result.listed_contacts);
            }
            print_messages(&result.messages);
            if result.exit {
                Outcome::Exit
            } else {
                Outcome::Done
            }
        }
        Err(e) => {
            if let ContactError::AmbiguousTarget { .. } = e {
                print_contacts(&api.view());
            }
            print_error(&e);
            if e.is_parse_error() {
                print_hint(HELP_HINT);
            }
            Outcome::Failed
        }
    }
}
