//! # Command Parsing
//!
//! Turns a line of user input into a [`Command`]. The first word selects an
//! entry in the [`COMMANDS`] registry (case-insensitively); the rest of the
//! line is handed to that entry's parse function.
//!
//! Parsing is pure: it validates every field value it reads but never looks
//! at the contact book. Errors carry the usage text of the command that was
//! being parsed.

pub mod args;
mod edit;
mod filter;
mod sort;

use crate::commands::{self, Command};
use crate::error::{ContactError, Result};
use crate::index::parse_target;
use crate::model::Contact;
use args::{
    parse_company, parse_email, parse_name, parse_phone, parse_tags, tokenize, PREFIX_COMPANY,
    PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG,
};
use log::debug;

/// A command keyword, its usage text, and the parser for its arguments.
pub struct CommandEntry {
    pub word: &'static str,
    pub usage: &'static str,
    parse: fn(&str) -> Result<Command>,
}

pub static COMMANDS: &[CommandEntry] = &[
    CommandEntry {
        word: "add",
        usage: commands::add::USAGE,
        parse: parse_add,
    },
    CommandEntry {
        word: "delete",
        usage: commands::delete::USAGE,
        parse: parse_delete,
    },
    CommandEntry {
        word: "edit",
        usage: commands::edit::USAGE,
        parse: edit::parse,
    },
    CommandEntry {
        word: "list",
        usage: commands::list::USAGE,
        parse: parse_list,
    },
    CommandEntry {
        word: "find",
        usage: commands::find::USAGE,
        parse: parse_find,
    },
    CommandEntry {
        word: "filter",
        usage: commands::filter::USAGE,
        parse: filter::parse,
    },
    CommandEntry {
        word: "sort",
        usage: commands::sort::USAGE,
        parse: sort::parse,
    },
    CommandEntry {
        word: "clear",
        usage: commands::clear::USAGE,
        parse: parse_clear,
    },
    CommandEntry {
        word: "help",
        usage: commands::help::USAGE,
        parse: parse_help,
    },
    CommandEntry {
        word: "exit",
        usage: commands::exit::USAGE,
        parse: parse_exit,
    },
];

/// Looks up a command keyword, ignoring case.
pub fn lookup(word: &str) -> Option<&'static CommandEntry> {
    COMMANDS.iter().find(|entry| entry.word.eq_ignore_ascii_case(word))
}

pub fn parse_command(input: &str) -> Result<Command> {
    let input = input.trim();
    let (word, rest) = match input.find(char::is_whitespace) {
        Some(split) => input.split_at(split),
        None => (input, ""),
    };

    if word.is_empty() {
        return Err(ContactError::invalid_format(commands::help::USAGE));
    }

    let entry = lookup(word).ok_or_else(|| ContactError::UnknownCommand(word.to_string()))?;
    let command = (entry.parse)(rest)?;
    debug!("Parsed {:?} as {:?}", input, command);
    Ok(command)
}

fn parse_add(args: &str) -> Result<Command> {
    let map = tokenize(
        args,
        &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_COMPANY, PREFIX_TAG],
    );

    let required = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_COMPANY];
    if !map.preamble().is_empty() || required.iter().any(|p| !map.has(p)) {
        return Err(ContactError::invalid_format(commands::add::USAGE));
    }
    map.verify_no_duplicates(&required)?;

    let contact = Contact::new(
        parse_name(map.value(PREFIX_NAME).unwrap_or_default())?,
        parse_phone(map.value(PREFIX_PHONE).unwrap_or_default())?,
        parse_email(map.value(PREFIX_EMAIL).unwrap_or_default())?,
        parse_company(map.value(PREFIX_COMPANY).unwrap_or_default())?,
        parse_tags(map.all_values(PREFIX_TAG))?,
    );
    Ok(Command::Add(contact))
}

fn parse_list(_: &str) -> Result<Command> {
    Ok(Command::List)
}

fn parse_clear(_: &str) -> Result<Command> {
    Ok(Command::Clear)
}

fn parse_help(_: &str) -> Result<Command> {
    Ok(Command::Help)
}

fn parse_exit(_: &str) -> Result<Command> {
    Ok(Command::Exit)
}

fn parse_delete(args: &str) -> Result<Command> {
    Ok(Command::Delete(parse_target(args, commands::delete::USAGE)?))
}

fn parse_find(args: &str) -> Result<Command> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ContactError::invalid_format(commands::find::USAGE));
    }
    Ok(Command::Find(keywords))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldError;
    use crate::index::{DisplayIndex, Target};
    use crate::model::fixtures::ContactBuilder;

    #[test]
    fn test_keywords_ignore_case() {
        assert_eq!(parse_command("LIST").unwrap(), Command::List);
        assert_eq!(parse_command("  Exit  ").unwrap(), Command::Exit);
        assert_eq!(parse_command("clear").unwrap(), Command::Clear);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
    }

    #[test]
    fn test_trailing_words_ignored_for_bare_commands() {
        assert_eq!(parse_command("list 3").unwrap(), Command::List);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            parse_command("   "),
            Err(ContactError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_unknown_command() {
        match parse_command("remove 1") {
            Err(ContactError::UnknownCommand(word)) => assert_eq!(word, "remove"),
            other => panic!("expected UnknownCommand, got {:?}", other),
        }
    }

    #[test]
    fn test_add() {
        let command =
            parse_command("add n/Amy Bee p/85355255 e/amy@gmail.com c/Google t/Friends t/friends")
                .unwrap();
        let expected = ContactBuilder::new().tags(&["friends"]).build();
        assert_eq!(command, Command::Add(expected));
    }

    #[test]
    fn test_add_fields_in_any_order() {
        let command =
            parse_command("add c/Google  e/amy@gmail.com n/  Amy Bee  p/85355255").unwrap();
        assert_eq!(command, Command::Add(ContactBuilder::new().build()));
    }

    #[test]
    fn test_add_missing_field() {
        assert!(matches!(
            parse_command("add n/Amy Bee p/85355255 e/amy@gmail.com"),
            Err(ContactError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_add_with_preamble() {
        assert!(matches!(
            parse_command("add Amy n/Amy Bee p/85355255 e/amy@gmail.com c/Google"),
            Err(ContactError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_add_repeated_single_valued_field() {
        assert!(matches!(
            parse_command("add n/Amy n/Bee p/85355255 e/amy@gmail.com c/Google"),
            Err(ContactError::DuplicatePrefixes(_))
        ));
    }

    #[test]
    fn test_add_invalid_values() {
        assert!(matches!(
            parse_command("add n/Amy* p/85355255 e/amy@gmail.com c/Google"),
            Err(ContactError::InvalidField(FieldError::InvalidName(_)))
        ));
        assert!(matches!(
            parse_command("add n/Amy p/85 e/amy@gmail.com c/Google"),
            Err(ContactError::InvalidField(FieldError::InvalidPhone(_)))
        ));
        assert!(matches!(
            parse_command("add n/Amy p/85355255 e/amy c/Google"),
            Err(ContactError::InvalidField(FieldError::InvalidEmail(_)))
        ));
        assert!(matches!(
            parse_command("add n/Amy p/85355255 e/amy@gmail.com c/Google t/two words"),
            Err(ContactError::InvalidField(FieldError::InvalidTag { .. }))
        ));
    }

    #[test]
    fn test_delete() {
        assert_eq!(
            parse_command("delete 2").unwrap(),
            Command::Delete(Target::Index(DisplayIndex::from_one_based(2).unwrap()))
        );
        assert_eq!(
            parse_command("delete  John   Smith ").unwrap(),
            Command::Delete(Target::Name("John   Smith".into()))
        );
        assert!(matches!(
            parse_command("delete 0"),
            Err(ContactError::InvalidIndex)
        ));
        assert!(matches!(
            parse_command("delete"),
            Err(ContactError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_find() {
        assert_eq!(
            parse_command("find alice  bob").unwrap(),
            Command::Find(vec!["alice".into(), "bob".into()])
        );
        assert!(matches!(
            parse_command("find   "),
            Err(ContactError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_every_command_has_usage() {
        for entry in COMMANDS {
            assert!(entry.usage.starts_with(entry.word));
            assert!(lookup(&entry.word.to_uppercase()).is_some());
        }
    }
}
