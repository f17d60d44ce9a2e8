//! Prefix tokenizer for command arguments.
//!
//! Arguments are written as `prefix/value` pairs, e.g.
//! `n/Alex Yeoh p/87438807 t/friends t/sales`. A prefix only counts when it
//! starts the argument string or follows whitespace, so `e/alex@ex.com/x`
//! keeps its slash. Text before the first prefix is the *preamble* (the
//! target of `edit`, for instance). Each command tokenizes with only the
//! prefixes it understands; any other `x/` text stays inside a value.

use crate::error::{ContactError, Result};
use crate::fields::{Company, Email, Name, Phone};
use crate::tags::{Tag, TagSet};
use std::collections::HashMap;

pub const PREFIX_NAME: &str = "n/";
pub const PREFIX_PHONE: &str = "p/";
pub const PREFIX_EMAIL: &str = "e/";
pub const PREFIX_COMPANY: &str = "c/";
pub const PREFIX_TAG: &str = "t/";
pub const PREFIX_FIELD: &str = "f/";
pub const PREFIX_ORDER: &str = "o/";

/// The tokenized form of an argument string.
#[derive(Debug, Default)]
pub struct ArgumentMap {
    preamble: String,
    values: HashMap<&'static str, Vec<String>>,
}

impl ArgumentMap {
    /// Text before the first prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn has(&self, prefix: &str) -> bool {
        self.values.contains_key(prefix)
    }

    /// The last value given for `prefix`, trimmed.
    pub fn value(&self, prefix: &str) -> Option<&str> {
        self.values
            .get(prefix)
            .and_then(|vals| vals.last())
            .map(|v| v.trim())
    }

    /// Every value given for `prefix`, trimmed, in input order.
    pub fn all_values(&self, prefix: &str) -> Vec<&str> {
        self.values
            .get(prefix)
            .map(|vals| vals.iter().map(|v| v.trim()).collect())
            .unwrap_or_default()
    }

    /// Every value given for `prefix` exactly as typed.
    pub fn raw_values(&self, prefix: &str) -> &[String] {
        self.values.get(prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Fails if any of `prefixes` was given more than once.
    pub fn verify_no_duplicates(&self, prefixes: &[&'static str]) -> Result<()> {
        let duplicated: Vec<String> = prefixes
            .iter()
            .filter(|p| self.raw_values(p).len() > 1)
            .map(|p| p.to_string())
            .collect();
        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ContactError::DuplicatePrefixes(duplicated))
        }
    }
}

/// Splits `args` on the given prefixes.
pub fn tokenize(args: &str, prefixes: &[&'static str]) -> ArgumentMap {
    let mut positions: Vec<(usize, &'static str)> = Vec::new();
    let mut prev: Option<char> = None;
    for (i, ch) in args.char_indices() {
        if prev.map_or(true, char::is_whitespace) {
            if let Some(prefix) = prefixes.iter().find(|p| args[i..].starts_with(**p)) {
                positions.push((i, *prefix));
            }
        }
        prev = Some(ch);
    }

    let preamble_end = positions.first().map(|(i, _)| *i).unwrap_or(args.len());
    let mut map = ArgumentMap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (n, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.len();
        let value_end = positions
            .get(n + 1)
            .map(|(next, _)| *next)
            .unwrap_or(args.len());
        map.values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].to_string());
    }

    map
}

pub fn parse_name(value: &str) -> Result<Name> {
    Ok(Name::new(value)?)
}

pub fn parse_phone(value: &str) -> Result<Phone> {
    Ok(Phone::new(value)?)
}

pub fn parse_email(value: &str) -> Result<Email> {
    Ok(Email::new(value)?)
}

pub fn parse_company(value: &str) -> Result<Company> {
    Ok(Company::new(value)?)
}

/// Parses tag values into a set of trimmed, lowercased tags.
pub fn parse_tags<'a, I: IntoIterator<Item = &'a str>>(values: I) -> Result<TagSet> {
    let mut tags = TagSet::new();
    for value in values {
        tags.insert(Tag::normalized(value)?);
    }
    Ok(tags)
}
