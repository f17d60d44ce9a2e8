use super::args::{tokenize, ArgumentMap, PREFIX_FIELD, PREFIX_ORDER};
use crate::collection::{SortField, SortKey, SortOrder};
use crate::commands::sort::USAGE;
use crate::commands::Command;
use crate::error::{ContactError, Result};

/// `sort f/FIELD o/ORDER`
///
/// Each prefix must appear exactly once with its value attached (`f/name`,
/// not `f/ name`).
pub(super) fn parse(args: &str) -> Result<Command> {
    let invalid = || ContactError::invalid_format(USAGE);
    let map = tokenize(args, &[PREFIX_FIELD, PREFIX_ORDER]);
    if !map.preamble().is_empty() {
        return Err(invalid());
    }

    let field = attached(&map, PREFIX_FIELD)
        .and_then(SortField::parse)
        .ok_or_else(invalid)?;
    let order = attached(&map, PREFIX_ORDER)
        .and_then(SortOrder::parse)
        .ok_or_else(invalid)?;

    Ok(Command::Sort(SortKey::new(field, order)))
}

/// The single value given for `prefix`, if it directly follows the prefix.
fn attached<'a>(map: &'a ArgumentMap, prefix: &str) -> Option<&'a str> {
    match map.raw_values(prefix) {
        [raw] if !raw.starts_with(char::is_whitespace) => Some(raw.trim()),
        _ => None,
    }
}
