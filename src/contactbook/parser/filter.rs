use super::args::{parse_tags, tokenize, PREFIX_TAG};
use crate::commands::filter::USAGE;
use crate::commands::Command;
use crate::error::{ContactError, Result};

/// `filter t/TAG [t/TAG]...`
///
/// Every problem, including an invalid tag, is reported as a format error
/// with the filter usage.
pub(super) fn parse(args: &str) -> Result<Command> {
    let map = tokenize(args, &[PREFIX_TAG]);
    let values = map.all_values(PREFIX_TAG);
    if !map.preamble().is_empty() || values.is_empty() {
        return Err(ContactError::invalid_format(USAGE));
    }
    let tags = parse_tags(values).map_err(|_| ContactError::invalid_format(USAGE))?;
    Ok(Command::Filter(tags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::tag_set;

    #[test]
    fn normalizes_and_deduplicates() {
        assert_eq!(
            parse(" t/FRIENDS t/friends t/  fRiEnDs").unwrap(),
            Command::Filter(tag_set(["friends"]).unwrap())
        );
    }

    #[test]
    fn several_tags() {
        assert_eq!(
            parse(" t/friends t/colleagues").unwrap(),
            Command::Filter(tag_set(["colleagues", "friends"]).unwrap())
        );
    }

    #[test]
    fn rejects_bad_input() {
        for args in ["", " friends", " t/", " t/friends t/", " t/best friends", " t/friends f/colleague", " t/ärzte"] {
            assert!(
                matches!(parse(args), Err(ContactError::InvalidFormat { .. })),
                "accepted {:?}",
                args
            );
        }
    }
}
