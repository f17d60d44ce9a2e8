use super::args::{
    parse_company, parse_email, parse_name, parse_phone, parse_tags, tokenize, PREFIX_COMPANY,
    PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG,
};
use crate::commands::edit::USAGE;
use crate::commands::{Command, EditDescriptor};
use crate::error::{ContactError, Result};
use crate::index::parse_target;

/// `edit TARGET [n/NAME] [p/PHONE] [e/EMAIL] [c/COMPANY] [t/TAG]...`
///
/// A lone `t/` clears the tags. Naming no field at all is rejected here,
/// before the target is ever looked up.
pub(super) fn parse(args: &str) -> Result<Command> {
    let map = tokenize(
        args,
        &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_COMPANY, PREFIX_TAG],
    );
    let single = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_COMPANY];

    if map.preamble().is_empty() && !single.iter().chain([&PREFIX_TAG]).any(|p| map.has(p)) {
        return Err(ContactError::invalid_format(USAGE));
    }
    let target = parse_target(map.preamble(), USAGE)?;
    map.verify_no_duplicates(&single)?;

    let mut descriptor = EditDescriptor::default();
    if let Some(value) = map.value(PREFIX_NAME) {
        descriptor.name = Some(parse_name(value)?);
    }
    if let Some(value) = map.value(PREFIX_PHONE) {
        descriptor.phone = Some(parse_phone(value)?);
    }
    if let Some(value) = map.value(PREFIX_EMAIL) {
        descriptor.email = Some(parse_email(value)?);
    }
    if let Some(value) = map.value(PREFIX_COMPANY) {
        descriptor.company = Some(parse_company(value)?);
    }
    if map.has(PREFIX_TAG) {
        let values = map.all_values(PREFIX_TAG);
        descriptor.tags = Some(if values == [""] {
            Default::default()
        } else {
            parse_tags(values)?
        });
    }

    if !descriptor.is_any_field_edited() {
        return Err(ContactError::NoFieldsEdited);
    }
    Ok(Command::Edit { target, descriptor })
}
