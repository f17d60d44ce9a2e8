use colored::Colorize;
use contactbook::api::{CmdMessage, MessageLevel};
use contactbook::index::DisplayContact;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const INDEX_WIDTH: usize = 5;
const NAME_WIDTH: usize = 24;
const PHONE_WIDTH: usize = 12;
const EMAIL_WIDTH: usize = 28;
const COMPANY_WIDTH: usize = 16;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_error(err: &dyn std::fmt::Display) {
    eprintln!("{}", format!("Error: {}", err).red());
}

pub(super) fn print_hint(hint: &str) {
    eprintln!("{}", hint.dimmed());
}

pub(super) fn print_contacts(contacts: &[DisplayContact]) {
    if contacts.is_empty() {
        println!("No contacts found.");
        return;
    }
    for dc in contacts {
        println!("{}", format_row(dc));
    }
}

fn format_row(dc: &DisplayContact) -> String {
    let contact = &dc.contact;
    let tags: String = contact.tags().iter().map(|t| t.to_string()).collect();
    format!(
        "{}{}{}{}{}{}",
        pad_to_width(&format!("{}.", dc.index), INDEX_WIDTH).yellow(),
        pad_to_width(contact.name().as_str(), NAME_WIDTH).bold(),
        pad_to_width(contact.phone().as_str(), PHONE_WIDTH),
        pad_to_width(contact.email().as_str(), EMAIL_WIDTH),
        pad_to_width(contact.company().as_str(), COMPANY_WIDTH),
        tags.cyan()
    )
}

/// Truncates `s` to fit a column of `width` cells and pads it with spaces,
/// leaving one cell of separation.
fn pad_to_width(s: &str, width: usize) -> String {
    let fitted = truncate_to_width(s, width.saturating_sub(1));
    let padding = width.saturating_sub(fitted.width());
    format!("{}{}", fitted, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
