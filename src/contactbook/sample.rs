//! The contacts a fresh contact book starts with.

use crate::collection::ContactBook;
use crate::error::Result;
use crate::fields::{Company, Email, Name, Phone};
use crate::model::Contact;
use crate::tags::tag_set;

const SAMPLES: &[(&str, &str, &str, &str, &[&str])] = &[
    ("Alex Yeoh", "87438807", "alexyeoh@example.com", "Google", &["sales"]),
    (
        "Bernice Yu",
        "99272758",
        "berniceyu@example.com",
        "Amazon",
        &["colleagues", "friends", "procurement"],
    ),
    ("Charlotte Oliveiro", "93210283", "unknown@example.com", "N/A", &[]),
    ("David Li", "91031282", "lidavid@example.com", "NUS Computing", &["professor"]),
    (
        "Irfan Ibrahim",
        "92492021",
        "irfan@example.com",
        "AMD",
        &["classmates", "sales"],
    ),
    ("Roy Balakrishnan", "92624417", "royb@example.com", "TikTok", &["procurement"]),
];

pub fn sample_contacts() -> Result<Vec<Contact>> {
    SAMPLES
        .iter()
        .map(|(name, phone, email, company, tags)| -> Result<Contact> {
            Ok(Contact::new(
                Name::new(name)?,
                Phone::new(phone)?,
                Email::new(email)?,
                Company::new(company)?,
                tag_set(tags.iter().copied())?,
            ))
        })
        .collect()
}

pub fn sample_book() -> Result<ContactBook> {
    ContactBook::from_contacts(sample_contacts()?)
}
