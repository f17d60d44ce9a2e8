use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub const USAGE: &str = "exit: Exits the program.\n\
Example: exit";

pub fn run() -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_message(CmdMessage::info("Exiting contact book as requested ..."))
        .with_exit())
}
