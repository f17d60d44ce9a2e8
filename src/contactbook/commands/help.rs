use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::parser::COMMANDS;

pub const USAGE: &str = "help: Shows how to use every command.\n\
Example: help";

pub fn run() -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for entry in COMMANDS {
        result.add_message(CmdMessage::info(entry.usage));
    }
    Ok(result)
}
