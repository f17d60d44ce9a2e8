use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contactbook", bin_name = "contactbook", version)]
#[command(
    about = "Command-driven contact book",
    long_about = "Command-driven contact book.\n\n\
                  Give a command to run it once (contactbook add n/Jane Doe p/91234567 ...), \
                  or start without one to type commands line by line."
)]
pub struct Cli {
    /// Directory holding config.json and the contacts file
    #[arg(long, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,

    /// Command to run once, e.g. `delete 2` or `find alex`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Cli {
    /// The one-shot command line, if any words were given.
    pub fn command_line(&self) -> Option<String> {
        (!self.command.is_empty()).then(|| self.command.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_shot_command() {
        let cli = Cli::try_parse_from(["contactbook", "--data-dir", "/tmp/x", "delete", "2"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert_eq!(cli.command_line().as_deref(), Some("delete 2"));
    }

    #[test]
    fn prefixed_arguments_pass_through() {
        let cli = Cli::try_parse_from(["contactbook", "-v", "sort", "f/name", "o/desc"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.command_line().as_deref(), Some("sort f/name o/desc"));
    }

    #[test]
    fn no_command_means_interactive() {
        let cli = Cli::try_parse_from(["contactbook"]).unwrap();
        assert!(cli.command_line().is_none());
    }
}
