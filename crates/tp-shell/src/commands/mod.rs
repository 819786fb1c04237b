//! Text commands typed into the shell.

mod parse;

pub use parse::{parse_command, resolve, Command, CommandError, Resolved, HELP};
