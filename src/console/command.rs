//! # Console Commands
//!
//! One command per line. The first word picks the command, either as its
//! letter or spelled out (case-insensitive).
//!
//! | Input                    | Command          |
//! |--------------------------|------------------|
//! | `w <int>` / `write <int>` | write a value   |
//! | `r` / `read`             | read oldest      |
//! | `c` / `clear` / `reset`  | reset            |
//! | `i` / `info`             | show state       |
//! | `h` / `?` / `help`       | help             |
//! | `q` / `quit`             | quit             |

use std::str::FromStr;

use crate::buffer::Value;
use crate::error::CommandError;

/// Help text printed by the `h` command
pub const HELP: &str = "\
Commands (letter or full word):
  w <n>  write n (overwrites the oldest value when full)
  r      read the oldest value
  c      reset the buffer (also: clear, reset)
  i      show buffer state
  h      show this help
  q      quit";

/// A parsed console command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Write(Value),
    Read,
    Reset,
    Info,
    Help,
    Quit,
}

impl Command {
    /// Parses a single command line.
    ///
    /// Leading and trailing whitespace is ignored. Only `w` takes an
    /// argument; anything after the other commands is rejected.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        if word.is_empty() {
            return Err(CommandError::Empty);
        }

        let command = match word.to_ascii_lowercase().as_str() {
            "w" | "write" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingValue);
                }
                return rest
                    .parse::<Value>()
                    .map(Command::Write)
                    .map_err(|_| CommandError::InvalidValue(rest.to_string()));
            }
            "r" | "read" => Command::Read,
            "c" | "clear" | "reset" => Command::Reset,
            "i" | "info" => Command::Info,
            "h" | "?" | "help" => Command::Help,
            "q" | "quit" => Command::Quit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };

        if !rest.is_empty() {
            return Err(CommandError::UnexpectedArgument {
                command: word.to_string(),
                argument: rest.to_string(),
            });
        }
        Ok(command)
    }

    /// True for commands that change the buffer.
    pub fn is_mutating(&self) -> bool {
        matches!(self, Command::Write(_) | Command::Read | Command::Reset)
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
