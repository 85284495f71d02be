//! Line protocol of the host's control socket.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const SOCKET_PATH: &str = "/tmp/rondo.sock";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    Show,
    Hide,
    Select(usize),
    Next,
    Prev,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}'")]
    Unknown(String),
    #[error("'select' expects a button index, got '{0}'")]
    BadIndex(String),
}

impl FromStr for ControlCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(ParseCommandError::Empty)?;

        match verb.to_ascii_lowercase().as_str() {
            "show" => Ok(Self::Show),
            "hide" => Ok(Self::Hide),
            "next" => Ok(Self::Next),
            "prev" => Ok(Self::Prev),
            "select" => {
                let arg = words.next().unwrap_or_default();
                arg.parse()
                    .map(Self::Select)
                    .map_err(|_| ParseCommandError::BadIndex(arg.to_string()))
            }
            _ => Err(ParseCommandError::Unknown(verb.to_string())),
        }
    }
}

impl fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Show => write!(f, "show"),
            Self::Hide => write!(f, "hide"),
            Self::Select(index) => write!(f, "select {index}"),
            Self::Next => write!(f, "next"),
            Self::Prev => write!(f, "prev"),
        }
    }
}
