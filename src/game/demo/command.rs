//! Terminal commands for the local device.

use std::str::FromStr;

use thiserror::Error;

use crate::game::types::NavEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Nav(NavEvent),
    Show,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let word = input.trim();
        if word.is_empty() {
            return Err(CommandError::Empty);
        }
        let command = match word.to_ascii_lowercase().as_str() {
            "n" | "north" | "\x1b[a" => Command::Nav(NavEvent::North),
            "s" | "south" | "\x1b[b" => Command::Nav(NavEvent::South),
            "e" | "east" | "\x1b[c" => Command::Nav(NavEvent::East),
            "w" | "west" | "\x1b[d" => Command::Nav(NavEvent::West),
            "p" | "push" | "select" => Command::Nav(NavEvent::Select),
            "show" | "m" => Command::Show,
            "status" | "st" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };
        Ok(command)
    }
}

pub const HELP: &str = "commands: n/s/e/w move, p push, show, status, help, quit";
