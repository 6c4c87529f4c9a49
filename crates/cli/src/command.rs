//! # Shell commands
//!
//! Each input line is decoded once into a [`Command`]. The verb is
//! case-insensitive and tokens are separated by whitespace. Arity counts the
//! verb itself, so `switch-add 410` has arity 2.
//!
//! | Command | Arity |
//! |---|---|
//! | `switch-add <area>` | 2 |
//! | `switch-connect <area1> <area2>` | 3 |
//! | `phone-add <area>-<number>` | 2 |
//! | `network-save <path>` | 2 |
//! | `network-load <path>` | 2 |
//! | `start-call <area>-<num> <area>-<num>` | 3 |
//! | `end-call <area>-<num>` | 2 |
//! | `display` | any |
//! | `quit` | 1 |

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;
use trunkline_core::{parse_area_code, AreaCode, PhoneAddress};

/// A decoded shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SwitchAdd(AreaCode),
    SwitchConnect(AreaCode, AreaCode),
    PhoneAdd(PhoneAddress),
    NetworkSave(PathBuf),
    NetworkLoad(PathBuf),
    StartCall(PhoneAddress, PhoneAddress),
    EndCall(PhoneAddress),
    Display,
    Quit,
}

/// Why a line could not be decoded
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    UnknownVerb(String),

    #[error("{verb} takes {expected} tokens, got {found}")]
    Arity {
        verb: &'static str,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    InvalidArgument(#[from] trunkline_core::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    SwitchAdd,
    SwitchConnect,
    PhoneAdd,
    NetworkSave,
    NetworkLoad,
    StartCall,
    EndCall,
    Display,
    Quit,
}

impl Verb {
    const TABLE: [(&'static str, Verb); 9] = [
        ("switch-add", Verb::SwitchAdd),
        ("switch-connect", Verb::SwitchConnect),
        ("phone-add", Verb::PhoneAdd),
        ("network-save", Verb::NetworkSave),
        ("network-load", Verb::NetworkLoad),
        ("start-call", Verb::StartCall),
        ("end-call", Verb::EndCall),
        ("display", Verb::Display),
        ("quit", Verb::Quit),
    ];

    fn lookup(token: &str) -> Option<(&'static str, Verb)> {
        Self::TABLE
            .iter()
            .copied()
            .find(|(name, _)| name.eq_ignore_ascii_case(token))
    }

    /// Required token count including the verb. `None` accepts any.
    fn arity(self) -> Option<usize> {
        match self {
            Verb::SwitchAdd
            | Verb::PhoneAdd
            | Verb::NetworkSave
            | Verb::NetworkLoad
            | Verb::EndCall => Some(2),
            Verb::SwitchConnect | Verb::StartCall => Some(3),
            Verb::Quit => Some(1),
            Verb::Display => None,
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let first = *tokens.first().ok_or(CommandError::Empty)?;
        let (name, verb) =
            Verb::lookup(first).ok_or_else(|| CommandError::UnknownVerb(first.to_string()))?;

        if let Some(expected) = verb.arity() {
            if tokens.len() != expected {
                return Err(CommandError::Arity {
                    verb: name,
                    expected,
                    found: tokens.len(),
                });
            }
        }

        let command = match verb {
            Verb::SwitchAdd => Command::SwitchAdd(parse_area_code(tokens[1])?),
            Verb::SwitchConnect => {
                Command::SwitchConnect(parse_area_code(tokens[1])?, parse_area_code(tokens[2])?)
            }
            Verb::PhoneAdd => Command::PhoneAdd(tokens[1].parse()?),
            Verb::NetworkSave => Command::NetworkSave(PathBuf::from(tokens[1])),
            Verb::NetworkLoad => Command::NetworkLoad(PathBuf::from(tokens[1])),
            Verb::StartCall => Command::StartCall(tokens[1].parse()?, tokens[2].parse()?),
            Verb::EndCall => Command::EndCall(tokens[1].parse()?),
            Verb::Display => Command::Display,
            Verb::Quit => Command::Quit,
        };
        Ok(command)
    }
}
