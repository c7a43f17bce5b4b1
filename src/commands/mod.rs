//! Command parsing and dispatch.
//!
//! A line is case-folded and split on whitespace. The leading word (or the
//! two leading words for `show all` and `good bye`) must match a [`Command`]
//! exactly; everything after it becomes positional arguments.

pub mod dispatcher;

pub use dispatcher::{Dispatcher, Outcome};

use crate::error::{CommandError, CommandResult};

/// Every command the console understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Remove,
    Phone,
    ShowAll,
    Birthday,
    Records,
    Help,
    Exit,
}

impl Command {
    /// Commands spelled with a single word.
    const SINGLE_WORD: &'static [(&'static str, Command)] = &[
        ("hello", Command::Hello),
        ("add", Command::Add),
        ("change", Command::Change),
        ("remove", Command::Remove),
        ("phone", Command::Phone),
        ("birthday", Command::Birthday),
        ("records", Command::Records),
        ("help", Command::Help),
        ("exit", Command::Exit),
        ("close", Command::Exit),
    ];

    /// Commands spelled with two words.
    const TWO_WORDS: &'static [(&'static str, &'static str, Command)] = &[
        ("show", "all", Command::ShowAll),
        ("good", "bye", Command::Exit),
    ];

    /// Canonical phrase, used in logs and error context.
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Remove => "remove",
            Self::Phone => "phone",
            Self::ShowAll => "show all",
            Self::Birthday => "birthday",
            Self::Records => "records",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }
}

/// A recognised command together with its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub args: Vec<String>,
}

impl Invocation {
    /// Check the argument count: at least `required`, at most
    /// `required + optional`.
    pub fn expect_args(&self, required: usize, optional: usize) -> CommandResult<()> {
        let got = self.args.len();
        if got < required {
            return Err(CommandError::MissingArgument {
                command: self.command.phrase(),
                expected: required,
                got,
            });
        }
        let max = required + optional;
        if got > max {
            return Err(CommandError::UnexpectedArguments {
                command: self.command.phrase(),
                extra: self.args[max..].to_vec(),
            });
        }
        Ok(())
    }
}

/// Parse one input line.
///
/// Returns `Ok(None)` for a blank line.
///
/// # Errors
///
/// Returns `CommandError::UnknownCommand` when the leading word is not a command.
pub fn parse_line(line: &str) -> CommandResult<Option<Invocation>> {
    let folded = line.to_lowercase();
    let tokens: Vec<&str> = folded.split_whitespace().collect();

    let Some(&first) = tokens.first() else {
        return Ok(None);
    };

    if let Some(&second) = tokens.get(1) {
        if let Some(&(_, _, command)) = Command::TWO_WORDS
            .iter()
            .find(|(a, b, _)| *a == first && *b == second)
        {
            return Ok(Some(invocation(command, &tokens[2..])));
        }
    }

    Command::SINGLE_WORD
        .iter()
        .find(|(word, _)| *word == first)
        .map(|&(_, command)| Some(invocation(command, &tokens[1..])))
        .ok_or_else(|| CommandError::UnknownCommand(first.to_string()))
}

fn invocation(command: Command, rest: &[&str]) -> Invocation {
    Invocation {
        command,
        args: rest.iter().map(|s| s.to_string()).collect(),
    }
}
