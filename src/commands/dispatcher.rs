//! Command handlers and the error boundary around them.

use super::{parse_line, Command, Invocation};
use crate::domain::{Birthday, Name, PhoneNumber};
use crate::error::{CommandError, CommandResult, USAGE};
use crate::models::{PhoneEdit, Record};
use crate::repositories::{AddressBook, RecordRepository};
use chrono::{Local, NaiveDate};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, info, warn};

const GREETING: &str = "How can I help you?";
const FAREWELL: &str = "Good bye!";
const END_OF_RECORDS: &str = "That's all";

const COMMAND_LIST: &str =
    "Commands: hello, add, change, remove, phone, show all, birthday, records, help, exit | close | good bye";

/// What the console should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to print; ask for the next line.
    Reprompt,

    /// Print the reply and keep going.
    Reply(String),

    /// Print the farewell and end the session.
    Exit(String),
}

/// Routes parsed commands to their handlers.
///
/// The dispatcher owns the session's record repository. Every failure a
/// handler reports is converted into its fixed user-facing message, so
/// [`Dispatcher::dispatch`] never fails.
pub struct Dispatcher<R: RecordRepository = AddressBook> {
    repo: R,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl Dispatcher<AddressBook> {
    /// Dispatcher over a fresh, empty address book.
    pub fn new() -> Self {
        Self::with_repository(AddressBook::new())
    }
}

impl Default for Dispatcher<AddressBook> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RecordRepository> Dispatcher<R> {
    /// Create a dispatcher over an existing repository.
    pub fn with_repository(repo: R) -> Self {
        Self {
            repo,
            today: local_today,
        }
    }

    /// Replace the clock used by the `birthday` command.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// The underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Handle one raw input line.
    pub fn dispatch(&mut self, line: &str) -> Outcome {
        let invocation = match parse_line(line) {
            Ok(Some(invocation)) => invocation,
            Ok(None) => return Outcome::Reprompt,
            Err(err) => return Self::translate(err),
        };

        let phrase = invocation.command.phrase();
        debug!("Dispatching '{}' with {} argument(s)", phrase, invocation.args.len());

        let result = panic::catch_unwind(AssertUnwindSafe(|| self.run(&invocation)))
            .unwrap_or_else(|payload| Err(CommandError::Unexpected(panic_text(payload.as_ref()))));

        match result {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("Command '{}' failed: {}", phrase, err);
                Self::translate(err)
            }
        }
    }

    fn translate(err: CommandError) -> Outcome {
        Outcome::Reply(err.user_message().to_string())
    }

    fn run(&mut self, inv: &Invocation) -> CommandResult<Outcome> {
        match inv.command {
            Command::Hello => {
                inv.expect_args(0, 0)?;
                Ok(Outcome::Reply(GREETING.to_string()))
            }
            Command::Add => self.add(inv),
            Command::Change => self.change(inv),
            Command::Remove => self.remove(inv),
            Command::Phone => self.phone(inv),
            Command::ShowAll => self.show_all(inv),
            Command::Birthday => self.birthday(inv),
            Command::Records => self.records(inv),
            Command::Help => {
                inv.expect_args(0, 0)?;
                Ok(Outcome::Reply(format!("{}\n{}", COMMAND_LIST, USAGE)))
            }
            Command::Exit => {
                inv.expect_args(0, 0)?;
                info!("Exit requested");
                Ok(Outcome::Exit(FAREWELL.to_string()))
            }
        }
    }

    /// `add <name> <phone> [birthday]`
    ///
    /// A malformed birthday rejects the whole contact.
    fn add(&mut self, inv: &Invocation) -> CommandResult<Outcome> {
        inv.expect_args(2, 1)?;

        let name = Name::new(inv.args[0].as_str())?;
        let phone = PhoneNumber::new(inv.args[1].as_str())?;
        let birthday = inv
            .args
            .get(2)
            .map(|text| Birthday::new(text.as_str()))
            .transpose()?;

        let record = Record::new(name.clone())
            .with_phone(phone)
            .with_birthday(birthday);

        if self.repo.add_record(record).is_some() {
            info!("Replaced existing contact '{}'", name);
        }

        Ok(Outcome::Reply(format!("Contact {} has been added", name)))
    }

    /// `change <name> <old phone> <new phone>`
    fn change(&mut self, inv: &Invocation) -> CommandResult<Outcome> {
        inv.expect_args(3, 0)?;

        let old = PhoneNumber::new(inv.args[1].as_str())?;
        let new = PhoneNumber::new(inv.args[2].as_str())?;
        let name = &inv.args[0];

        let reply = match self.repo.find_mut(name)?.change_phone(&old, new) {
            PhoneEdit::Applied => "Phone number has been changed".to_string(),
            PhoneEdit::NotFound(phone) => phone_not_found(&phone, name),
        };
        Ok(Outcome::Reply(reply))
    }

    /// `remove <name> <phone>`
    fn remove(&mut self, inv: &Invocation) -> CommandResult<Outcome> {
        inv.expect_args(2, 0)?;

        let phone = PhoneNumber::new(inv.args[1].as_str())?;
        let name = &inv.args[0];

        let reply = match self.repo.find_mut(name)?.remove_phone(&phone) {
            PhoneEdit::Applied => "Phone number has been removed".to_string(),
            PhoneEdit::NotFound(phone) => phone_not_found(&phone, name),
        };
        Ok(Outcome::Reply(reply))
    }

    /// `phone <name>`
    fn phone(&self, inv: &Invocation) -> CommandResult<Outcome> {
        inv.expect_args(1, 0)?;

        let record = self.repo.find(&inv.args[0])?;
        if record.phones.is_empty() {
            return Ok(Outcome::Reply(format!("{} has no phone numbers", record.name)));
        }
        Ok(Outcome::Reply(record.phones_display()))
    }

    /// `show all`
    fn show_all(&self, inv: &Invocation) -> CommandResult<Outcome> {
        inv.expect_args(0, 0)?;

        if self.repo.is_empty() {
            return Ok(Outcome::Reply("Address book is empty".to_string()));
        }
        let lines: Vec<String> = self.repo.records().map(Record::to_string).collect();
        Ok(Outcome::Reply(lines.join("\n")))
    }

    /// `birthday <name>`
    fn birthday(&self, inv: &Invocation) -> CommandResult<Outcome> {
        inv.expect_args(1, 0)?;

        let record = self.repo.find(&inv.args[0])?;
        let days = record
            .days_to_birthday((self.today)())
            .ok_or_else(|| CommandError::MissingAttribute {
                name: record.name.to_string(),
                attribute: "birthday",
            })?;
        Ok(Outcome::Reply(format!("{} days to birthday", days)))
    }

    /// `records <count>`
    ///
    /// Lists up to `count` records; `That's all` marks the end of the book.
    /// The count must be at least 1.
    fn records(&self, inv: &Invocation) -> CommandResult<Outcome> {
        inv.expect_args(1, 0)?;

        let raw = &inv.args[0];
        let count = match raw.parse::<usize>() {
            Ok(count) if count > 0 => count,
            _ => {
                return Err(CommandError::InvalidValue {
                    argument: "count",
                    value: raw.clone(),
                })
            }
        };

        let mut iter = self.repo.iter_bounded(count);
        let mut lines: Vec<String> = iter.by_ref().map(Record::to_string).collect();
        if iter.is_exhausted() {
            lines.push(END_OF_RECORDS.to_string());
        }
        Ok(Outcome::Reply(lines.join("\n")))
    }
}

fn phone_not_found(phone: &PhoneNumber, name: &str) -> String {
    format!("Phone {} not found for {}", phone, name)
}

fn panic_text(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    }
}
