//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, PhoneNumber};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of the birthday cycle used when wrapping a past birthday forward.
///
/// Leap years are not taken into account.
pub const DAYS_IN_YEAR: i64 = 365;

/// Outcome of editing a record's phone list.
///
/// A missing phone is a normal outcome reported back to the user, not an error.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneEdit {
    /// The phone list was updated.
    Applied,

    /// The phone to replace or remove is not in the list; nothing changed.
    NotFound(PhoneNumber),
}

/// A contact in the address book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Name the record is stored under
    pub name: Name,

    /// Phone numbers in the order they were added (duplicates allowed)
    #[serde(default)]
    pub phones: Vec<PhoneNumber>,

    /// Date of birth, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Builder-style helper attaching one phone.
    pub fn with_phone(mut self, phone: PhoneNumber) -> Self {
        self.phones.push(phone);
        self
    }

    /// Builder-style helper attaching a birthday.
    pub fn with_birthday(mut self, birthday: Option<Birthday>) -> Self {
        self.birthday = birthday;
        self
    }

    /// Replace the first occurrence of `old` by appending `new`.
    pub fn change_phone(&mut self, old: &PhoneNumber, new: PhoneNumber) -> PhoneEdit {
        match self.position_of(old) {
            Some(index) => {
                self.phones.remove(index);
                self.phones.push(new);
                PhoneEdit::Applied
            }
            None => PhoneEdit::NotFound(old.clone()),
        }
    }

    /// Remove the first occurrence of `phone`.
    pub fn remove_phone(&mut self, phone: &PhoneNumber) -> PhoneEdit {
        match self.position_of(phone) {
            Some(index) => {
                self.phones.remove(index);
                PhoneEdit::Applied
            }
            None => PhoneEdit::NotFound(phone.clone()),
        }
    }

    fn position_of(&self, phone: &PhoneNumber) -> Option<usize> {
        self.phones.iter().position(|p| p == phone)
    }

    /// Days from `reference` until the next birthday.
    ///
    /// The birthday is moved into `reference`'s year. A date that already
    /// passed within the last 365 days wraps forward by a fixed 365-day year,
    /// so a birthday ten days ago reports 355 and today's reports 0.
    /// A 29 February birthday falls on 1 March in non-leap years.
    ///
    /// Returns `None` when the record has no birthday.
    pub fn days_to_birthday(&self, reference: NaiveDate) -> Option<i64> {
        let birthday = self.birthday?.date();
        let year = reference.year();
        let projected = birthday
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))?;

        let diff = (projected - reference).num_days();
        if (-DAYS_IN_YEAR..=-1).contains(&diff) {
            Some(DAYS_IN_YEAR + diff)
        } else {
            Some(diff)
        }
    }

    /// Phones joined with `", "`, as shown by the `phone` command.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.phones_display())?;
        if let Some(birthday) = &self.birthday {
            write!(f, " {}", birthday)?;
        }
        Ok(())
    }
}
