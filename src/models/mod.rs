//! Data models for address book entities.
//!
//! A [`Record`] aggregates everything the address book knows about one
//! contact: the name it is stored under, its phone numbers and an optional
//! birthday.

pub mod record;

pub use record::{PhoneEdit, Record};
