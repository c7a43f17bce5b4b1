//! Contact Book - an interactive console address book.
//!
//! Contacts are kept in memory for the lifetime of one session. Each contact
//! has a unique name, any number of phone numbers and an optional birthday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record and its phone/birthday operations
//! - **repositories**: Record storage with bounded, insertion-ordered iteration
//! - **commands**: Command parsing, handlers and error translation
//! - **console**: The prompt / read / reply loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use commands::{Command, Dispatcher, Outcome};
pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::{PhoneEdit, Record};
pub use repositories::{AddressBook, BoundedIter, RecordRepository};
