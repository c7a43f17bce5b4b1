//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// International prefix accepted for 13-character numbers.
const INTERNATIONAL_PREFIX: &str = "+38";
const INTERNATIONAL_LEN: usize = 13;

/// Trunk prefix accepted for 10-character local numbers.
const LOCAL_PREFIX: &str = "0";
const LOCAL_LEN: usize = 10;

/// A type-safe wrapper for phone numbers.
///
/// Two shapes are accepted, with no normalization of the input:
///
/// - `+38` followed by ten digits (13 characters in total)
/// - `0` followed by nine digits (10 characters in total)
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+380975323736").unwrap();
/// assert_eq!(phone.as_str(), "+380975323736");
/// assert!(PhoneNumber::new("555-1234").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Validate phone format.
    fn is_valid(phone: &str) -> bool {
        let rest = if phone.len() == INTERNATIONAL_LEN {
            phone.strip_prefix(INTERNATIONAL_PREFIX)
        } else if phone.len() == LOCAL_LEN {
            phone.strip_prefix(LOCAL_PREFIX)
        } else {
            None
        };

        match rest {
            Some(digits) => digits.chars().all(|c| c.is_ascii_digit()),
            None => false,
        }
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
