//! Natural-key value objects.
//!
//! Records carry no surrogate IDs. Identity is a case-insensitive
//! real-world attribute tuple, normalized once here so that keys can be
//! compared and hashed directly.

use std::fmt;
use std::hash::Hash;

use crate::errors::{AppError, AppResult};

/// A record that is identified by a natural key.
pub trait Keyed {
    type Key: Clone + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync;

    /// Natural key of this record
    fn key(&self) -> Self::Key;
}

/// (firstName, lastName) identity of a person or medical record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameKey {
    first_name: String,
    last_name: String,
}

impl NameKey {
    /// Build a key, lower-casing both parts.
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_lowercase(),
            last_name: last_name.to_lowercase(),
        }
    }

    /// Build a key from caller input, rejecting blank names.
    pub fn parse(first_name: &str, last_name: &str) -> AppResult<Self> {
        if first_name.trim().is_empty() || last_name.trim().is_empty() {
            return Err(AppError::invalid("firstName and lastName must not be blank"));
        }
        Ok(Self::new(first_name, last_name))
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Address identity of a fire station mapping; also the household join key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressKey(String);

impl AddressKey {
    pub fn new(address: &str) -> Self {
        Self(address.to_lowercase())
    }

    /// Build a key from caller input, rejecting a blank address.
    pub fn parse(address: &str) -> AppResult<Self> {
        if address.trim().is_empty() {
            return Err(AppError::invalid("address must not be blank"));
        }
        Ok(Self::new(address))
    }
}

impl fmt::Display for AddressKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Case-insensitive string equality used by every informal join.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
