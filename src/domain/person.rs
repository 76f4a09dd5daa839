//! Person domain entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::keys::{eq_ignore_case, Keyed, NameKey};

/// A resident and their contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[validate(length(min = 1, message = "firstName must not be blank"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "lastName must not be blank"))]
    pub last_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
}

impl Person {
    /// Check if this person lives at the given address (case-insensitive)
    pub fn lives_at(&self, address: &str) -> bool {
        eq_ignore_case(&self.address, address)
    }

    /// Check if this person lives in the given city (case-insensitive)
    pub fn lives_in(&self, city: &str) -> bool {
        eq_ignore_case(&self.city, city)
    }

    /// Check if this person carries the given last name (case-insensitive)
    pub fn has_last_name(&self, last_name: &str) -> bool {
        eq_ignore_case(&self.last_name, last_name)
    }
}

impl Keyed for Person {
    type Key = NameKey;

    fn key(&self) -> NameKey {
        NameKey::new(&self.first_name, &self.last_name)
    }
}
