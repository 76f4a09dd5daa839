//! Fire station coverage mapping.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::keys::{AddressKey, Keyed};

/// Maps one address to the station covering it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Firestation {
    #[validate(length(min = 1, message = "address must not be blank"))]
    pub address: String,
    #[validate(range(min = 1, message = "station must be a positive number"))]
    pub station: u32,
}

impl Firestation {
    pub fn new(address: impl Into<String>, station: u32) -> Self {
        Self {
            address: address.into(),
            station,
        }
    }
}

impl Keyed for Firestation {
    type Key = AddressKey;

    fn key(&self) -> AddressKey {
        AddressKey::new(&self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_zero_is_invalid() {
        assert!(Firestation::new("1509 Culver St", 0).validate().is_err());
        assert!(Firestation::new("1509 Culver St", 3).validate().is_ok());
    }
}
