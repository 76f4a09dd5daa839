//! Domain layer - Core business entities and logic
//!
//! This module contains the residents, station mappings and medical records
//! together with the natural keys that identify them and the age rules used
//! by every alert view.

pub mod age;
pub mod firestation;
pub mod keys;
pub mod medical_record;
pub mod person;

pub use age::{age_at, is_child_age, AgeClassifier, Clock, FixedClock, SystemClock};
pub use firestation::Firestation;
pub use keys::{AddressKey, Keyed, NameKey};
pub use medical_record::{parse_birthdate, MedicalRecord};
pub use person::Person;
