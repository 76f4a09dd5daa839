//! Read models returned by the alert views.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::domain::{MedicalRecord, Person};

/// A resident covered by a station, with contact details only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoveredResident {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: String,
}

impl From<&Person> for CoveredResident {
    fn from(person: &Person) -> Self {
        Self {
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            address: person.address.clone(),
            phone: person.phone.clone(),
        }
    }
}

/// Residents covered by one station and how many are adults/children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationCoverage {
    pub residents: Vec<CoveredResident>,
    pub adult_count: usize,
    pub child_count: usize,
}

/// A resident enriched with medical data.
///
/// `age` is `None` when it cannot be computed (no medical record, or a
/// missing/future birthdate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentMedicalView {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub age: Option<u32>,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
}

impl ResidentMedicalView {
    pub fn new(person: &Person, age: Option<u32>, record: Option<&MedicalRecord>) -> Self {
        Self {
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            phone: person.phone.clone(),
            age,
            medications: record.map(|r| r.medications.clone()).unwrap_or_default(),
            allergies: record.map(|r| r.allergies.clone()).unwrap_or_default(),
        }
    }
}

/// Households keyed by address, for every address the requested stations cover.
pub type FloodMap = BTreeMap<String, Vec<ResidentMedicalView>>;

/// Who lives at a burning address and which station covers it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FireView {
    pub station_number: u32,
    pub residents: Vec<ResidentMedicalView>,
}

/// A child living at an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildView {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
}

/// Children at an address, plus everyone else in the household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildAlert {
    pub children: Vec<ChildView>,
    pub other_household_members: Vec<ResidentMedicalView>,
}

/// Details of one person and everyone sharing their last name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonInfo {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub age: Option<u32>,
    pub email: String,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
    pub others_with_same_last_name: Vec<Person>,
}

/// Distinct phone numbers of a station's residents
pub type PhoneRoster = BTreeSet<String>;

/// Distinct emails of a city's residents
pub type CommunityEmails = BTreeSet<String>;
