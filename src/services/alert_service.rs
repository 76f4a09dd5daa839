//! Alert service - Read-only views joining residents, stations and medical records.
//!
//! Every view re-reads the document through the repositories. Residents are
//! deduplicated by their natural name key, keeping the first occurrence, and
//! medical data is looked up through a name-keyed index built once per call.
//! A resident whose age cannot be computed is reported with an unknown age
//! and is never classified as a child.

use async_trait::async_trait;
use chrono::NaiveDate;
use futures::future::try_join_all;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::domain::{is_child_age, AddressKey, AgeClassifier, Firestation, Keyed, MedicalRecord, NameKey, Person};
use crate::errors::{AppResult, OptionExt};
use crate::infra::{FirestationRepository, MedicalRecordRepository, PersonRepository};
use crate::types::{
    ChildAlert, ChildView, CommunityEmails, CoveredResident, FireView, FloodMap, PersonInfo,
    PhoneRoster, ResidentMedicalView, StationCoverage,
};

/// Alert service trait for dependency injection.
#[async_trait]
pub trait AlertService: Send + Sync {
    /// Residents covered by a station with adult/child counts
    async fn coverage(&self, station: u32) -> AppResult<StationCoverage>;

    /// Distinct phone numbers of the residents covered by a station
    async fn phone_roster(&self, station: u32) -> AppResult<PhoneRoster>;

    /// Households of every address covered by any of the stations
    async fn flood_map(&self, stations: &[u32]) -> AppResult<FloodMap>;

    /// Residents of an address and the station covering it
    async fn fire_view(&self, address: &str) -> AppResult<FireView>;

    /// Children living at an address and the rest of their household
    async fn child_alert(&self, address: &str) -> AppResult<ChildAlert>;

    /// Details of one person and the others sharing their last name
    async fn person_info(&self, first_name: &str, last_name: &str) -> AppResult<PersonInfo>;

    /// Distinct emails of the residents of a city
    async fn community_email(&self, city: &str) -> AppResult<CommunityEmails>;
}

type MedicalIndex = HashMap<NameKey, MedicalRecord>;

/// Concrete implementation of AlertService over the three repositories.
pub struct AlertEngine {
    persons: Arc<dyn PersonRepository>,
    firestations: Arc<dyn FirestationRepository>,
    medical_records: Arc<dyn MedicalRecordRepository>,
    ages: AgeClassifier,
}

impl AlertEngine {
    /// Create new alert engine instance with repositories and an age classifier
    pub fn new(
        persons: Arc<dyn PersonRepository>,
        firestations: Arc<dyn FirestationRepository>,
        medical_records: Arc<dyn MedicalRecordRepository>,
        ages: AgeClassifier,
    ) -> Self {
        Self {
            persons,
            firestations,
            medical_records,
            ages,
        }
    }

    async fn medical_index(&self) -> AppResult<MedicalIndex> {
        let mut index = MedicalIndex::new();
        for record in self.medical_records.find_all().await? {
            index.entry(record.key()).or_insert(record);
        }
        Ok(index)
    }

    /// Residents of every address, deduplicated across addresses
    async fn residents_of(&self, addresses: &[String]) -> AppResult<Vec<Person>> {
        let households = try_join_all(
            addresses
                .iter()
                .map(|address| self.persons.find_by_address(address)),
        )
        .await?;
        Ok(dedupe(households.into_iter().flatten()))
    }

    async fn station_residents(&self, station: u32) -> AppResult<Vec<Person>> {
        let mappings = self.firestations.find_by_station(station).await?;
        let addresses = distinct_addresses(mappings);
        tracing::debug!("Station {} covers {} addresses", station, addresses.len());
        self.residents_of(&addresses).await
    }

    /// Apply an age rule to a resident's birthdate; `None` when the age is unknown
    fn classify<T>(
        &self,
        person: &Person,
        record: Option<&MedicalRecord>,
        rule: impl FnOnce(&AgeClassifier, Option<NaiveDate>) -> AppResult<T>,
    ) -> Option<T> {
        let Some(record) = record else {
            tracing::warn!(
                "No medical record for {} {}, age unknown",
                person.first_name,
                person.last_name
            );
            return None;
        };
        match rule(&self.ages, record.birthdate) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(
                    "Age of {} {} unknown: {}",
                    person.first_name,
                    person.last_name,
                    e
                );
                None
            }
        }
    }

    fn age_of(&self, person: &Person, record: Option<&MedicalRecord>) -> Option<u32> {
        self.classify(person, record, AgeClassifier::age)
    }

    /// Unknown ages are never children
    fn is_child(&self, person: &Person, record: Option<&MedicalRecord>) -> bool {
        self.classify(person, record, AgeClassifier::is_child)
            .unwrap_or(false)
    }

    fn enrich(&self, person: &Person, index: &MedicalIndex) -> ResidentMedicalView {
        let record = index.get(&person.key());
        ResidentMedicalView::new(person, self.age_of(person, record), record)
    }
}

/// Keep the first person seen for each name key
fn dedupe(persons: impl IntoIterator<Item = Person>) -> Vec<Person> {
    let mut seen = HashSet::new();
    persons
        .into_iter()
        .filter(|p| seen.insert(p.key()))
        .collect()
}

/// Addresses of the mappings, each once, in first-seen order
fn distinct_addresses(mappings: impl IntoIterator<Item = Firestation>) -> Vec<String> {
    let mut seen = HashSet::new();
    mappings
        .into_iter()
        .filter(|m| seen.insert(m.key()))
        .map(|m| m.address)
        .collect()
}

#[async_trait]
impl AlertService for AlertEngine {
    async fn coverage(&self, station: u32) -> AppResult<StationCoverage> {
        let (residents, index) =
            tokio::try_join!(self.station_residents(station), self.medical_index())?;

        let child_count = residents
            .iter()
            .filter(|p| self.is_child(p, index.get(&p.key())))
            .count();

        Ok(StationCoverage {
            adult_count: residents.len() - child_count,
            child_count,
            residents: residents.iter().map(CoveredResident::from).collect(),
        })
    }

    async fn phone_roster(&self, station: u32) -> AppResult<PhoneRoster> {
        let residents = self.station_residents(station).await?;
        Ok(residents
            .into_iter()
            .map(|p| p.phone)
            .filter(|phone| !phone.is_empty())
            .collect())
    }

    async fn flood_map(&self, stations: &[u32]) -> AppResult<FloodMap> {
        let mappings = try_join_all(
            stations
                .iter()
                .map(|station| self.firestations.find_by_station(*station)),
        )
        .await?;
        let addresses = distinct_addresses(mappings.into_iter().flatten());

        let (households, index) = tokio::try_join!(
            try_join_all(
                addresses
                    .iter()
                    .map(|address| self.persons.find_by_address(address))
            ),
            self.medical_index()
        )?;

        let mut map = FloodMap::new();
        for (address, household) in addresses.into_iter().zip(households) {
            let residents = dedupe(household)
                .iter()
                .map(|p| self.enrich(p, &index))
                .collect();
            map.insert(address, residents);
        }
        tracing::debug!("Flood map over {:?}: {} addresses", stations, map.len());
        Ok(map)
    }

    async fn fire_view(&self, address: &str) -> AppResult<FireView> {
        AddressKey::parse(address)?;
        let station = self
            .firestations
            .find_by_address(address)
            .await?
            .ok_or_not_found(format!(
                "There is no fire station covering this address: {}",
                address
            ))?;

        let (household, index) =
            tokio::try_join!(self.persons.find_by_address(address), self.medical_index())?;

        Ok(FireView {
            station_number: station.station,
            residents: dedupe(household)
                .iter()
                .map(|p| self.enrich(p, &index))
                .collect(),
        })
    }

    async fn child_alert(&self, address: &str) -> AppResult<ChildAlert> {
        AddressKey::parse(address)?;
        let (household, index) =
            tokio::try_join!(self.persons.find_by_address(address), self.medical_index())?;

        let mut alert = ChildAlert {
            children: Vec::new(),
            other_household_members: Vec::new(),
        };
        for person in dedupe(household) {
            let record = index.get(&person.key());
            match self.age_of(&person, record) {
                Some(age) if is_child_age(age) => alert.children.push(ChildView {
                    first_name: person.first_name,
                    last_name: person.last_name,
                    age,
                }),
                age => alert
                    .other_household_members
                    .push(ResidentMedicalView::new(&person, age, record)),
            }
        }
        tracing::debug!(
            "Child alert at {}: {} children",
            address,
            alert.children.len()
        );
        Ok(alert)
    }

    async fn person_info(&self, first_name: &str, last_name: &str) -> AppResult<PersonInfo> {
        let key = NameKey::parse(first_name, last_name)?;
        let (person, family, index) = tokio::try_join!(
            self.persons.find_by_name(&key),
            self.persons.find_by_last_name(last_name),
            self.medical_index()
        )?;
        let person = person.ok_or_not_found(format!(
            "Person {} {} was not found.",
            first_name, last_name
        ))?;

        let record = index.get(&key);
        let age = self.age_of(&person, record);
        let others = dedupe(family.into_iter().filter(|p| p.key() != key));

        Ok(PersonInfo {
            age,
            medications: record.map(|r| r.medications.clone()).unwrap_or_default(),
            allergies: record.map(|r| r.allergies.clone()).unwrap_or_default(),
            first_name: person.first_name,
            last_name: person.last_name,
            address: person.address,
            email: person.email,
            others_with_same_last_name: others,
        })
    }

    async fn community_email(&self, city: &str) -> AppResult<CommunityEmails> {
        let residents = self.persons.find_by_city(city).await?;
        Ok(residents
            .into_iter()
            .map(|p| p.email)
            .filter(|email| !email.is_empty())
            .collect())
    }
}
