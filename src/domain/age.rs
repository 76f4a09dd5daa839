//! Age computation and child/adult classification.
//!
//! Age is the difference of calendar years between the birthdate and
//! "today"; it is not reduced when the birthday has not come round yet this
//! year. "Today" comes from an injected [`Clock`] so views are reproducible.

use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate};

use crate::config::AGE_OF_MAJORITY;
use crate::errors::{AppError, AppResult};

/// Source of the current date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Age in years of someone born on `birthdate`, as of `now`.
///
/// # Errors
/// `InvalidValue` if the birthdate is absent or after `now`.
pub fn age_at(birthdate: Option<NaiveDate>, now: NaiveDate) -> AppResult<u32> {
    let birthdate = birthdate.ok_or_else(|| AppError::invalid("birthdate is missing"))?;
    if birthdate > now {
        return Err(AppError::invalid(format!(
            "birthdate {} is in the future",
            birthdate
        )));
    }
    // birthdate <= now, so the year difference is never negative
    Ok((now.year() - birthdate.year()) as u32)
}

/// Whether an age falls at or below the age of majority
pub fn is_child_age(age: u32) -> bool {
    age <= AGE_OF_MAJORITY
}

/// Age arithmetic bound to a clock.
#[derive(Clone)]
pub struct AgeClassifier {
    clock: Arc<dyn Clock>,
}

impl AgeClassifier {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Current date according to the injected clock
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn age(&self, birthdate: Option<NaiveDate>) -> AppResult<u32> {
        age_at(birthdate, self.today())
    }

    pub fn is_child(&self, birthdate: Option<NaiveDate>) -> AppResult<bool> {
        self.age(birthdate).map(is_child_age)
    }
}

impl Default for AgeClassifier {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl std::fmt::Debug for AgeClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgeClassifier")
            .field("today", &self.today())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn classifier() -> AgeClassifier {
        AgeClassifier::new(Arc::new(FixedClock(date(2022, 6, 13))))
    }

    #[test]
    fn test_age_is_year_difference_only() {
        // Birthday (Dec 25) has not happened yet in 2022, age is still 42
        assert_eq!(classifier().age(Some(date(1980, 12, 25))).unwrap(), 42);
        assert_eq!(classifier().age(Some(date(1980, 1, 1))).unwrap(), 42);
    }

    #[test]
    fn test_future_birthdate_is_invalid() {
        let result = classifier().age(Some(date(2025, 12, 25)));
        assert!(matches!(result, Err(AppError::InvalidValue(_))));
    }

    #[test]
    fn test_missing_birthdate_is_invalid() {
        assert!(matches!(classifier().age(None), Err(AppError::InvalidValue(_))));
    }

    #[test]
    fn test_born_today_is_a_child() {
        assert_eq!(classifier().age(Some(date(2022, 6, 13))).unwrap(), 0);
        assert!(classifier().is_child(Some(date(2022, 6, 13))).unwrap());
    }

    #[test]
    fn test_age_of_majority_boundary() {
        // 18 is still a child, 19 is an adult
        assert!(classifier().is_child(Some(date(2004, 1, 1))).unwrap());
        assert!(!classifier().is_child(Some(date(2003, 1, 1))).unwrap());
        assert!(is_child_age(18));
        assert!(!is_child_age(19));
    }

    #[test]
    fn test_very_old_person_is_adult() {
        assert!(!classifier().is_child(Some(date(1901, 10, 10))).unwrap());
    }
}
