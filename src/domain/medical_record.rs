//! Medical record domain entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::keys::{Keyed, NameKey};
use crate::config::BIRTHDATE_FORMAT;
use crate::errors::{AppError, AppResult};

/// Birthdate, medications and allergies of one resident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    #[validate(length(min = 1, message = "firstName must not be blank"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "lastName must not be blank"))]
    pub last_name: String,
    #[serde(default, with = "birthdate_format")]
    pub birthdate: Option<NaiveDate>,
    /// Usually "name:dosage"
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl Keyed for MedicalRecord {
    type Key = NameKey;

    fn key(&self) -> NameKey {
        NameKey::new(&self.first_name, &self.last_name)
    }
}

/// Parse a `MM/DD/YYYY` birthdate supplied by a caller.
pub fn parse_birthdate(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), BIRTHDATE_FORMAT)
        .map_err(|_| AppError::invalid(format!("birthdate '{}' is not MM/DD/YYYY", raw)))
}

/// Serde adapter for the document's `MM/DD/YYYY` birthdate field.
pub mod birthdate_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::config::BIRTHDATE_FORMAT;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format(BIRTHDATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    /// An unparsable birthdate reads as absent so the rest of the
    /// collection still decodes; the age then reports as unknown.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.and_then(|s| match NaiveDate::parse_from_str(s.trim(), BIRTHDATE_FORMAT) {
            Ok(date) => Some(date),
            Err(e) => {
                tracing::warn!("Ignoring birthdate '{}': {}", s, e);
                None
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthdate_uses_month_day_year() {
        let json = r#"{"firstName":"John","lastName":"Boyd","birthdate":"03/06/1984",
            "medications":["aznol:350mg","hydrapermazol:100mg"],"allergies":["nillacilan"]}"#;
        let record: MedicalRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.birthdate, NaiveDate::from_ymd_opt(1984, 3, 6));
        assert_eq!(record.medications, vec!["aznol:350mg", "hydrapermazol:100mg"]);

        let written = serde_json::to_value(&record).unwrap();
        assert_eq!(written["birthdate"], "03/06/1984");
    }

    #[test]
    fn test_missing_fields_default() {
        let record: MedicalRecord =
            serde_json::from_str(r#"{"firstName":"Roger","lastName":"Boyd"}"#).unwrap();
        assert_eq!(record.birthdate, None);
        assert!(record.medications.is_empty());
        assert!(record.allergies.is_empty());
    }

    #[test]
    fn test_malformed_birthdate_reads_as_absent() {
        let json = r#"[{"firstName":"John","lastName":"Boyd","birthdate":"1984-03-06"},
            {"firstName":"Jacob","lastName":"Boyd","birthdate":""},
            {"firstName":"Tenley","lastName":"Boyd","birthdate":"02/18/2012"}]"#;
        let records: Vec<MedicalRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].birthdate, None);
        assert_eq!(records[1].birthdate, None);
        assert_eq!(records[2].birthdate, NaiveDate::from_ymd_opt(2012, 2, 18));
    }

    #[test]
    fn test_parse_birthdate_rejects_iso_dates() {
        assert!(matches!(parse_birthdate("1984-03-06"), Err(AppError::InvalidValue(_))));
        assert_eq!(parse_birthdate("09/06/2017").unwrap(), NaiveDate::from_ymd_opt(2017, 9, 6).unwrap());
    }
}
