//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Data document
// =============================================================================

/// Default location of the persisted JSON document
pub const DEFAULT_DATA_PATH: &str = "data/data.json";

/// Environment variable overriding the document location
pub const DATA_PATH_ENV: &str = "SAFETYNET_DATA_PATH";

/// Top-level collection holding residents
pub const PERSONS_COLLECTION: &str = "persons";

/// Top-level collection holding address → station mappings
pub const FIRESTATIONS_COLLECTION: &str = "firestations";

/// Top-level collection holding medical records
pub const MEDICAL_RECORDS_COLLECTION: &str = "medicalrecords";

/// Every collection a fresh document starts with
pub const COLLECTIONS: &[&str] = &[
    PERSONS_COLLECTION,
    FIRESTATIONS_COLLECTION,
    MEDICAL_RECORDS_COLLECTION,
];

/// Textual birthdate format used on read and write (MM/DD/YYYY)
pub const BIRTHDATE_FORMAT: &str = "%m/%d/%Y";

// =============================================================================
// Residents
// =============================================================================

/// Residents at or below this age are children in every view
pub const AGE_OF_MAJORITY: u32 = 18;
