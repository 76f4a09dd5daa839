//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};

use crate::config::DATA_PATH_ENV;

/// SafetyNet Alerts - Emergency-dispatch views over residents and fire stations
#[derive(Parser, Debug)]
#[command(name = "safetynet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON data document path
    #[arg(short, long, global = true, env = DATA_PATH_ENV)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage residents
    Person(PersonArgs),

    /// Manage address → station mappings
    Firestation(FirestationArgs),

    /// Manage medical records
    MedicalRecord(MedicalRecordArgs),

    /// Residents covered by a station with adult/child counts
    Coverage {
        /// Station number
        station: u32,
    },

    /// Phone numbers of the residents covered by a station
    PhoneAlert {
        /// Station number
        station: u32,
    },

    /// Households covered by the given stations
    Flood {
        /// Station numbers
        #[arg(required = true, num_args = 1..)]
        stations: Vec<u32>,
    },

    /// Residents of an address and the station covering it
    Fire {
        /// Address
        address: String,
    },

    /// Children living at an address
    ChildAlert {
        /// Address
        address: String,
    },

    /// Details of a person and their relatives
    PersonInfo {
        first_name: String,
        last_name: String,
    },

    /// Emails of every resident of a city
    CommunityEmail {
        /// City
        city: String,
    },
}

/// Identifies a person or medical record
#[derive(Args, Debug, Clone)]
pub struct NameArgs {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,
}

/// Arguments for the person command
#[derive(Parser, Debug)]
pub struct PersonArgs {
    #[command(subcommand)]
    pub action: PersonAction,
}

/// Person actions
#[derive(Subcommand, Debug)]
pub enum PersonAction {
    /// List every person
    List,
    /// Show one person
    Get(NameArgs),
    /// Create (or replace) a person
    Create(PersonFields),
    /// Update an existing person
    Update(PersonFields),
    /// Delete a person
    Delete(NameArgs),
}

/// Person attributes
#[derive(Args, Debug, Clone)]
pub struct PersonFields {
    #[command(flatten)]
    pub name: NameArgs,

    #[arg(long, default_value = "")]
    pub address: String,

    #[arg(long, default_value = "")]
    pub city: String,

    #[arg(long, default_value = "")]
    pub zip: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long)]
    pub email: String,
}

/// Arguments for the firestation command
#[derive(Parser, Debug)]
pub struct FirestationArgs {
    #[command(subcommand)]
    pub action: FirestationAction,
}

/// Fire station actions
#[derive(Subcommand, Debug)]
pub enum FirestationAction {
    /// List mappings, optionally for one station
    List {
        #[arg(long)]
        station: Option<u32>,
    },
    /// Create (or replace) the mapping of an address
    Create(FirestationFields),
    /// Update the mapping of a covered address
    Update(FirestationFields),
    /// Delete by address or by station number
    Delete(FirestationTarget),
}

/// Fire station attributes
#[derive(Args, Debug, Clone)]
pub struct FirestationFields {
    /// Covered address
    pub address: String,

    /// Station number
    pub station: u32,
}

/// What to delete: one address or a whole station
#[derive(Args, Debug, Clone)]
#[command(group(ArgGroup::new("target").required(true).args(["address", "station"])))]
pub struct FirestationTarget {
    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub station: Option<u32>,
}

/// Arguments for the medical-record command
#[derive(Parser, Debug)]
pub struct MedicalRecordArgs {
    #[command(subcommand)]
    pub action: MedicalRecordAction,
}

/// Medical record actions
#[derive(Subcommand, Debug)]
pub enum MedicalRecordAction {
    /// List every record
    List,
    /// Show one record
    Get(NameArgs),
    /// Create (or replace) a record
    Create(MedicalRecordFields),
    /// Update an existing record
    Update(MedicalRecordFields),
    /// Delete a record
    Delete(NameArgs),
}

/// Medical record attributes
#[derive(Args, Debug, Clone)]
pub struct MedicalRecordFields {
    #[command(flatten)]
    pub name: NameArgs,

    /// Birthdate as MM/DD/YYYY
    #[arg(long)]
    pub birthdate: String,

    /// Medication as "name:dosage" (repeatable)
    #[arg(long = "medication")]
    pub medications: Vec<String>,

    /// Allergy (repeatable)
    #[arg(long = "allergy")]
    pub allergies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flood_stations() {
        let cli = Cli::try_parse_from(["safetynet", "flood", "1", "2"]).unwrap();
        match cli.command {
            Commands::Flood { stations } => assert_eq!(stations, vec![1, 2]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_firestation_delete_needs_a_target() {
        assert!(Cli::try_parse_from(["safetynet", "firestation", "delete"]).is_err());
        assert!(
            Cli::try_parse_from(["safetynet", "firestation", "delete", "--station", "3"]).is_ok()
        );
    }

    #[test]
    fn test_medical_record_repeatable_lists() {
        let cli = Cli::try_parse_from([
            "safetynet",
            "medical-record",
            "create",
            "John",
            "Boyd",
            "--birthdate",
            "03/06/1984",
            "--medication",
            "aznol:350mg",
            "--medication",
            "hydrapermazol:100mg",
            "--allergy",
            "nillacilan",
        ])
        .unwrap();
        let Commands::MedicalRecord(args) = cli.command else {
            panic!("expected medical-record");
        };
        let MedicalRecordAction::Create(fields) = args.action else {
            panic!("expected create");
        };
        assert_eq!(fields.medications.len(), 2);
        assert_eq!(fields.allergies, vec!["nillacilan".to_string()]);
    }

    #[test]
    fn test_person_create_requires_email() {
        assert!(Cli::try_parse_from(["safetynet", "person", "create", "John", "Boyd"]).is_err());
    }
}
