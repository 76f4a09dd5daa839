//! Shared types returned across the service boundary.

mod views;

pub use views::{
    ChildAlert, ChildView, CommunityEmails, CoveredResident, FireView, FloodMap, PersonInfo,
    PhoneRoster, ResidentMedicalView, StationCoverage,
};
