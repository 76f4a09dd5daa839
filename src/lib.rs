//! SafetyNet Alerts - Emergency-dispatch views over a JSON document
//!
//! Residents, address → fire station mappings and medical records are kept
//! in one JSON document. Record services keep them up to date; alert
//! services join them into the views dispatchers need.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Entities, natural keys and age rules
//! - **services**: Record management and alert views
//! - **infra**: JSON document store and repositories
//! - **types**: Alert view read models
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Residents covered by station 3
//! safetynet coverage 3
//!
//! # Children living at an address
//! safetynet child-alert "1509 Culver St"
//!
//! # Use another document
//! safetynet --data /tmp/data.json person list
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{Firestation, MedicalRecord, Person};
pub use errors::{AppError, AppResult};
pub use services::{ServiceContainer, Services};
