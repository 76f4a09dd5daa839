//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `person`, `firestation`, `medical-record` - Record management
//! - `coverage`, `phone-alert`, `flood`, `fire`, `child-alert`,
//!   `person-info`, `community-email` - Alert views

pub mod args;

pub use args::{Cli, Commands};
