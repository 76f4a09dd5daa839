//! Alert commands - Read-only views for dispatchers.

use crate::cli::Commands;
use crate::errors::{AppError, AppResult};
use crate::services::ServiceContainer;

use super::print_json;

/// Execute one of the alert view commands
pub async fn execute(command: Commands, services: &dyn ServiceContainer) -> AppResult<()> {
    let alerts = services.alerts();

    match command {
        Commands::Coverage { station } => print_json(&alerts.coverage(station).await?),
        Commands::PhoneAlert { station } => print_json(&alerts.phone_roster(station).await?),
        Commands::Flood { stations } => print_json(&alerts.flood_map(&stations).await?),
        Commands::Fire { address } => print_json(&alerts.fire_view(&address).await?),
        Commands::ChildAlert { address } => print_json(&alerts.child_alert(&address).await?),
        Commands::PersonInfo {
            first_name,
            last_name,
        } => print_json(&alerts.person_info(&first_name, &last_name).await?),
        Commands::CommunityEmail { city } => print_json(&alerts.community_email(&city).await?),
        other => Err(AppError::internal(format!("{:?} is not an alert command", other))),
    }
}
