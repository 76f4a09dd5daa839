//! Firestation command - Address → station mapping management.

use crate::cli::args::{FirestationAction, FirestationArgs, FirestationTarget};
use crate::domain::Firestation;
use crate::errors::{AppError, AppResult};
use crate::services::ServiceContainer;

use super::print_json;

/// Execute the firestation command
pub async fn execute(args: FirestationArgs, services: &dyn ServiceContainer) -> AppResult<()> {
    let firestations = services.firestations();

    match args.action {
        FirestationAction::List { station: None } => {
            print_json(&firestations.list_firestations().await?)
        }
        FirestationAction::List {
            station: Some(station),
        } => print_json(&firestations.get_station(station).await?),
        FirestationAction::Create(fields) => print_json(
            &firestations
                .save_firestation(Firestation::new(fields.address, fields.station))
                .await?,
        ),
        FirestationAction::Update(fields) => print_json(
            &firestations
                .update_firestation(Firestation::new(fields.address, fields.station))
                .await?,
        ),
        FirestationAction::Delete(FirestationTarget {
            address: Some(address),
            ..
        }) => {
            firestations.delete_by_address(&address).await?;
            tracing::info!("Mapping for {} deleted", address);
            Ok(())
        }
        FirestationAction::Delete(FirestationTarget {
            station: Some(station),
            ..
        }) => {
            let removed = firestations.delete_by_station(station).await?;
            tracing::info!("Station {} deleted ({} addresses)", station, removed);
            Ok(())
        }
        FirestationAction::Delete(_) => Err(AppError::invalid(
            "either --address or --station is required",
        )),
    }
}
