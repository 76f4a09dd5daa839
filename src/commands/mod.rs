//! Commands module - CLI command implementations.
//!
//! Each command group is implemented in its own module and talks to the
//! services through the [`ServiceContainer`] only.

pub mod alerts;
pub mod firestation;
pub mod medical_record;
pub mod person;

use serde::Serialize;

use crate::cli::Commands;
use crate::errors::AppResult;
use crate::services::ServiceContainer;

/// Execute a parsed command against the services
pub async fn execute(command: Commands, services: &dyn ServiceContainer) -> AppResult<()> {
    match command {
        Commands::Person(args) => person::execute(args, services).await,
        Commands::Firestation(args) => firestation::execute(args, services).await,
        Commands::MedicalRecord(args) => medical_record::execute(args, services).await,
        other => alerts::execute(other, services).await,
    }
}

/// Print a result as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cli::args::{NameArgs, PersonAction, PersonArgs};
    use crate::errors::AppError;
    use crate::infra::MockPersonRepository;
    use crate::services::{MockServiceContainer, PersonManager, PersonService};

    #[tokio::test]
    async fn test_person_get_propagates_not_found() {
        let mut repo = MockPersonRepository::new();
        repo.expect_find_by_name().returning(|_| Ok(None));
        let persons: Arc<dyn PersonService> = Arc::new(PersonManager::new(Arc::new(repo)));

        let mut services = MockServiceContainer::new();
        services.expect_persons().returning(move || persons.clone());

        let command = Commands::Person(PersonArgs {
            action: PersonAction::Get(NameArgs {
                first_name: "Nobody".into(),
                last_name: "Nowhere".into(),
            }),
        });
        let result = execute(command, &services).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_firestation_delete_by_station_dispatches() {
        use crate::cli::args::{FirestationAction, FirestationArgs, FirestationTarget};
        use crate::infra::MockFirestationRepository;
        use crate::services::{FirestationManager, FirestationService};

        let mut repo = MockFirestationRepository::new();
        repo.expect_delete_by_station()
            .withf(|station| *station == 3)
            .times(1)
            .returning(|_| Ok(2));
        let firestations: Arc<dyn FirestationService> =
            Arc::new(FirestationManager::new(Arc::new(repo)));

        let mut services = MockServiceContainer::new();
        services
            .expect_firestations()
            .returning(move || firestations.clone());

        let command = Commands::Firestation(FirestationArgs {
            action: FirestationAction::Delete(FirestationTarget {
                address: None,
                station: Some(3),
            }),
        });

        assert!(execute(command, &services).await.is_ok());
    }
}
