//! Person command - Resident management.

use crate::cli::args::{PersonAction, PersonArgs, PersonFields};
use crate::domain::Person;
use crate::errors::AppResult;
use crate::services::ServiceContainer;

use super::print_json;

/// Execute the person command
pub async fn execute(args: PersonArgs, services: &dyn ServiceContainer) -> AppResult<()> {
    let persons = services.persons();

    match args.action {
        PersonAction::List => print_json(&persons.list_persons().await?),
        PersonAction::Get(name) => {
            print_json(&persons.get_person(&name.first_name, &name.last_name).await?)
        }
        PersonAction::Create(fields) => print_json(&persons.save_person(fields.into()).await?),
        PersonAction::Update(fields) => print_json(&persons.update_person(fields.into()).await?),
        PersonAction::Delete(name) => {
            persons.delete_person(&name.first_name, &name.last_name).await?;
            tracing::info!("Person {} {} deleted", name.first_name, name.last_name);
            Ok(())
        }
    }
}

impl From<PersonFields> for Person {
    fn from(fields: PersonFields) -> Self {
        Self {
            first_name: fields.name.first_name,
            last_name: fields.name.last_name,
            address: fields.address,
            city: fields.city,
            zip: fields.zip,
            phone: fields.phone,
            email: fields.email,
        }
    }
}
