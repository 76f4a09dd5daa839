//! Medical record command - Birthdates, medications and allergies.

use crate::cli::args::{MedicalRecordAction, MedicalRecordArgs, MedicalRecordFields};
use crate::domain::{parse_birthdate, MedicalRecord};
use crate::errors::AppResult;
use crate::services::ServiceContainer;

use super::print_json;

/// Execute the medical-record command
pub async fn execute(args: MedicalRecordArgs, services: &dyn ServiceContainer) -> AppResult<()> {
    let records = services.medical_records();

    match args.action {
        MedicalRecordAction::List => print_json(&records.list_records().await?),
        MedicalRecordAction::Get(name) => {
            print_json(&records.get_record(&name.first_name, &name.last_name).await?)
        }
        MedicalRecordAction::Create(fields) => {
            print_json(&records.save_record(to_record(fields)?).await?)
        }
        MedicalRecordAction::Update(fields) => {
            print_json(&records.update_record(to_record(fields)?).await?)
        }
        MedicalRecordAction::Delete(name) => {
            records.delete_record(&name.first_name, &name.last_name).await?;
            tracing::info!(
                "Medical record of {} {} deleted",
                name.first_name,
                name.last_name
            );
            Ok(())
        }
    }
}

fn to_record(fields: MedicalRecordFields) -> AppResult<MedicalRecord> {
    Ok(MedicalRecord {
        birthdate: Some(parse_birthdate(&fields.birthdate)?),
        first_name: fields.name.first_name,
        last_name: fields.name.last_name,
        medications: fields.medications,
        allergies: fields.allergies,
    })
}
