use crate::AppContext;
use crate::cli::commands::data::{api_client, runtime};
use crate::cli::parser::{Commands, NteAction};
use crate::core::nte::validate_response;
use crate::errors::AppResult;
use crate::models::NteRecord;
use crate::ui::messages::{header, success};
use std::fs;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    let Commands::Nte { action } = cmd else {
        return Ok(());
    };

    let client = api_client(ctx)?;
    let rt = runtime()?;

    match action {
        NteAction::Show { id } => {
            let record = rt.block_on(client.nte(id))?;
            print_record(&record);
        }
        NteAction::Respond {
            id,
            feedback,
            confirm,
            signature,
        } => {
            let signature = signature.as_deref().map(fs::read_to_string).transpose()?;

            let record = rt.block_on(client.nte(id))?;
            let response = validate_response(&record, feedback, *confirm, signature.as_deref())?;

            let updated = rt.block_on(client.submit_nte_response(id, &response))?;
            success(format!("Response recorded, NTE is now {}", updated.stage()));
        }
    }
    Ok(())
}

fn print_record(r: &NteRecord) {
    let show = |label: &str, value: Option<&str>| {
        println!("{label:<14} {}", value.filter(|v| !v.trim().is_empty()).unwrap_or("-"));
    };

    header(format!("NTE {}", r.id));
    show("Employee", Some(&r.employee_name));
    show("Employee ID", Some(&r.employee_id));
    show("Position", r.position.as_deref());
    show("Department", r.department.as_deref());
    show("Issued", r.date_issued.as_deref());
    show("Issued by", r.issued_by.as_deref());
    show("Offense", r.offense_type.as_deref());
    show("Description", r.offense_description.as_deref());
    show("Feedback", r.employee_feedback.as_deref());
    show("Decision", r.decision.as_deref());
    println!("{:<14} {}", "Stage", r.stage());
}
