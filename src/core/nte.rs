// src/core/nte.rs

//! Client-side checks on an NTE answer, run before anything is sent.

use crate::errors::{AppError, AppResult};
use crate::models::{NteRecord, NteResponse, NteStage};

/// Validate the employee's answer and build the payload to submit.
pub fn validate_response(
    record: &NteRecord,
    feedback: &str,
    declared: bool,
    signature: Option<&str>,
) -> AppResult<NteResponse> {
    if record.stage() != NteStage::Issued {
        return Err(AppError::Validation("NTE already answered".into()));
    }

    let feedback = feedback.trim();
    if feedback.is_empty() {
        return Err(AppError::Validation("feedback is required".into()));
    }

    if !declared {
        return Err(AppError::Validation("declaration must be confirmed".into()));
    }

    let signature = signature
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("signature is required".into()))?;

    Ok(NteResponse {
        employee_feedback: feedback.to_string(),
        declared,
        employee_signature: signature.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issued() -> NteRecord {
        serde_json::from_str(r#"{ "id": "1", "employee_id": "E1", "employee_name": "Eve" }"#).unwrap()
    }

    fn message(r: AppResult<NteResponse>) -> String {
        match r {
            Err(AppError::Validation(m)) => m,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_response_is_trimmed() {
        let r = validate_response(&issued(), "  I was stuck in traffic. ", true, Some("data:image/png;base64,AAA"))
            .unwrap();
        assert_eq!(r.employee_feedback, "I was stuck in traffic.");
        assert!(r.declared);
    }

    #[test]
    fn each_rule_has_its_message() {
        let rec = issued();
        assert_eq!(message(validate_response(&rec, " ", true, Some("s"))), "feedback is required");
        assert_eq!(
            message(validate_response(&rec, "ok", false, Some("s"))),
            "declaration must be confirmed"
        );
        assert_eq!(message(validate_response(&rec, "ok", true, None)), "signature is required");
        assert_eq!(message(validate_response(&rec, "ok", true, Some("  "))), "signature is required");
    }

    #[test]
    fn answered_record_is_rejected() {
        let mut rec = issued();
        rec.employee_feedback = Some("already".into());
        assert_eq!(
            message(validate_response(&rec, "again", true, Some("s"))),
            "NTE already answered"
        );
        // the stage is checked before the form fields
        assert_eq!(message(validate_response(&rec, " ", false, None)), "NTE already answered");
    }
}
