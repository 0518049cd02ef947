use super::{deserialize_id, non_blank};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Notice-to-explain record. Different roles fill different fields over
/// time; the stage is derived from which fields are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NteRecord {
    #[serde(deserialize_with = "deserialize_id", alias = "_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id", alias = "employeeId")]
    pub employee_id: String,
    #[serde(alias = "employeeName")]
    pub employee_name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department: Option<String>,

    // offense metadata
    #[serde(default, alias = "dateIssued")]
    pub date_issued: Option<String>,
    #[serde(default, alias = "offenseType")]
    pub offense_type: Option<String>,
    #[serde(default, alias = "offenseDescription")]
    pub offense_description: Option<String>,
    #[serde(default, alias = "issuedBy")]
    pub issued_by: Option<String>,

    // employee response
    #[serde(default, alias = "employeeFeedback")]
    pub employee_feedback: Option<String>,
    #[serde(default)]
    pub declared: bool,
    #[serde(default, alias = "employeeSignature")]
    pub employee_signature: Option<String>,
    #[serde(default, alias = "respondedAt")]
    pub responded_at: Option<String>,

    // decision
    #[serde(default)]
    pub decision: Option<String>,
    #[serde(default, alias = "decisionSignature")]
    pub decision_signature: Option<String>,
    #[serde(default, alias = "decidedAt")]
    pub decided_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NteStage {
    Issued,
    Responded,
    Decided,
}

impl fmt::Display for NteStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NteStage::Issued => "issued (awaiting employee response)",
            NteStage::Responded => "responded (awaiting decision)",
            NteStage::Decided => "decided",
        })
    }
}

impl NteRecord {
    pub fn stage(&self) -> NteStage {
        if non_blank(self.decision.as_deref()).is_some() {
            NteStage::Decided
        } else if non_blank(self.employee_feedback.as_deref()).is_some() {
            NteStage::Responded
        } else {
            NteStage::Issued
        }
    }
}

/// Payload sent when the employee answers an NTE.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NteResponse {
    pub employee_feedback: String,
    pub declared: bool,
    pub employee_signature: String,
}
