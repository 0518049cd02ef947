use super::{AttendanceStatus, deserialize_id, non_blank, null_as_default};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One attendance record as returned by the API.
///
/// `date` and `status` stay raw: a malformed date or an unknown status must
/// not make the whole payload fail to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    #[serde(deserialize_with = "deserialize_id", alias = "employeeId")]
    pub employee_id: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, alias = "logIn")]
    pub log_in: Option<String>,
    #[serde(default, alias = "logOut")]
    pub log_out: Option<String>,
    #[serde(default)]
    pub overtime: Option<String>,
}

impl AttendanceEntry {
    /// Calendar date of the entry, or `None` when missing or unparseable.
    pub fn day(&self) -> Option<NaiveDate> {
        non_blank(self.date.as_deref()).and_then(parse_entry_date)
    }

    /// Parsed status, `None` for labels outside the known set.
    pub fn parsed_status(&self) -> Option<AttendanceStatus> {
        AttendanceStatus::from_label(&self.status)
    }
}

/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM:SS[.f]`.
/// For timestamps with an offset the date is the one local to that offset.
pub(crate) fn parse_entry_date(s: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}
