//! Records received from the portal API.
//!
//! None of these are owned by this tool: they are read-mostly snapshots
//! fetched on demand, so "last fetch wins".

pub mod attendance;
pub mod employee;
pub mod nte;
pub mod schedule;
pub mod session;
pub mod status;
pub mod ticket;

pub use attendance::AttendanceEntry;
pub use employee::Employee;
pub use nte::{NteRecord, NteResponse, NteStage};
pub use schedule::{ScheduleEntry, ShiftType};
pub use session::AuthContext;
pub use status::{AttendanceStatus, PayClass};
pub use ticket::{Ticket, TicketPriority, TicketStatus};

use serde::{Deserialize, Deserializer};

/// The API is not consistent about identifiers: some endpoints send them
/// as numbers, others as strings. Normalize everything to `String`.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// `null` decodes like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Blank strings are treated as absent.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
