//! Where command data comes from: the portal API or a local JSON snapshot.

use crate::AppContext;
use crate::api::ApiClient;
use crate::core::range::DateRange;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceEntry, AuthContext, Employee, ScheduleEntry};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Offline copy of what the API would return.
#[derive(Debug, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
    #[serde(default)]
    pub schedules: Vec<ScheduleEntry>,
}

impl Snapshot {
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Single-threaded runtime for the async API calls of one command.
pub fn runtime() -> AppResult<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(AppError::from)
}

pub fn session(ctx: &AppContext) -> AppResult<AuthContext> {
    AuthContext::load(&ctx.config.session_path())
}

pub fn api_client(ctx: &AppContext) -> AppResult<ApiClient> {
    ApiClient::new(&ctx.config.api_base_url, session(ctx)?)
}

pub fn load_attendance(
    ctx: &AppContext,
    range: &DateRange,
    employee: Option<&str>,
    input: Option<&str>,
) -> AppResult<(Vec<Employee>, Vec<AttendanceEntry>)> {
    if let Some(file) = input {
        let snap = Snapshot::load(Path::new(file))?;
        return Ok((snap.employees, snap.attendance));
    }

    let client = api_client(ctx)?;
    runtime()?.block_on(async {
        let (employees, entries) =
            tokio::try_join!(client.employees(), client.attendance(range, employee))?;
        Ok::<_, AppError>((employees, entries))
    })
}

pub fn load_schedules(
    ctx: &AppContext,
    range: &DateRange,
    input: Option<&str>,
) -> AppResult<(Vec<Employee>, Vec<ScheduleEntry>)> {
    if let Some(file) = input {
        let snap = Snapshot::load(Path::new(file))?;
        return Ok((snap.employees, snap.schedules));
    }

    let client = api_client(ctx)?;
    runtime()?.block_on(async {
        let (employees, entries) = tokio::try_join!(client.employees(), client.schedules(range))?;
        Ok::<_, AppError>((employees, entries))
    })
}
