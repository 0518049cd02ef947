// src/export/model.rs

//! Flat string tables shared by the XLSX, CSV and terminal renderers.

use crate::core::aggregate::AttendanceSummary;
use crate::models::{AttendanceEntry, AttendanceStatus, Employee};

const SUMMARY_LEADING: [&str; 5] = ["Employee ID", "Name", "Department", "Position", "Team Leader"];

const SUMMARY_TRAILING: [&str; 9] = [
    "Unrecognized",
    "Working Days",
    "Paid Days",
    "Partial Days",
    "Regular Hours",
    "Overtime Hours",
    "Total Hours",
    "Attendance Rate",
    "Note",
];

pub const DETAIL_HEADERS: [&str; 8] = [
    "Employee ID",
    "Name",
    "Department",
    "Date",
    "Status",
    "Log In",
    "Log Out",
    "Overtime",
];

/// Header for the summary sheet / CSV.
pub fn summary_headers() -> Vec<&'static str> {
    SUMMARY_LEADING
        .iter()
        .copied()
        .chain(AttendanceStatus::ALL.iter().map(|s| s.label()))
        .chain(SUMMARY_TRAILING.iter().copied())
        .collect()
}

pub fn summary_to_row(s: &AttendanceSummary) -> Vec<String> {
    let mut row = vec![
        s.employee_id.clone(),
        s.name.clone(),
        opt(&s.department),
        opt(&s.position),
        opt(&s.team_leader),
    ];

    row.extend(AttendanceStatus::ALL.iter().map(|st| s.counts.get(*st).to_string()));

    row.extend([
        s.unrecognized.to_string(),
        s.working_days.to_string(),
        s.paid_days.to_string(),
        s.partial_days.to_string(),
        format_hours(s.regular_hours),
        format_hours(s.overtime_hours),
        format_hours(s.total_hours),
        s.rate.to_string(),
        s.note.to_string(),
    ]);

    row
}

pub fn detail_to_row(emp: &Employee, e: &AttendanceEntry) -> Vec<String> {
    vec![
        emp.id.clone(),
        emp.name.clone(),
        opt(&emp.department),
        // keep the normalized day when it parses, the raw value otherwise
        e.day()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| opt(&e.date)),
        e.status.clone(),
        opt(&e.log_in),
        opt(&e.log_out),
        opt(&e.overtime),
    ]
}

pub fn format_hours(h: f64) -> String {
    format!("{h:.2}")
}

fn opt(v: &Option<String>) -> String {
    v.clone().unwrap_or_default()
}
