// src/core/schedule.rs

use crate::core::range::DateRange;
use crate::models::{Employee, ScheduleEntry};
use chrono::NaiveDate;
use std::collections::HashMap;

pub const EMPTY_CELL: &str = "--";

pub struct ScheduleRow {
    pub employee_id: String,
    pub name: String,
    /// One shift code per day of the grid.
    pub cells: Vec<String>,
}

/// Employee × day table of shift codes.
pub struct ScheduleGrid {
    pub days: Vec<NaiveDate>,
    pub rows: Vec<ScheduleRow>,
}

/// Entries outside the range or with bad dates are skipped; when an
/// employee has two entries for the same day the later one wins.
pub fn schedule_grid(
    employees: &[Employee],
    entries: &[ScheduleEntry],
    range: &DateRange,
) -> ScheduleGrid {
    let days: Vec<NaiveDate> = range.days().collect();

    let mut shifts: HashMap<(&str, NaiveDate), &str> = HashMap::new();
    for e in entries {
        if let Some(day) = e.day().filter(|d| range.contains(*d)) {
            shifts.insert((e.employee_id.as_str(), day), e.shift.grid_code());
        }
    }

    let rows = employees
        .iter()
        .map(|emp| ScheduleRow {
            employee_id: emp.id.clone(),
            name: emp.name.clone(),
            cells: days
                .iter()
                .map(|d| {
                    shifts
                        .get(&(emp.id.as_str(), *d))
                        .copied()
                        .unwrap_or(EMPTY_CELL)
                        .to_string()
                })
                .collect(),
        })
        .collect();

    ScheduleGrid { days, rows }
}
