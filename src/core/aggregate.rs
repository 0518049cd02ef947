// src/core/aggregate.rs

//! Folds attendance entries into one summary row per employee.

use crate::core::overtime::overtime_hours;
use crate::core::range::DateRange;
use crate::models::{AttendanceEntry, AttendanceStatus, Employee, PayClass};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Occurrences of each status, indexed like [`AttendanceStatus::ALL`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTally {
    counts: [u32; AttendanceStatus::ALL.len()],
}

impl StatusTally {
    pub fn get(&self, status: AttendanceStatus) -> u32 {
        self.counts[status.index()]
    }

    fn bump(&mut self, status: AttendanceStatus) {
        self.counts[status.index()] += 1;
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

impl Serialize for StatusTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for st in AttendanceStatus::ALL {
            map.serialize_entry(st.label(), &self.get(st))?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceRate {
    Percent(u32),
    /// No non-neutral day in range.
    Unavailable,
}

impl fmt::Display for AttendanceRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceRate::Percent(p) => write!(f, "{p}%"),
            AttendanceRate::Unavailable => f.write_str("N/A"),
        }
    }
}

impl Serialize for AttendanceRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceNote {
    Attrition,
    Suspended,
    NoWorkingDays,
    Perfect,
    Excellent,
    Good,
    NeedsImprovement,
    Poor,
}

impl AttendanceNote {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceNote::Attrition => "Attrition",
            AttendanceNote::Suspended => "Suspended during period",
            AttendanceNote::NoWorkingDays => "No working days recorded",
            AttendanceNote::Perfect => "Perfect attendance",
            AttendanceNote::Excellent => "Excellent attendance",
            AttendanceNote::Good => "Good attendance",
            AttendanceNote::NeedsImprovement => "Needs improvement",
            AttendanceNote::Poor => "Poor attendance",
        }
    }
}

impl fmt::Display for AttendanceNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AttendanceNote {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One row of the attendance report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceSummary {
    pub employee_id: String,
    pub name: String,
    pub department: Option<String>,
    pub position: Option<String>,
    pub team_leader: Option<String>,
    pub counts: StatusTally,
    /// Entries whose status label is not a known code.
    pub unrecognized: u32,
    pub total_entries: u32,
    pub working_days: u32,
    pub paid_days: u32,
    pub partial_days: u32,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub total_hours: f64,
    pub rate: AttendanceRate,
    pub note: AttendanceNote,
}

/// Build one summary row per employee over `range`.
///
/// `employee_filter` restricts the output to a single employee id; an id
/// that matches nobody gives an empty report.
pub fn summarize(
    employees: &[Employee],
    entries: &[AttendanceEntry],
    range: &DateRange,
    employee_filter: Option<&str>,
) -> Vec<AttendanceSummary> {
    let by_employee = entries_in_range(entries, range);

    selected(employees, employee_filter)
        .map(|emp| {
            let own = by_employee
                .get(emp.id.as_str())
                .map(Vec::as_slice)
                .unwrap_or_default();
            summarize_one(emp, own)
        })
        .collect()
}

/// In-range entries of the selected employees, ordered by employee (input
/// order) then date. Feeds the detail sheet of the export.
pub fn detail_entries<'a>(
    employees: &'a [Employee],
    entries: &'a [AttendanceEntry],
    range: &DateRange,
    employee_filter: Option<&str>,
) -> Vec<(&'a Employee, &'a AttendanceEntry)> {
    let by_employee = entries_in_range(entries, range);

    let mut out = Vec::new();
    for emp in selected(employees, employee_filter) {
        if let Some(own) = by_employee.get(emp.id.as_str()) {
            let mut own = own.clone();
            own.sort_by_key(|e| e.day());
            out.extend(own.into_iter().map(|e| (emp, e)));
        }
    }
    out
}

fn selected<'a, 'f>(
    employees: &'a [Employee],
    employee_filter: Option<&'f str>,
) -> impl Iterator<Item = &'a Employee> {
    employees
        .iter()
        .filter(move |e| employee_filter.is_none_or(|id| e.id == id))
}

/// Entries whose date parses and falls inside `range`, keyed by employee id.
fn entries_in_range<'a>(
    entries: &'a [AttendanceEntry],
    range: &DateRange,
) -> HashMap<&'a str, Vec<&'a AttendanceEntry>> {
    let mut map: HashMap<&str, Vec<&AttendanceEntry>> = HashMap::new();
    for e in entries {
        if e.day().is_some_and(|d| range.contains(d)) {
            map.entry(e.employee_id.as_str()).or_default().push(e);
        }
    }
    map
}

fn summarize_one(emp: &Employee, entries: &[&AttendanceEntry]) -> AttendanceSummary {
    let mut counts = StatusTally::default();
    let mut unrecognized = 0u32;
    let mut working_days = 0u32;
    let mut paid_days = 0u32;
    let mut partial_days = 0u32;
    let mut regular_hours = 0.0;
    let mut overtime = 0.0;

    for e in entries {
        overtime += overtime_hours(e.overtime.as_deref());

        let class = match e.parsed_status() {
            Some(st) => {
                counts.bump(st);
                st.pay_class()
            }
            None => {
                tracing::debug!(
                    employee = %emp.id,
                    status = %e.status,
                    "unrecognized attendance status"
                );
                unrecognized += 1;
                PayClass::Unpaid
            }
        };

        regular_hours += class.hours();
        match class {
            PayClass::Full => paid_days += 1,
            PayClass::Half => partial_days += 1,
            PayClass::Neutral | PayClass::Unpaid => {}
        }
        if class != PayClass::Neutral {
            working_days += 1;
        }
    }

    let raw_rate = (working_days > 0)
        .then(|| (paid_days as f64 + 0.5 * partial_days as f64) / working_days as f64 * 100.0);

    let rate = match raw_rate {
        Some(r) => AttendanceRate::Percent(r.round() as u32),
        None => AttendanceRate::Unavailable,
    };

    let note = note_for(&counts, raw_rate, paid_days + partial_days, working_days);

    AttendanceSummary {
        employee_id: emp.id.clone(),
        name: emp.name.clone(),
        department: emp.department.clone(),
        position: emp.position.clone(),
        team_leader: emp.team_leader.clone(),
        total_entries: counts.total() + unrecognized,
        counts,
        unrecognized,
        working_days,
        paid_days,
        partial_days,
        regular_hours,
        overtime_hours: overtime,
        total_hours: regular_hours + overtime,
        rate,
        note,
    }
}

fn note_for(
    counts: &StatusTally,
    raw_rate: Option<f64>,
    attended: u32,
    working_days: u32,
) -> AttendanceNote {
    if counts.get(AttendanceStatus::Attrition) > 0 {
        return AttendanceNote::Attrition;
    }
    if counts.get(AttendanceStatus::Suspended) > 0 {
        return AttendanceNote::Suspended;
    }

    let Some(rate) = raw_rate else {
        return AttendanceNote::NoWorkingDays;
    };

    if attended == working_days {
        AttendanceNote::Perfect
    } else if rate > 90.0 {
        AttendanceNote::Excellent
    } else if rate > 75.0 {
        AttendanceNote::Good
    } else if rate > 50.0 {
        AttendanceNote::NeedsImprovement
    } else {
        AttendanceNote::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn emp(id: &str, name: &str) -> Employee {
        Employee {
            id: id.into(),
            name: name.into(),
            department: Some("Ops".into()),
            position: None,
            team_leader: None,
            avatar: None,
        }
    }

    fn entry(id: &str, date: &str, status: &str) -> AttendanceEntry {
        AttendanceEntry {
            employee_id: id.into(),
            date: Some(date.into()),
            status: status.into(),
            log_in: None,
            log_out: None,
            overtime: None,
        }
    }

    fn jan_week() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 7).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn worked_example() {
        let employees = vec![emp("E", "Eve")];
        let entries = vec![
            entry("E", "2025-01-01", "Present"),
            entry("E", "2025-01-02", "Present"),
            entry("E", "2025-01-03", "Half Day"),
            entry("E", "2025-01-04", "Rest Day"),
            entry("E", "2025-01-05", "Tardy"),
        ];

        let rows = summarize(&employees, &entries, &jan_week(), None);
        assert_eq!(rows.len(), 1);
        let r = &rows[0];

        assert_eq!(r.regular_hours, 20.0);
        assert_eq!(r.working_days, 4);
        assert_eq!(r.paid_days, 2);
        assert_eq!(r.partial_days, 1);
        assert_eq!(r.rate, AttendanceRate::Percent(63));
        assert_eq!(r.rate.to_string(), "63%");
        assert_eq!(r.note, AttendanceNote::NeedsImprovement);
        assert_eq!(r.note.to_string(), "Needs improvement");
    }

    #[test]
    fn out_of_range_and_invalid_dates_do_not_count() {
        let employees = vec![emp("E", "Eve")];
        let mut bad_date = entry("E", "not a date", "Present");
        bad_date.overtime = Some("05:00".into());
        let mut no_date = entry("E", "", "Present");
        no_date.date = None;

        let entries = vec![
            entry("E", "2024-12-31", "NCNS"),
            entry("E", "2025-01-08", "NCNS"),
            bad_date,
            no_date,
            entry("E", "2025-01-02", "Present"),
        ];

        let r = &summarize(&employees, &entries, &jan_week(), None)[0];
        assert_eq!(r.total_entries, 1);
        assert_eq!(r.counts.get(AttendanceStatus::Ncns), 0);
        assert_eq!(r.counts.get(AttendanceStatus::Present), 1);
        assert_eq!(r.overtime_hours, 0.0);
    }

    #[test]
    fn tally_sum_matches_in_range_entries() {
        let employees = vec![emp("E", "Eve")];
        let entries = vec![
            entry("E", "2025-01-01", "Present"),
            entry("E", "2025-01-02", "Sick"),
            entry("E", "2025-01-03", "call in"),
            entry("E", "2025-01-04", "VTO"),
            entry("E", "2025-01-05", "Mystery"),
        ];

        let r = &summarize(&employees, &entries, &jan_week(), None)[0];
        assert_eq!(r.unrecognized, 2);
        assert_eq!(r.counts.total() + r.unrecognized, 5);
        assert_eq!(r.total_entries, 5);
        assert_eq!(r.counts.get(AttendanceStatus::CallIn), 1);
    }

    #[test]
    fn rate_is_na_without_working_days() {
        let employees = vec![emp("E", "Eve"), emp("F", "Finn")];
        let entries = vec![
            entry("E", "2025-01-04", "Rest Day"),
            entry("E", "2025-01-05", "Rest Day"),
        ];

        let rows = summarize(&employees, &entries, &jan_week(), None);
        for r in &rows {
            assert_eq!(r.rate, AttendanceRate::Unavailable);
            assert_eq!(r.rate.to_string(), "N/A");
            assert_eq!(r.note, AttendanceNote::NoWorkingDays);
        }
    }

    #[test]
    fn present_only_hours_and_perfect_note() {
        let employees = vec![emp("E", "Eve")];
        let entries: Vec<_> = (1..=5)
            .map(|d| entry("E", &format!("2025-01-0{d}"), "Present"))
            .collect();

        let r = &summarize(&employees, &entries, &jan_week(), None)[0];
        assert_eq!(r.regular_hours, 8.0 * 5.0);
        assert_eq!(r.rate, AttendanceRate::Percent(100));
        assert_eq!(r.note, AttendanceNote::Perfect);
    }

    #[test]
    fn replacing_an_absence_with_present_never_lowers_rate() {
        let employees = vec![emp("E", "Eve")];
        let base = vec![
            entry("E", "2025-01-01", "Present"),
            entry("E", "2025-01-02", "NCNS"),
            entry("E", "2025-01-03", "Half Day"),
            entry("E", "2025-01-04", "LOA"),
            entry("E", "2025-01-05", "Tardy"),
        ];

        let pct = |entries: &[AttendanceEntry]| {
            let rows = summarize(&employees, entries, &jan_week(), None);
            match rows[0].rate {
                AttendanceRate::Percent(p) => p,
                AttendanceRate::Unavailable => 0,
            }
        };

        let before = pct(&base);
        for (i, e) in base.iter().enumerate() {
            if e.parsed_status().map(|s| s.pay_class()) == Some(PayClass::Unpaid) {
                let mut changed = base.clone();
                changed[i].status = "Present".into();
                assert!(pct(&changed) >= before);
            }
        }
    }

    #[test]
    fn override_notes_take_precedence() {
        let employees = vec![emp("E", "Eve"), emp("F", "Finn")];
        let entries = vec![
            entry("E", "2025-01-01", "Present"),
            entry("E", "2025-01-02", "Suspended"),
            entry("F", "2025-01-01", "Suspended"),
            entry("F", "2025-01-02", "Attrition"),
        ];

        let rows = summarize(&employees, &entries, &jan_week(), None);
        assert_eq!(rows[0].note, AttendanceNote::Suspended);
        assert_eq!(rows[1].note, AttendanceNote::Attrition);
    }

    #[test]
    fn threshold_notes() {
        let employees = vec![emp("E", "Eve")];
        let mk = |present: usize, absent: usize| {
            let mut v = Vec::new();
            for i in 0..present {
                v.push(entry("E", &format!("2025-01-{:02}", i + 1), "Present"));
            }
            for i in 0..absent {
                v.push(entry("E", &format!("2025-01-{:02}", present + i + 1), "NCNS"));
            }
            let range = DateRange::parse("2025-01").unwrap();
            summarize(&employees, &v, &range, None)[0].note
        };

        assert_eq!(mk(19, 1), AttendanceNote::Excellent); // 95%
        assert_eq!(mk(8, 2), AttendanceNote::Good); // 80%
        assert_eq!(mk(6, 4), AttendanceNote::NeedsImprovement); // 60%
        assert_eq!(mk(5, 5), AttendanceNote::Poor); // 50%
    }

    #[test]
    fn overtime_is_summed() {
        let employees = vec![emp("E", "Eve")];
        let mut a = entry("E", "2025-01-01", "Present");
        a.overtime = Some("01:30".into());
        let mut b = entry("E", "2025-01-02", "RDOT");
        b.overtime = Some("2:15".into());

        let r = &summarize(&employees, &[a, b], &jan_week(), None)[0];
        assert_eq!(r.overtime_hours, 3.75);
        assert_eq!(r.regular_hours, 16.0);
        assert_eq!(r.total_hours, 19.75);
    }

    #[test]
    fn employee_filter_limits_rows() {
        let employees = vec![emp("E", "Eve"), emp("F", "Finn")];
        let entries = vec![
            entry("E", "2025-01-01", "Present"),
            entry("F", "2025-01-01", "Present"),
        ];

        let rows = summarize(&employees, &entries, &jan_week(), Some("F"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Finn");

        assert!(summarize(&employees, &entries, &jan_week(), Some("Z")).is_empty());
    }

    #[test]
    fn detail_entries_are_sorted_by_employee_then_date() {
        let employees = vec![emp("E", "Eve"), emp("F", "Finn")];
        let entries = vec![
            entry("F", "2025-01-03", "Present"),
            entry("E", "2025-01-02", "Tardy"),
            entry("E", "2025-01-01", "Present"),
            entry("E", "2025-02-01", "Present"),
        ];

        let rows = detail_entries(&employees, &entries, &jan_week(), None);
        let keys: Vec<_> = rows
            .iter()
            .map(|(emp, e)| (emp.id.as_str(), e.date.as_deref().unwrap_or("")))
            .collect();
        assert_eq!(
            keys,
            vec![("E", "2025-01-01"), ("E", "2025-01-02"), ("F", "2025-01-03")]
        );
    }

    #[test]
    fn summary_serializes_counts_by_label() {
        let employees = vec![emp("E", "Eve")];
        let entries = vec![entry("E", "2025-01-01", "Half Day")];
        let r = &summarize(&employees, &entries, &jan_week(), None)[0];

        let v = serde_json::to_value(r).unwrap();
        assert_eq!(v["counts"]["Half Day"], 1);
        assert_eq!(v["counts"]["Present"], 0);
        assert_eq!(v["rate"], "50%");
        // paid + partial covers every working day
        assert_eq!(v["note"], "Perfect attendance");
    }
}
