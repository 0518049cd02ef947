use crate::AppContext;
use crate::cli::commands::data::load_attendance;
use crate::cli::parser::Commands;
use crate::core::aggregate::{AttendanceNote, AttendanceSummary, summarize};
use crate::core::range::DateRange;
use crate::errors::AppResult;
use crate::export::model::format_hours;
use crate::models::AttendanceStatus;
use crate::ui::messages::{header, warning};
use crate::ui::table::{Column, Table};
use ansi_term::Colour;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Summary {
        range,
        employee,
        input,
    } = cmd
    {
        let range = DateRange::parse(range)?;
        let (employees, entries) =
            load_attendance(ctx, &range, employee.as_deref(), input.as_deref())?;

        let rows = summarize(&employees, &entries, &range, employee.as_deref());

        if rows.is_empty() {
            warning("No employees matched the selection.");
            return Ok(());
        }

        header(format!("Attendance summary {range}"));
        print!("{}", render(&rows));
    }
    Ok(())
}

pub(crate) fn render(rows: &[AttendanceSummary]) -> String {
    let mut table = Table::new(vec![
        Column::left("ID"),
        Column::left("Name"),
        Column::left("Department"),
        Column::left("Statuses"),
        Column::right("Days"),
        Column::right("Reg h"),
        Column::right("OT h"),
        Column::right("Rate"),
        Column::left("Note"),
    ]);

    for r in rows {
        table.add_row(vec![
            r.employee_id.clone(),
            r.name.clone(),
            r.department.clone().unwrap_or_else(|| "-".into()),
            status_breakdown(r),
            r.working_days.to_string(),
            format_hours(r.regular_hours),
            format_hours(r.overtime_hours),
            r.rate.to_string(),
            note_colour(r.note).paint(r.note.as_str()).to_string(),
        ]);
    }

    table.render()
}

/// Non-zero status counts, e.g. `Present 2, Half Day 1`.
fn status_breakdown(r: &AttendanceSummary) -> String {
    let mut parts: Vec<String> = AttendanceStatus::ALL
        .iter()
        .filter(|st| r.counts.get(**st) > 0)
        .map(|st| format!("{} {}", st.label(), r.counts.get(*st)))
        .collect();
    if r.unrecognized > 0 {
        parts.push(format!("other {}", r.unrecognized));
    }
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(", ")
    }
}

fn note_colour(note: AttendanceNote) -> Colour {
    match note {
        AttendanceNote::Perfect | AttendanceNote::Excellent => Colour::Green,
        AttendanceNote::Good => Colour::Cyan,
        AttendanceNote::NeedsImprovement => Colour::Yellow,
        AttendanceNote::Poor | AttendanceNote::Suspended | AttendanceNote::Attrition => Colour::Red,
        AttendanceNote::NoWorkingDays => Colour::White,
    }
}
