// src/export/json_csv.rs

use crate::core::aggregate::AttendanceSummary;
use crate::errors::AppResult;
use crate::export::model::{summary_headers, summary_to_row};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed (summary rows only).
pub(crate) fn export_json(rows: &[AttendanceSummary], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with the same columns as the summary sheet.
pub(crate) fn export_csv(rows: &[AttendanceSummary], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(summary_headers())?;
    for row in rows {
        wtr.write_record(summary_to_row(row))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
