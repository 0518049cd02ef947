// src/export/logic.rs

use crate::core::aggregate::{AttendanceSummary, detail_entries, summarize};
use crate::core::range::DateRange;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::file_name::export_file_name;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{DETAIL_HEADERS, detail_to_row, summary_headers, summary_to_row};
use crate::export::xlsx::{Sheet, export_xlsx};
use crate::models::{AttendanceEntry, Employee};
use crate::ui::messages::warning;
use std::fs;
use std::path::{Path, PathBuf};

/// What to export and where.
pub struct ExportRequest<'a> {
    pub range: DateRange,
    /// Restrict to one employee id.
    pub employee: Option<&'a str>,
    pub format: ExportFormat,
    pub dir: &'a Path,
    pub force: bool,
}

/// High-level export: aggregate, pick a file name, write.
pub struct ExportLogic;

impl ExportLogic {
    /// Returns the path of the written file.
    pub fn export(
        req: &ExportRequest<'_>,
        employees: &[Employee],
        entries: &[AttendanceEntry],
    ) -> AppResult<PathBuf> {
        let summaries = summarize(employees, entries, &req.range, req.employee);

        if summaries.is_empty() {
            warning("No employees matched the selection, writing an empty report.");
        }

        let employee_name = req
            .employee
            .and_then(|id| employees.iter().find(|e| e.id == id))
            .map(|e| e.name.as_str());

        fs::create_dir_all(req.dir)?;
        let path = req
            .dir
            .join(export_file_name(&req.range, employee_name, req.format));

        ensure_writable(&path, req.force)?;

        tracing::debug!(
            path = %path.display(),
            rows = summaries.len(),
            format = req.format.as_str(),
            "writing attendance export"
        );

        match req.format {
            ExportFormat::Xlsx => {
                let details = detail_entries(employees, entries, &req.range, req.employee);
                write_workbook(&summaries, &details, &path)?
            }
            ExportFormat::Csv => export_csv(&summaries, &path)?,
            ExportFormat::Json => export_json(&summaries, &path)?,
        }

        Ok(path)
    }
}

fn write_workbook(
    summaries: &[AttendanceSummary],
    details: &[(&Employee, &AttendanceEntry)],
    path: &Path,
) -> AppResult<()> {
    let summary_rows: Vec<Vec<String>> = summaries.iter().map(summary_to_row).collect();
    let detail_rows: Vec<Vec<String>> = details
        .iter()
        .map(|(emp, e)| detail_to_row(emp, e))
        .collect();
    let headers = summary_headers();

    export_xlsx(
        &[
            Sheet {
                name: "Summary",
                headers: &headers,
                rows: &summary_rows,
            },
            Sheet {
                name: "Details",
                headers: &DETAIL_HEADERS,
                rows: &detail_rows,
            },
        ],
        path,
    )
}
