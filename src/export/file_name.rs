// src/export/file_name.rs

use crate::core::range::DateRange;
use crate::export::ExportFormat;
use regex::Regex;
use std::sync::LazyLock;

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9-]+").expect("static file name pattern"));

/// `attendance_<from>_to_<to>[_<employee>].<ext>`
pub fn export_file_name(range: &DateRange, employee_name: Option<&str>, format: ExportFormat) -> String {
    let mut name = format!("attendance_{}_to_{}", range.from, range.to);

    if let Some(emp) = employee_name {
        let cleaned = UNSAFE_CHARS.replace_all(emp.trim(), "_");
        let cleaned = cleaned.trim_matches('_');
        if !cleaned.is_empty() {
            name.push('_');
            name.push_str(cleaned);
        }
    }

    format!("{name}.{}", format.as_str())
}
