// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::excel_date::parse_to_excel_date;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use regex::Regex;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

pub(crate) const MIN_COL_WIDTH: usize = 10;
pub(crate) const MAX_COL_WIDTH: usize = 30;

static PLAIN_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d{1,15}(\.\d+)?$").expect("static decimal pattern"));

/// A named table destined for one worksheet.
pub(crate) struct Sheet<'a> {
    pub name: &'a str,
    pub headers: &'a [&'a str],
    pub rows: &'a [Vec<String>],
}

/// Write every sheet into one workbook, with styled header, banded rows and
/// column widths fitted to content.
pub(crate) fn export_xlsx(sheets: &[Sheet<'_>], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name)?;
        write_sheet(worksheet, sheet)?;
    }

    workbook.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &Sheet<'_>) -> AppResult<()> {
    // ---------------------------
    // Empty dataset
    // ---------------------------
    if sheet.rows.is_empty() {
        worksheet.write(0, 0, "No data available")?;
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in sheet.headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    // ---------------------------
    // Rows
    // ---------------------------
    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, values) in sheet.rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in values.iter().enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, value, band_color)?;
        }
    }

    // ---------------------------
    // Column widths
    // ---------------------------
    for (c, w) in column_widths(sheet.headers, sheet.rows).iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64)?;
    }

    Ok(())
}

/// Longest header/cell text per column, clamped to `[MIN_COL_WIDTH, MAX_COL_WIDTH]`.
pub(crate) fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            let w = UnicodeWidthStr::width(cell.as_str());
            match widths.get_mut(col) {
                Some(current) => *current = (*current).max(w),
                None => widths.push(w),
            }
        }
    }

    widths
        .into_iter()
        .map(|w| w.clamp(MIN_COL_WIDTH, MAX_COL_WIDTH))
        .collect()
}

/// Write one cell, storing dates and numbers with their native Excel type.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if let Some((num_format, serial)) = parse_to_excel_date(s) {
        worksheet.write_with_format(row, col, serial, &base.set_num_format(num_format))?;
        return Ok(());
    }

    if let Some(num) = numeric_cell(s) {
        worksheet.write_with_format(row, col, num, &base.set_align(FormatAlign::Right))?;
        return Ok(());
    }

    worksheet.write_with_format(row, col, s, &base)?;
    Ok(())
}

/// Plain decimals only. Words such as "Nan" or "Inf", exponent forms and
/// identifiers such as "007" stay text.
fn numeric_cell(s: &str) -> Option<f64> {
    let digits = s.trim_start_matches('-');
    if digits.len() > 1 && digits.starts_with('0') && !digits.starts_with("0.") {
        return None;
    }
    if !PLAIN_DECIMAL.is_match(s) {
        return None;
    }
    s.parse::<f64>().ok()
}
