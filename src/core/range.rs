// src/core/range.rs

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Inclusive calendar range `[from, to]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> AppResult<Self> {
        if from > to {
            return Err(AppError::InvalidRange(format!("{from} is after {to}")));
        }
        Ok(Self { from, to })
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.from <= day && day <= self.to
    }

    /// Every day of the range, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.from.iter_days().take_while(move |d| *d <= self.to)
    }

    /// Parse a `--range` expression.
    ///
    /// Supports:
    /// - YYYY
    /// - YYYY-MM
    /// - YYYY-MM-DD
    /// - YYYY:YYYY
    /// - YYYY-MM:YYYY-MM
    /// - YYYY-MM-DD:YYYY-MM-DD
    pub fn parse(r: &str) -> AppResult<Self> {
        let r = r.trim();
        match r.split_once(':') {
            Some((start, end)) => {
                let (start, end) = (start.trim(), end.trim());
                if start.len() != end.len() {
                    return Err(bad("start and end must have same format"));
                }
                let (from, _) = period_bounds(start)?;
                let (_, to) = period_bounds(end)?;
                Self::new(from, to)
            }
            None => {
                let (from, to) = period_bounds(r)?;
                Self::new(from, to)
            }
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.from == self.to {
            write!(f, "{}", self.from)
        } else {
            write!(f, "{} to {}", self.from, self.to)
        }
    }
}

/// First and last day of a single period token.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| bad("invalid year"))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| bad("invalid year"))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| bad("invalid year"))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| bad("invalid month"))?;
            Ok((first, month_last_day(first)))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;
            Ok((d, d))
        }
        _ => Err(bad("unsupported --range format")),
    }
}

fn month_last_day(first: NaiveDate) -> NaiveDate {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(first)
}

fn bad(msg: &str) -> AppError {
    AppError::InvalidRange(msg.to_string())
}
