use serde::Serialize;
use std::fmt;

/// Attendance status codes used by the site.
///
/// This is a closed set: the pay rules below are an exhaustive `match`, so
/// adding a variant forces a decision about how it is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AttendanceStatus {
    Present,
    Pto,
    Loa,
    HalfDay,
    Rdot,
    Vto,
    Tardy,
    Ncns,
    Suspended,
    Attrition,
    EarlyLogOut,
    Tb,
    RestDay,
    CallIn,
}

/// How a status day is paid and whether it counts toward the working-day
/// total used by the attendance rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayClass {
    /// 8h, counts as a paid day.
    Full,
    /// 4h, counts as a partial day.
    Half,
    /// 0h, excluded from the working-day total.
    Neutral,
    /// 0h, counts toward the working-day total only.
    Unpaid,
}

impl PayClass {
    pub fn hours(self) -> f64 {
        match self {
            PayClass::Full => 8.0,
            PayClass::Half => 4.0,
            PayClass::Neutral | PayClass::Unpaid => 0.0,
        }
    }
}

impl AttendanceStatus {
    /// Column order used by summaries and exports.
    pub const ALL: [AttendanceStatus; 14] = [
        AttendanceStatus::Present,
        AttendanceStatus::Pto,
        AttendanceStatus::Loa,
        AttendanceStatus::HalfDay,
        AttendanceStatus::Rdot,
        AttendanceStatus::Vto,
        AttendanceStatus::Tardy,
        AttendanceStatus::Ncns,
        AttendanceStatus::Suspended,
        AttendanceStatus::Attrition,
        AttendanceStatus::EarlyLogOut,
        AttendanceStatus::Tb,
        AttendanceStatus::RestDay,
        AttendanceStatus::CallIn,
    ];

    /// Label as sent by the API and shown in headers.
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Pto => "PTO",
            AttendanceStatus::Loa => "LOA",
            AttendanceStatus::HalfDay => "Half Day",
            AttendanceStatus::Rdot => "RDOT",
            AttendanceStatus::Vto => "VTO",
            AttendanceStatus::Tardy => "Tardy",
            AttendanceStatus::Ncns => "NCNS",
            AttendanceStatus::Suspended => "Suspended",
            AttendanceStatus::Attrition => "Attrition",
            AttendanceStatus::EarlyLogOut => "Early Log Out",
            AttendanceStatus::Tb => "TB",
            AttendanceStatus::RestDay => "Rest Day",
            AttendanceStatus::CallIn => "Call In",
        }
    }

    /// Parse a wire label. Case and surrounding whitespace are ignored.
    /// Unknown labels return `None`, never an error.
    pub fn from_label(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|st| st.label().eq_ignore_ascii_case(wanted))
    }

    pub fn pay_class(&self) -> PayClass {
        match self {
            AttendanceStatus::Present
            | AttendanceStatus::Rdot
            | AttendanceStatus::Pto
            | AttendanceStatus::CallIn => PayClass::Full,

            AttendanceStatus::HalfDay | AttendanceStatus::EarlyLogOut => PayClass::Half,

            AttendanceStatus::RestDay => PayClass::Neutral,

            AttendanceStatus::Loa
            | AttendanceStatus::Vto
            | AttendanceStatus::Tardy
            | AttendanceStatus::Ncns
            | AttendanceStatus::Suspended
            | AttendanceStatus::Attrition
            | AttendanceStatus::Tb => PayClass::Unpaid,
        }
    }

    /// Position inside [`AttendanceStatus::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
