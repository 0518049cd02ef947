use super::{deserialize_id, non_blank};
use crate::models::attendance::parse_entry_date;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftType {
    Morning,
    Afternoon,
    Night,
    Off,
    /// Site-specific shift code, kept verbatim.
    Site(String),
}

impl ShiftType {
    pub fn from_code(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "morning" | "am" => ShiftType::Morning,
            "afternoon" | "pm" => ShiftType::Afternoon,
            "night" | "graveyard" => ShiftType::Night,
            "off" | "rest" | "rest day" => ShiftType::Off,
            _ => ShiftType::Site(s.trim().to_string()),
        }
    }

    /// Short code used in the schedule grid.
    pub fn grid_code(&self) -> &str {
        match self {
            ShiftType::Morning => "M",
            ShiftType::Afternoon => "A",
            ShiftType::Night => "N",
            ShiftType::Off => "OFF",
            ShiftType::Site(code) => code,
        }
    }

    fn wire(&self) -> &str {
        match self {
            ShiftType::Morning => "morning",
            ShiftType::Afternoon => "afternoon",
            ShiftType::Night => "night",
            ShiftType::Off => "off",
            ShiftType::Site(code) => code,
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}

impl Serialize for ShiftType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire())
    }
}

impl<'de> Deserialize<'de> for ShiftType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ShiftType::from_code(&raw))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[serde(deserialize_with = "deserialize_id", alias = "employeeId")]
    pub employee_id: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(alias = "shiftType")]
    pub shift: ShiftType,
}

impl ScheduleEntry {
    pub fn day(&self) -> Option<NaiveDate> {
        non_blank(self.date.as_deref()).and_then(parse_entry_date)
    }
}
