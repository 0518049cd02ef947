use super::deserialize_id;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
    Other(String),
}

impl TicketStatus {
    pub fn from_wire(s: &str) -> Self {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "open" => TicketStatus::Open,
            "in progress" => TicketStatus::InProgress,
            "resolved" => TicketStatus::Resolved,
            "closed" => TicketStatus::Closed,
            _ => TicketStatus::Other(s.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in progress",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
            TicketStatus::Other(s) => s,
        }
    }
}

impl TicketPriority {
    pub fn from_wire(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => TicketPriority::Low,
            "medium" | "normal" => TicketPriority::Medium,
            "high" => TicketPriority::High,
            "urgent" | "critical" => TicketPriority::Urgent,
            _ => TicketPriority::Other(s.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Medium => "medium",
            TicketPriority::High => "high",
            TicketPriority::Urgent => "urgent",
            TicketPriority::Other(s) => s,
        }
    }
}

macro_rules! string_enum_serde {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                // null reads as an empty, unrecognized value
                let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
                Ok(<$ty>::from_wire(&raw))
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                <$ty>::Other(String::new())
            }
        }
    };
}

string_enum_serde!(TicketStatus);
string_enum_serde!(TicketPriority);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(deserialize_with = "deserialize_id", alias = "_id", alias = "ticketId")]
    pub id: String,
    #[serde(default)]
    pub requester: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub priority: TicketPriority,
    #[serde(default)]
    pub status: TicketStatus,
    #[serde(default, alias = "title")]
    pub subject: String,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, alias = "updatedAt")]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
}
