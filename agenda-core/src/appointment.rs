//! Appointment records as handed over by the appointment provider.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Fallback tile color when the assigned resource has none.
pub const DEFAULT_COLOR: &str = "#FF6B00";

/// A booked appointment. Times are local wall-clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    #[serde(alias = "start_time", with = "crate::timestamp")]
    pub start: NaiveDateTime,
    #[serde(alias = "end_time", with = "crate::timestamp")]
    pub end: NaiveDateTime,
    /// Unassigned appointments have no column in the day view
    #[serde(default, alias = "barber_id", skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    pub client_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceSummary>,
    #[serde(default, alias = "barber", skip_serializing_if = "Option::is_none")]
    pub resource: Option<ResourceSummary>,
}

/// Display-only summary of the booked service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub name: String,
}

/// Display-only summary of the assigned resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSummary {
    pub name: String,
    #[serde(default, alias = "calendar_color", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Appointment {
    /// Hour row this appointment lands in. Minutes are ignored.
    pub fn hour(&self) -> u32 {
        self.start.hour()
    }

    /// Calendar day of the start time.
    pub fn day(&self) -> NaiveDate {
        self.start.date()
    }

    /// "09:30 - 10:15"
    pub fn time_label(&self) -> String {
        format!("{} - {}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }

    /// "09:30 Maria", used where a column is too narrow for the full tile.
    pub fn compact_label(&self) -> String {
        format!("{} {}", self.start.format("%H:%M"), self.client_name)
    }

    pub fn color(&self) -> &str {
        self.resource
            .as_ref()
            .and_then(|r| r.color.as_deref())
            .unwrap_or(DEFAULT_COLOR)
    }
}
