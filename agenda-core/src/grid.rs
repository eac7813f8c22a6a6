//! Mapping between grid cells and points in time.
//!
//! A cell is the intersection of a column (axis key) and an hour row. Both
//! directions truncate to the hour: an appointment at 09:45 sits in the
//! 09:00 row, and clicking the 09:00 row always yields 09:00:00.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};

use crate::appointment::Appointment;
use crate::error::{AgendaError, AgendaResult};

/// Format used for week-view column keys.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// A single grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cell<K> {
    pub key: K,
    pub hour: u32,
}

/// Timestamp for a new appointment created from the cell at `hour` on `day`.
pub fn cell_to_date(day: NaiveDate, hour: u32) -> AgendaResult<NaiveDateTime> {
    day.and_hms_opt(hour, 0, 0)
        .ok_or(AgendaError::InvalidHour(hour))
}

/// The cell an appointment belongs to, given a column key extractor.
pub fn cell_of<K, F>(appointment: &Appointment, key_of: F) -> Option<Cell<K>>
where
    F: Fn(&Appointment) -> Option<K>,
{
    key_of(appointment).map(|key| Cell {
        key,
        hour: appointment.hour(),
    })
}

/// Day-view column key: the assigned resource.
pub fn resource_key(appointment: &Appointment) -> Option<String> {
    appointment.resource_id.clone()
}

/// Week-view column key: the local calendar day of the start time.
pub fn date_key(appointment: &Appointment) -> Option<String> {
    Some(day_key(appointment.day()))
}

pub fn day_key(day: NaiveDate) -> String {
    day.format(DAY_KEY_FORMAT).to_string()
}

pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DAY_KEY_FORMAT).ok()
}

/// The seven days of the week containing `date`, starting at `week_start`.
///
/// Fails when part of that week lies beyond the range `NaiveDate` supports.
pub fn week_days(date: NaiveDate, week_start: Weekday) -> AgendaResult<[NaiveDate; 7]> {
    let offset = (7 + date.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    let first = date
        .checked_sub_days(Days::new(offset as u64))
        .ok_or(AgendaError::DateOutOfRange(date))?;
    first
        .checked_add_days(Days::new(6))
        .ok_or(AgendaError::DateOutOfRange(date))?;

    Ok(std::array::from_fn(|i| first + Days::new(i as u64)))
}
