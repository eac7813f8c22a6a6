//! Grid configuration: visible hour rows and the first day of the week.

use std::ops::RangeInclusive;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, AgendaResult};

pub const DEFAULT_START_HOUR: u32 = 7;
pub const DEFAULT_END_HOUR: u32 = 20;

/// Inclusive range of hour rows shown by a grid (07:00 to 20:00 by default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HourBounds", into = "HourBounds")]
pub struct HourRange {
    start: u32,
    end: u32,
}

/// Serialized form of `HourRange`, validated on the way in.
#[derive(Serialize, Deserialize)]
struct HourBounds {
    start_hour: u32,
    end_hour: u32,
}

impl HourRange {
    pub fn new(start: u32, end: u32) -> AgendaResult<Self> {
        if start > end || end > 23 {
            return Err(AgendaError::InvalidHourRange { start, end });
        }
        Ok(HourRange { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn contains(&self, hour: u32) -> bool {
        (self.start..=self.end).contains(&hour)
    }

    /// Hours in display order.
    pub fn iter(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    /// Always false: a valid range holds at least one hour.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for HourRange {
    fn default() -> Self {
        HourRange {
            start: DEFAULT_START_HOUR,
            end: DEFAULT_END_HOUR,
        }
    }
}

impl TryFrom<HourBounds> for HourRange {
    type Error = AgendaError;

    fn try_from(bounds: HourBounds) -> AgendaResult<Self> {
        HourRange::new(bounds.start_hour, bounds.end_hour)
    }
}

impl From<HourRange> for HourBounds {
    fn from(range: HourRange) -> Self {
        HourBounds {
            start_hour: range.start,
            end_hour: range.end,
        }
    }
}

fn default_week_start() -> Weekday {
    Weekday::Sun
}

/// Settings shared by the day and week views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// First column of the week view
    #[serde(default = "default_week_start")]
    pub week_start: Weekday,

    #[serde(default)]
    pub hours: HourRange,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            week_start: default_week_start(),
            hours: HourRange::default(),
        }
    }
}
