//! Read resource and appointment exports from the data directory.

use std::path::Path;

use agenda_core::{Appointment, Resource};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tracing::debug;

pub async fn load_resources(path: &Path) -> Result<Vec<Resource>> {
    let resources: Vec<Resource> = read_json(path, "resources").await?;
    debug!(count = resources.len(), path = %path.display(), "loaded resources");
    Ok(resources)
}

/// Load all appointments. A record with an unparsable timestamp fails the
/// whole load.
pub async fn load_appointments(path: &Path) -> Result<Vec<Appointment>> {
    let appointments: Vec<Appointment> = read_json(path, "appointments").await?;
    debug!(count = appointments.len(), path = %path.display(), "loaded appointments");
    Ok(appointments)
}

async fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    if !path.exists() {
        anyhow::bail!(
            "No {} file found at {}\n\n\
            Export your {} as a JSON array there, or point `data_dir` in\n\
            the config at the directory that holds them.",
            what,
            path.display(),
            what
        );
    }

    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {} file at {}", what, path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {} file at {}", what, path.display()))
}

/// Appointments starting between `first` and `last` (inclusive), sorted by
/// start time so each slot lists them chronologically.
pub fn appointments_between(mut appointments: Vec<Appointment>, first: NaiveDate, last: NaiveDate) -> Vec<Appointment> {
    appointments.retain(|a| (first..=last).contains(&a.day()));
    appointments.sort_by_key(|a| a.start);
    appointments
}
