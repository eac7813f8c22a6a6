use agenda_core::grid::week_days;
use agenda_core::{Appointment, ClickTarget, GridView, SelectionHandler};
use anyhow::Result;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::config::AgendaConfig;
use crate::render::Render;
use crate::store;

/// Length of a new appointment unless the form changes it
const DEFAULT_DURATION_HOURS: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Day,
    Week,
}

pub struct ClickArgs {
    pub view: ViewArg,
    pub date: NaiveDate,
    pub column: String,
    pub hour: u32,
    pub entry: Option<usize>,
    pub resource: Option<String>,
}

/// New-appointment request for a clicked cell, handed to whatever form
/// creates appointments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentDraft {
    pub id: String,
    #[serde(serialize_with = "agenda_core::timestamp::serialize")]
    pub start: NaiveDateTime,
    #[serde(serialize_with = "agenda_core::timestamp::serialize")]
    pub end: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

impl AppointmentDraft {
    fn new(start: NaiveDateTime, resource_id: Option<&str>) -> Self {
        AppointmentDraft {
            id: format!("local-{}", uuid::Uuid::new_v4()),
            start,
            end: start + Duration::hours(DEFAULT_DURATION_HOURS),
            resource_id: resource_id.map(String::from),
        }
    }
}

#[derive(Debug)]
enum Picked {
    Appointment(Appointment),
    Slot(AppointmentDraft),
}

/// Keeps the last selection so it can be printed after routing.
#[derive(Default)]
struct ClickOutcome {
    picked: Option<Picked>,
}

impl SelectionHandler for ClickOutcome {
    fn appointment_selected(&mut self, appointment: &Appointment) {
        self.picked = Some(Picked::Appointment(appointment.clone()));
    }

    fn slot_selected(&mut self, start: NaiveDateTime, resource_id: Option<&str>) {
        self.picked = Some(Picked::Slot(AppointmentDraft::new(start, resource_id)));
    }
}

pub async fn run(config: &AgendaConfig, args: ClickArgs) -> Result<()> {
    let (first, last) = match args.view {
        ViewArg::Day => (args.date, args.date),
        ViewArg::Week => {
            let days = week_days(args.date, config.grid.week_start)?;
            (days[0], days[6])
        }
    };

    let appointments = store::load_appointments(&config.appointments_path()).await?;
    let appointments = store::appointments_between(appointments, first, last);
    let resources = match args.view {
        ViewArg::Day => store::load_resources(&config.resources_path()).await?,
        ViewArg::Week => Vec::new(),
    };

    let view = match args.view {
        ViewArg::Day => GridView::day(args.date, &appointments, &resources, args.resource.as_deref(), &config.grid),
        ViewArg::Week => GridView::week(args.date, &appointments, &config.grid)?,
    };

    match route(&view, &args)? {
        Picked::Appointment(appointment) => println!("{}", appointment.render()),
        Picked::Slot(draft) => {
            println!("{}", "New appointment".green());
            println!("{}", serde_json::to_string_pretty(&draft)?);
        }
    }

    Ok(())
}

fn route(view: &GridView<'_>, args: &ClickArgs) -> Result<Picked> {
    let target = args.entry.map_or(ClickTarget::Cell, ClickTarget::Entry);

    let mut outcome = ClickOutcome::default();
    view.click(&args.column, args.hour, target, &mut outcome)?;

    outcome
        .picked
        .ok_or_else(|| anyhow::anyhow!("Click on '{}' at {:02}:00 selected nothing", args.column, args.hour))
}
