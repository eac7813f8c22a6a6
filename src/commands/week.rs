use agenda_core::grid::week_days;
use agenda_core::GridView;
use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::config::AgendaConfig;
use crate::render::Render;
use crate::store;

pub async fn run(config: &AgendaConfig, date: NaiveDate) -> Result<()> {
    let days = week_days(date, config.grid.week_start)?;
    let appointments = store::load_appointments(&config.appointments_path()).await?;
    let appointments = store::appointments_between(appointments, days[0], days[6]);

    let view = GridView::week(date, &appointments, &config.grid)?.with_today(Local::now().date_naive());

    println!("{}", view.render());
    super::print_unplaced(&view);

    Ok(())
}
