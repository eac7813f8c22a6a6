use agenda_core::GridView;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use owo_colors::OwoColorize;

use crate::config::AgendaConfig;
use crate::render::Render;
use crate::store;

pub async fn run(config: &AgendaConfig, date: NaiveDate, resource: Option<String>) -> Result<()> {
    let resources = store::load_resources(&config.resources_path()).await?;
    let appointments = store::load_appointments(&config.appointments_path()).await?;
    let appointments = store::appointments_between(appointments, date, date);

    let view = GridView::day(date, &appointments, &resources, resource.as_deref(), &config.grid)
        .with_today(Local::now().date_naive());

    if view.columns().is_empty() {
        match resource {
            Some(id) => println!("{}", format!("No active resource with id '{}'", id).dimmed()),
            None => println!("{}", "No active resources".dimmed()),
        }
        return Ok(());
    }

    println!("{}", view.render());
    super::print_unplaced(&view);

    Ok(())
}
