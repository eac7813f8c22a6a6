use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::config::AgendaConfig;

pub fn run(config: &AgendaConfig) -> Result<()> {
    let config_path = AgendaConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:        {}", config_path.display());
    println!("  Resources:     {}", config.resources_path().display());
    println!("  Appointments:  {}", config.appointments_path().display());

    println!("\n{}", "Effective settings".bold());
    let rendered = toml::to_string_pretty(config).context("Failed to serialize config")?;
    for line in rendered.lines() {
        println!("  {}", line);
    }

    Ok(())
}
