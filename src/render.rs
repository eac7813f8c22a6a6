//! TUI rendering for agenda grids.
//!
//! Extension traits that draw agenda-core types as colored terminal text
//! using owo_colors.

use agenda_core::{Appointment, Column, GridView, ViewKind};
use owo_colors::OwoColorize;

/// Width of the hour label gutter ("09:00 ")
const GUTTER_WIDTH: usize = 6;

/// Width of one grid column
const COLUMN_WIDTH: usize = 22;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for GridView<'_> {
    fn render(&self) -> String {
        let mut lines = vec![self.title().bold().to_string()];

        let mut header = " ".repeat(GUTTER_WIDTH);
        for column in self.columns() {
            header.push_str(&render_column_header(self, column));
        }
        lines.push(header);
        lines.push(separator(self.columns().len()));

        for hour in self.hours().iter() {
            let slots: Vec<_> = self.columns().iter().map(|c| self.slot(&c.key, hour)).collect();
            let height = slots.iter().map(|s| s.len()).max().unwrap_or(0).max(1);

            for row in 0..height {
                let mut line = if row == 0 {
                    format!("{:02}:00 ", hour).dimmed().to_string()
                } else {
                    " ".repeat(GUTTER_WIDTH)
                };

                for slot in &slots {
                    match slot.get(row) {
                        Some(appointment) => line.push_str(&render_entry(appointment, self.kind())),
                        None => line.push_str(&" ".repeat(COLUMN_WIDTH)),
                    }
                }
                lines.push(line.trim_end().to_string());
            }
            lines.push(separator(self.columns().len()));
        }

        lines.join("\n")
    }
}

impl Render for Appointment {
    fn render(&self) -> String {
        let mut lines = vec![
            format!("{} {}", self.time_label().bold(), self.client_name),
            format!("  {} {}", "id:".dimmed(), self.id),
        ];
        if let Some(service) = &self.service {
            lines.push(format!("  {} {}", "service:".dimmed(), service.name));
        }
        match (&self.resource, &self.resource_id) {
            (Some(resource), _) => lines.push(format!("  {} {}", "with:".dimmed(), resource.name)),
            (None, Some(id)) => lines.push(format!("  {} {}", "with:".dimmed(), id)),
            (None, None) => lines.push(format!("  {}", "unassigned".dimmed())),
        }
        lines.join("\n")
    }
}

fn render_column_header(view: &GridView<'_>, column: &Column<'_>) -> String {
    let label = fit(&column.label(), COLUMN_WIDTH);

    if view.is_today(column) {
        return label.bold().underline().to_string();
    }
    match column.color().and_then(parse_hex_color) {
        Some((r, g, b)) => label.truecolor(r, g, b).bold().to_string(),
        None => label.bold().to_string(),
    }
}

/// One line per appointment: the full time range in the day view, the
/// compact start time in the narrower week view.
fn render_entry(appointment: &Appointment, kind: ViewKind) -> String {
    let text = match kind {
        ViewKind::Day => format!("{} {}", appointment.time_label(), appointment.client_name),
        ViewKind::Week => appointment.compact_label(),
    };
    let text = fit(&text, COLUMN_WIDTH);

    match parse_hex_color(appointment.color()) {
        Some((r, g, b)) => text.truecolor(r, g, b).to_string(),
        None => text,
    }
}

fn separator(columns: usize) -> String {
    "─".repeat(GUTTER_WIDTH + columns * COLUMN_WIDTH).dimmed().to_string()
}

/// Truncate or pad `text` to exactly `width` characters, keeping one
/// trailing space as a gutter between columns.
fn fit(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width - 1).collect();
    format!("{:<width$}", truncated, width = width)
}

/// Parse "#RRGGBB" into its components.
fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
