pub mod click;
pub mod config;
pub mod day;
pub mod week;

use agenda_core::GridView;
use owo_colors::OwoColorize;

/// Note appointments that were loaded for the visible dates but have no
/// cell (unassigned, or starting outside the visible hours).
fn print_unplaced(view: &GridView<'_>) {
    let unplaced = view.index().unplaced();
    if unplaced.is_empty() {
        return;
    }

    let label = if unplaced.len() == 1 { "appointment" } else { "appointments" };
    println!(
        "\n{}",
        format!("{} {} outside the grid", unplaced.len(), label).dimmed()
    );
    for entry in unplaced {
        println!(
            "  {} {} {}",
            entry.appointment.start.format("%a %H:%M").dimmed(),
            entry.appointment.client_name,
            format!("({:?})", entry.reason).dimmed()
        );
    }
}
