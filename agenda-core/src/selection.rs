//! Click routing from a grid to whoever opens forms or navigates.

use chrono::NaiveDateTime;

use crate::appointment::Appointment;

/// Receiver of grid clicks. Called synchronously; nothing is awaited.
pub trait SelectionHandler {
    /// An existing appointment tile was clicked.
    fn appointment_selected(&mut self, appointment: &Appointment);

    /// A cell was clicked: request a new appointment starting at `start`.
    /// `resource_id` is set only when the column is a resource.
    fn slot_selected(&mut self, start: NaiveDateTime, resource_id: Option<&str>);
}

/// What part of a cell was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Free space in the cell
    Cell,
    /// The n-th appointment tile in the cell (0-based)
    Entry(usize),
}

/// A [`SelectionHandler`] built from two closures.
pub struct Callbacks<A, S> {
    on_appointment: A,
    on_slot: S,
}

impl<A, S> Callbacks<A, S>
where
    A: FnMut(&Appointment),
    S: FnMut(NaiveDateTime, Option<&str>),
{
    pub fn new(on_appointment: A, on_slot: S) -> Self {
        Callbacks {
            on_appointment,
            on_slot,
        }
    }
}

impl<A, S> SelectionHandler for Callbacks<A, S>
where
    A: FnMut(&Appointment),
    S: FnMut(NaiveDateTime, Option<&str>),
{
    fn appointment_selected(&mut self, appointment: &Appointment) {
        (self.on_appointment)(appointment)
    }

    fn slot_selected(&mut self, start: NaiveDateTime, resource_id: Option<&str>) {
        (self.on_slot)(start, resource_id)
    }
}
