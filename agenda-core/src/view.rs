//! Day and week views: columns, slots and click routing.
//!
//! Both views are projections of the same appointment list onto one column
//! axis. The day view has one column per active resource, all on the current
//! date. The week view has one column per day of the current week and no
//! resource axis.

use chrono::NaiveDate;
use tracing::debug;

use crate::appointment::Appointment;
use crate::config::{GridConfig, HourRange};
use crate::error::{AgendaError, AgendaResult};
use crate::grid::{cell_to_date, date_key, day_key, resource_key, week_days};
use crate::resource::{filter_resources, Resource};
use crate::selection::{ClickTarget, SelectionHandler};
use crate::slot_index::{build_index, SlotIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Day,
    Week,
}

/// One column of a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<'a> {
    /// Slot index key: resource id or `yyyy-MM-dd`
    pub key: String,
    /// Date that cells in this column map back to
    pub date: NaiveDate,
    /// Set in the day view only
    pub resource: Option<&'a Resource>,
}

impl Column<'_> {
    pub fn label(&self) -> String {
        match self.resource {
            Some(resource) => resource.name.clone(),
            None => self.date.format("%a %-d").to_string(),
        }
    }

    pub fn color(&self) -> Option<&str> {
        self.resource.and_then(|r| r.color.as_deref())
    }
}

pub struct GridView<'a> {
    kind: ViewKind,
    current_date: NaiveDate,
    today: Option<NaiveDate>,
    columns: Vec<Column<'a>>,
    index: SlotIndex<'a, String>,
}

impl<'a> GridView<'a> {
    /// Resource columns for `current_date`.
    ///
    /// Slots are keyed by resource only, so appointments starting on any
    /// other date get no column and show up in [`SlotIndex::unplaced`].
    pub fn day(
        current_date: NaiveDate,
        appointments: &'a [Appointment],
        resources: &'a [Resource],
        selected_resource: Option<&str>,
        config: &GridConfig,
    ) -> Self {
        let columns: Vec<Column<'a>> = filter_resources(resources, selected_resource)
            .into_iter()
            .map(|resource| Column {
                key: resource.id.clone(),
                date: current_date,
                resource: Some(resource),
            })
            .collect();

        let key_of = |appointment: &Appointment| {
            if appointment.day() == current_date {
                resource_key(appointment)
            } else {
                None
            }
        };

        Self::assemble(ViewKind::Day, current_date, columns, appointments, config.hours, key_of)
    }

    /// Day columns for the week containing `current_date`.
    pub fn week(current_date: NaiveDate, appointments: &'a [Appointment], config: &GridConfig) -> AgendaResult<Self> {
        let columns: Vec<Column<'a>> = week_days(current_date, config.week_start)?
            .into_iter()
            .map(|date| Column {
                key: day_key(date),
                date,
                resource: None,
            })
            .collect();

        Ok(Self::assemble(ViewKind::Week, current_date, columns, appointments, config.hours, date_key))
    }

    fn assemble<F>(
        kind: ViewKind,
        current_date: NaiveDate,
        columns: Vec<Column<'a>>,
        appointments: &'a [Appointment],
        hours: HourRange,
        key_of: F,
    ) -> Self
    where
        F: Fn(&Appointment) -> Option<String>,
    {
        let keys: Vec<String> = columns.iter().map(|c| c.key.clone()).collect();
        let index = build_index(appointments, &keys, hours, key_of);

        GridView {
            kind,
            current_date,
            today: None,
            columns,
            index,
        }
    }

    /// Mark columns falling on `today` for highlighting.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn columns(&self) -> &[Column<'a>] {
        &self.columns
    }

    pub fn hours(&self) -> HourRange {
        self.index.hours()
    }

    pub fn index(&self) -> &SlotIndex<'a, String> {
        &self.index
    }

    pub fn slot(&self, column: &str, hour: u32) -> &[&'a Appointment] {
        self.index.get(column, hour)
    }

    pub fn is_today(&self, column: &Column<'_>) -> bool {
        self.today == Some(column.date)
    }

    /// Heading above the grid, e.g. "Wednesday 1" or "28 Apr - 4 May".
    pub fn title(&self) -> String {
        match self.kind {
            ViewKind::Day => self.current_date.format("%A %-d").to_string(),
            ViewKind::Week => {
                let days = week_days_of(&self.columns);
                match days {
                    Some((first, last)) => format!("{} - {}", first.format("%-d %b"), last.format("%-d %b")),
                    None => String::new(),
                }
            }
        }
    }

    /// Route a click on (`column`, `hour`) to `handler`.
    ///
    /// A click on free space asks for a new appointment at the top of the
    /// hour; the day view passes the column's resource id along. A click on
    /// a tile selects that appointment.
    pub fn click<H>(&self, column: &str, hour: u32, target: ClickTarget, handler: &mut H) -> AgendaResult<()>
    where
        H: SelectionHandler + ?Sized,
    {
        let no_slot = || AgendaError::NoSuchSlot {
            column: column.to_string(),
            hour,
        };

        let col = self.columns.iter().find(|c| c.key == column).ok_or_else(no_slot)?;
        if !self.hours().contains(hour) {
            return Err(no_slot());
        }

        match target {
            ClickTarget::Cell => {
                let start = cell_to_date(col.date, hour)?;
                let resource_id = col.resource.map(|r| r.id.as_str());
                debug!(%start, ?resource_id, "slot selected");
                handler.slot_selected(start, resource_id);
            }
            ClickTarget::Entry(position) => {
                let appointment = self
                    .slot(column, hour)
                    .get(position)
                    .ok_or_else(|| AgendaError::NoSuchEntry {
                        column: column.to_string(),
                        hour,
                        position,
                    })?;
                debug!(id = %appointment.id, "appointment selected");
                handler.appointment_selected(appointment);
            }
        }

        Ok(())
    }
}

fn week_days_of(columns: &[Column<'_>]) -> Option<(NaiveDate, NaiveDate)> {
    Some((columns.first()?.date, columns.last()?.date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Callbacks;
    use crate::slot_index::Exclusion;
    use chrono::{Datelike, Duration, NaiveDateTime, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        date(2024, 5, day).and_hms_opt(h, m, 0).unwrap()
    }

    fn resource(id: &str, active: bool) -> Resource {
        Resource {
            id: id.to_string(),
            name: format!("Barber {id}"),
            active,
            color: Some("#00AAFF".to_string()),
        }
    }

    fn appointment(id: &str, start: NaiveDateTime, resource_id: Option<&str>) -> Appointment {
        Appointment {
            id: id.to_string(),
            start,
            end: start + Duration::hours(1),
            resource_id: resource_id.map(String::from),
            client_name: format!("client-{id}"),
            service: None,
            resource: None,
        }
    }

    /// Records every callback so tests can assert on them.
    #[derive(Default)]
    struct Recorder {
        appointments: Vec<String>,
        slots: Vec<(NaiveDateTime, Option<String>)>,
    }

    impl SelectionHandler for Recorder {
        fn appointment_selected(&mut self, appointment: &Appointment) {
            self.appointments.push(appointment.id.clone());
        }

        fn slot_selected(&mut self, start: NaiveDateTime, resource_id: Option<&str>) {
            self.slots.push((start, resource_id.map(String::from)));
        }
    }

    #[test]
    fn test_day_view_columns_are_active_resources() {
        let resources = vec![resource("b1", true), resource("b2", false), resource("b3", true)];
        let view = GridView::day(date(2024, 5, 1), &[], &resources, None, &GridConfig::default());

        let keys: Vec<_> = view.columns().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["b1", "b3"]);
        assert_eq!(view.columns()[0].label(), "Barber b1");
        assert_eq!(view.columns()[0].color(), Some("#00AAFF"));
        assert_eq!(view.index().bucket_count(), 2 * 14);
    }

    #[test]
    fn test_day_view_selected_resource_narrows_columns() {
        let resources = vec![resource("b1", true), resource("b2", true)];
        let appointments = vec![
            appointment("a1", at(1, 9, 30), Some("b1")),
            appointment("a2", at(1, 9, 0), Some("b2")),
        ];
        let view = GridView::day(date(2024, 5, 1), &appointments, &resources, Some("b2"), &GridConfig::default());

        assert_eq!(view.columns().len(), 1);
        assert_eq!(view.slot("b2", 9).len(), 1);
        assert!(view.slot("b1", 9).is_empty());
        assert_eq!(view.index().unplaced().len(), 1);
    }

    #[test]
    fn test_day_view_leaves_out_other_dates() {
        let resources = vec![resource("b1", true)];
        let appointments = vec![
            appointment("today", at(1, 9, 0), Some("b1")),
            appointment("tomorrow", at(2, 9, 0), Some("b1")),
        ];
        let view = GridView::day(date(2024, 5, 1), &appointments, &resources, None, &GridConfig::default());

        let ids: Vec<_> = view.slot("b1", 9).iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["today"]);

        let unplaced = view.index().unplaced();
        assert_eq!(unplaced.len(), 1);
        assert_eq!(unplaced[0].appointment.id, "tomorrow");
        assert_eq!(unplaced[0].reason, Exclusion::NoColumn);
    }

    #[test]
    fn test_week_view_at_calendar_edge_is_an_error() {
        let config = GridConfig {
            week_start: NaiveDate::MAX.weekday(),
            ..GridConfig::default()
        };
        assert!(matches!(
            GridView::week(NaiveDate::MAX, &[], &config),
            Err(AgendaError::DateOutOfRange(_))
        ));
    }

    #[test]
    fn test_day_view_unknown_selection_is_empty_grid() {
        let resources = vec![resource("b1", true)];
        let view = GridView::day(date(2024, 5, 1), &[], &resources, Some("zz"), &GridConfig::default());

        assert!(view.columns().is_empty());
        assert_eq!(view.index().bucket_count(), 0);
    }

    #[test]
    fn test_week_view_buckets_by_day() {
        let appointments = vec![appointment("a1", at(3, 14, 0), Some("b1"))];
        let view = GridView::week(date(2024, 5, 1), &appointments, &GridConfig::default()).expect("Should build week");

        assert_eq!(view.columns().len(), 7);
        assert_eq!(view.columns()[0].key, "2024-04-28");
        assert_eq!(view.slot("2024-05-03", 14)[0].id, "a1");
        assert_eq!(view.title(), "28 Apr - 4 May");
    }

    #[test]
    fn test_week_view_honours_week_start() {
        let config = GridConfig {
            week_start: Weekday::Mon,
            ..GridConfig::default()
        };
        let view = GridView::week(date(2024, 5, 1), &[], &config).expect("Should build week");

        assert_eq!(view.columns()[0].key, "2024-04-29");
        assert_eq!(view.columns()[0].label(), "Mon 29");
        assert_eq!(view.columns()[6].key, "2024-05-05");
    }

    #[test]
    fn test_click_cell_in_day_view_requests_slot_with_resource() {
        let resources = vec![resource("b1", true)];
        let view = GridView::day(date(2024, 5, 1), &[], &resources, None, &GridConfig::default());

        let mut recorder = Recorder::default();
        view.click("b1", 9, ClickTarget::Cell, &mut recorder)
            .expect("Should route click");

        assert_eq!(recorder.slots, vec![(at(1, 9, 0), Some("b1".to_string()))]);
        assert!(recorder.appointments.is_empty());
    }

    #[test]
    fn test_click_cell_in_week_view_has_no_resource() {
        let view = GridView::week(date(2024, 5, 1), &[], &GridConfig::default()).expect("Should build week");

        let mut recorder = Recorder::default();
        view.click("2024-05-03", 16, ClickTarget::Cell, &mut recorder)
            .expect("Should route click");

        assert_eq!(recorder.slots, vec![(at(3, 16, 0), None)]);
    }

    #[test]
    fn test_click_entry_selects_appointment() {
        let resources = vec![resource("b1", true)];
        let appointments = vec![
            appointment("a1", at(1, 9, 30), Some("b1")),
            appointment("a2", at(1, 9, 45), Some("b1")),
        ];
        let view = GridView::day(date(2024, 5, 1), &appointments, &resources, None, &GridConfig::default());

        let mut selected = Vec::new();
        let mut slots = 0;
        let mut handler = Callbacks::new(
            |apt: &Appointment| selected.push(apt.id.clone()),
            |_: NaiveDateTime, _: Option<&str>| slots += 1,
        );
        view.click("b1", 9, ClickTarget::Entry(1), &mut handler)
            .expect("Should select entry");
        drop(handler);

        assert_eq!(selected, vec!["a2"]);
        assert_eq!(slots, 0);
    }

    #[test]
    fn test_click_outside_grid_is_an_error() {
        let resources = vec![resource("b1", true)];
        let view = GridView::day(date(2024, 5, 1), &[], &resources, None, &GridConfig::default());
        let mut recorder = Recorder::default();

        assert!(matches!(
            view.click("b2", 9, ClickTarget::Cell, &mut recorder),
            Err(AgendaError::NoSuchSlot { .. })
        ));
        assert!(matches!(
            view.click("b1", 22, ClickTarget::Cell, &mut recorder),
            Err(AgendaError::NoSuchSlot { hour: 22, .. })
        ));
        assert!(matches!(
            view.click("b1", 9, ClickTarget::Entry(0), &mut recorder),
            Err(AgendaError::NoSuchEntry { position: 0, .. })
        ));
        assert!(recorder.slots.is_empty());
    }

    #[test]
    fn test_today_highlighting() {
        let view = GridView::week(date(2024, 5, 1), &[], &GridConfig::default())
            .expect("Should build week")
            .with_today(date(2024, 5, 2));
        let flagged: Vec<_> = view
            .columns()
            .iter()
            .filter(|c| view.is_today(c))
            .map(|c| c.key.as_str())
            .collect();

        assert_eq!(flagged, vec!["2024-05-02"]);
    }
}
