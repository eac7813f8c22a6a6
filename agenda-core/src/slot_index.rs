//! Bucketing appointments into (column, hour) slots.
//!
//! The same index backs both views: the day view keys columns by resource
//! id, the week view by `yyyy-MM-dd` day key. Which key an appointment gets
//! is decided by the extractor passed to [`build_index`].

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use tracing::{debug, trace};

use crate::appointment::Appointment;
use crate::config::HourRange;

/// Why an appointment has no slot in an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// The key extractor returned nothing (e.g. unassigned, or on another
    /// date, in the day view)
    NoColumn,
    /// The key is not one of the grid's columns
    UnknownColumn,
    /// The start hour is outside the visible rows
    OutsideHours,
}

/// An appointment that is not shown, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unplaced<'a> {
    pub appointment: &'a Appointment,
    pub reason: Exclusion,
}

/// Column key -> hour -> appointments starting in that hour.
///
/// Every column has a (possibly empty) bucket for every visible hour, so
/// lookups never need an existence check. Within a bucket appointments keep
/// their input order.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotIndex<'a, K: Eq + Hash> {
    columns: Vec<K>,
    hours: HourRange,
    buckets: HashMap<K, BTreeMap<u32, Vec<&'a Appointment>>>,
    unplaced: Vec<Unplaced<'a>>,
}

/// Build a fresh index over `columns` x `hours`.
///
/// Appointments whose key is missing or unknown, or whose start hour is not
/// visible, are left out of the buckets and reported through
/// [`SlotIndex::unplaced`]. The input slice is never modified.
pub fn build_index<'a, K, F>(
    appointments: &'a [Appointment],
    columns: &[K],
    hours: HourRange,
    key_of: F,
) -> SlotIndex<'a, K>
where
    K: Eq + Hash + Clone,
    F: Fn(&Appointment) -> Option<K>,
{
    let mut ordered = Vec::with_capacity(columns.len());
    let mut buckets = HashMap::with_capacity(columns.len());

    for key in columns {
        if buckets.contains_key(key) {
            continue;
        }
        let rows: BTreeMap<u32, Vec<&Appointment>> = hours.iter().map(|h| (h, Vec::new())).collect();
        buckets.insert(key.clone(), rows);
        ordered.push(key.clone());
    }

    let mut unplaced = Vec::new();

    for appointment in appointments {
        let hour = appointment.hour();

        let reason = match key_of(appointment) {
            None => Exclusion::NoColumn,
            Some(key) => match buckets.get_mut(&key).and_then(|rows| rows.get_mut(&hour)) {
                Some(bucket) => {
                    trace!(id = %appointment.id, hour, "placed appointment");
                    bucket.push(appointment);
                    continue;
                }
                None if !hours.contains(hour) => Exclusion::OutsideHours,
                None => Exclusion::UnknownColumn,
            },
        };

        debug!(id = %appointment.id, hour, ?reason, "appointment left out of grid");
        unplaced.push(Unplaced { appointment, reason });
    }

    debug!(
        columns = ordered.len(),
        hours = hours.len(),
        placed = appointments.len() - unplaced.len(),
        unplaced = unplaced.len(),
        "built slot index"
    );

    SlotIndex {
        columns: ordered,
        hours,
        buckets,
        unplaced,
    }
}

impl<'a, K: Eq + Hash> SlotIndex<'a, K> {
    /// Appointments in one slot; empty for slots outside the grid.
    pub fn get<Q>(&self, key: &Q, hour: u32) -> &[&'a Appointment]
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.buckets
            .get(key)
            .and_then(|rows| rows.get(&hour))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All hour buckets of one column, in hour order.
    pub fn column<Q>(&self, key: &Q) -> Option<&BTreeMap<u32, Vec<&'a Appointment>>>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.buckets.get(key)
    }

    /// Column keys in display order, without duplicates.
    pub fn columns(&self) -> &[K] {
        &self.columns
    }

    pub fn hours(&self) -> HourRange {
        self.hours
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.values().map(BTreeMap::len).sum()
    }

    pub fn placed_count(&self) -> usize {
        self.buckets
            .values()
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }

    pub fn unplaced(&self) -> &[Unplaced<'a>] {
        &self.unplaced
    }

    /// Every slot in column-major display order.
    pub fn slots(&self) -> impl Iterator<Item = (&K, u32, &[&'a Appointment])> + '_ {
        self.columns.iter().flat_map(move |key| {
            self.hours
                .iter()
                .map(move |hour| (key, hour, self.get(key, hour)))
        })
    }
}
