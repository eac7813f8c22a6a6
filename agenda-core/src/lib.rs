//! Core types for the agenda grid.
//!
//! This crate turns already-loaded resources and appointments into day and
//! week grids:
//! - `resource` filters the resources that get a day-view column
//! - `slot_index` buckets appointments by (column, hour)
//! - `grid` maps cells to timestamps and appointments to cells
//! - `view` composes them into day/week views with click routing
//!
//! Nothing here reads or writes files.

pub mod appointment;
pub mod config;
pub mod error;
pub mod grid;
pub mod resource;
pub mod selection;
pub mod slot_index;
pub mod timestamp;
pub mod view;

pub use appointment::Appointment;
pub use config::{GridConfig, HourRange};
pub use error::{AgendaError, AgendaResult};
pub use resource::{filter_resources, Resource};
pub use selection::{Callbacks, ClickTarget, SelectionHandler};
pub use slot_index::{build_index, SlotIndex};
pub use view::{Column, GridView, ViewKind};
