//! Service providers (barbers) and the active-resource filter.

use serde::{Deserialize, Serialize};

/// A service provider that appointments can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    #[serde(alias = "is_active")]
    pub active: bool,
    /// Display color as a `#RRGGBB` hex string
    #[serde(default, alias = "calendar_color", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Select the resources that get a column in the day view.
///
/// Keeps active resources in their input order. When `selected` is set,
/// only the active resource with that id survives; an unknown or inactive
/// id yields an empty list.
pub fn filter_resources<'a>(resources: &'a [Resource], selected: Option<&str>) -> Vec<&'a Resource> {
    resources
        .iter()
        .filter(|r| r.active)
        .filter(|r| selected.is_none_or(|id| r.id == id))
        .collect()
}
