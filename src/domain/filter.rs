//! Filter criteria applied to the contacts listing and the bulk email scope.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::domain::types::TypeConstraintError;

/// Keys understood by the contacts endpoint.
///
/// The declaration order is the order keys appear in query strings and
/// request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKey {
    Company,
    JobTitle,
    City,
    State,
    HostingEventsMin,
    HostingEventsMax,
    RegisteredEventsMin,
    RegisteredEventsMax,
}

impl FilterKey {
    pub const ALL: [FilterKey; 8] = [
        FilterKey::Company,
        FilterKey::JobTitle,
        FilterKey::City,
        FilterKey::State,
        FilterKey::HostingEventsMin,
        FilterKey::HostingEventsMax,
        FilterKey::RegisteredEventsMin,
        FilterKey::RegisteredEventsMax,
    ];

    /// Wire name of the key.
    pub const fn as_str(self) -> &'static str {
        match self {
            FilterKey::Company => "company",
            FilterKey::JobTitle => "job_title",
            FilterKey::City => "city",
            FilterKey::State => "state",
            FilterKey::HostingEventsMin => "total_hosting_events_min",
            FilterKey::HostingEventsMax => "total_hosting_events_max",
            FilterKey::RegisteredEventsMin => "total_registered_events_min",
            FilterKey::RegisteredEventsMax => "total_registered_events_max",
        }
    }

    /// Whether the key carries a numeric bound rather than free text.
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            FilterKey::HostingEventsMin
                | FilterKey::HostingEventsMax
                | FilterKey::RegisteredEventsMin
                | FilterKey::RegisteredEventsMax
        )
    }
}

impl Display for FilterKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "total_attended_events_min" => return Ok(FilterKey::RegisteredEventsMin),
            "total_attended_events_max" => return Ok(FilterKey::RegisteredEventsMax),
            _ => {}
        }
        FilterKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("unknown filter {s}")))
    }
}

/// Value attached to a filter key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    Text(String),
    Number(u32),
}

impl FilterValue {
    /// Builds a text value, returning `None` for blank input.
    pub fn text(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(FilterValue::Text(trimmed.to_string()))
        }
    }
}

impl Display for FilterValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterValue::Text(text) => f.write_str(text),
            FilterValue::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Active filter criteria.
///
/// Only keys with a meaningful value are ever stored: blank text is dropped on
/// insert, so every entry is safe to transmit as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSet {
    entries: BTreeMap<FilterKey, FilterValue>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a filter, removing the key when the value is blank.
    pub fn set(&mut self, key: FilterKey, value: Option<FilterValue>) {
        match value {
            Some(FilterValue::Text(text)) if text.trim().is_empty() => {
                self.entries.remove(&key);
            }
            Some(FilterValue::Text(text)) => {
                self.entries
                    .insert(key, FilterValue::Text(text.trim().to_string()));
            }
            Some(value) => {
                self.entries.insert(key, value);
            }
            None => {
                self.entries.remove(&key);
            }
        }
    }

    /// Builder-style variant of [`FilterSet::set`].
    #[must_use]
    pub fn with(mut self, key: FilterKey, value: FilterValue) -> Self {
        self.set(key, Some(value));
        self
    }

    pub fn get(&self, key: FilterKey) -> Option<&FilterValue> {
        self.entries.get(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over the present filters in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (FilterKey, &FilterValue)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }
}

impl Serialize for FilterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}
