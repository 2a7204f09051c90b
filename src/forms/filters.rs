//! Filter panel inputs.

use serde::Deserialize;

use crate::domain::filter::{FilterKey, FilterSet, FilterValue};
use crate::forms::FormError;

/// Current contents of the filter inputs, exactly as typed.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FilterForm {
    pub company: String,
    pub job_title: String,
    pub city: String,
    pub state: String,
    pub total_hosting_events_min: String,
    pub total_hosting_events_max: String,
    #[serde(alias = "total_attended_events_min")]
    pub total_registered_events_min: String,
    #[serde(alias = "total_attended_events_max")]
    pub total_registered_events_max: String,
}

impl FilterForm {
    fn raw(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::Company => &self.company,
            FilterKey::JobTitle => &self.job_title,
            FilterKey::City => &self.city,
            FilterKey::State => &self.state,
            FilterKey::HostingEventsMin => &self.total_hosting_events_min,
            FilterKey::HostingEventsMax => &self.total_hosting_events_max,
            FilterKey::RegisteredEventsMin => &self.total_registered_events_min,
            FilterKey::RegisteredEventsMax => &self.total_registered_events_max,
        }
    }

    /// Mutable access used by front ends that bind inputs by wire name.
    pub fn field_mut(&mut self, key: FilterKey) -> &mut String {
        match key {
            FilterKey::Company => &mut self.company,
            FilterKey::JobTitle => &mut self.job_title,
            FilterKey::City => &mut self.city,
            FilterKey::State => &mut self.state,
            FilterKey::HostingEventsMin => &mut self.total_hosting_events_min,
            FilterKey::HostingEventsMax => &mut self.total_hosting_events_max,
            FilterKey::RegisteredEventsMin => &mut self.total_registered_events_min,
            FilterKey::RegisteredEventsMax => &mut self.total_registered_events_max,
        }
    }
}

impl TryFrom<&FilterForm> for FilterSet {
    type Error = FormError;

    fn try_from(form: &FilterForm) -> Result<Self, Self::Error> {
        let mut filters = FilterSet::new();

        for key in FilterKey::ALL {
            let raw = form.raw(key).trim();
            if raw.is_empty() {
                continue;
            }

            let value = if key.is_numeric() {
                let number = raw
                    .parse::<u32>()
                    .map_err(|_| FormError::InvalidNumber(key.as_str()))?;
                FilterValue::Number(number)
            } else {
                FilterValue::Text(raw.to_string())
            };

            filters.set(key, Some(value));
        }

        Ok(filters)
    }
}
