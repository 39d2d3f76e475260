use serde::{Deserialize, Serialize};

/// The five independent predicates a user can narrow the list with.
///
/// An empty string means "no constraint on this field". Matching is done by
/// the API; the dashboard never filters records itself.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub location_filter: String,
    #[serde(default)]
    pub school_filter: String,
    #[serde(default)]
    pub country_filter: String,
    #[serde(default)]
    pub source_filter: String,
}

/// Names a single field of [`FilterCriteria`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Search,
    Location,
    School,
    Country,
    Source,
}

impl FilterField {
    pub const ALL: [FilterField; 5] = [
        FilterField::Search,
        FilterField::Location,
        FilterField::School,
        FilterField::Country,
        FilterField::Source,
    ];

    /// Query parameter name understood by `/api/users`.
    pub fn param(&self) -> &'static str {
        match self {
            FilterField::Search => "search",
            FilterField::Location => "location_filter",
            FilterField::School => "school_filter",
            FilterField::Country => "country_filter",
            FilterField::Source => "source_filter",
        }
    }

    /// Text inputs are debounced, discrete selections apply immediately.
    pub fn is_debounced(&self) -> bool {
        matches!(self, FilterField::Search)
    }
}

impl FilterCriteria {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Search => &self.search,
            FilterField::Location => &self.location_filter,
            FilterField::School => &self.school_filter,
            FilterField::Country => &self.country_filter,
            FilterField::Source => &self.source_filter,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let slot = match field {
            FilterField::Search => &mut self.search,
            FilterField::Location => &mut self.location_filter,
            FilterField::School => &mut self.school_filter,
            FilterField::Country => &mut self.country_filter,
            FilterField::Source => &mut self.source_filter,
        };
        *slot = value.into();
    }

    /// True when no field constrains the result.
    pub fn is_empty(&self) -> bool {
        FilterField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    pub fn clear(&mut self) {
        *self = FilterCriteria::default();
    }
}

/// Legal values for the three categorical dropdowns.
///
/// Loaded once per session from `/api/filters` and never refreshed. Values
/// are not used to validate criteria.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub schools: Vec<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub sources: Vec<String>,
}
