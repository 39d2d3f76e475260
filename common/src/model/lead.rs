use serde::{Deserialize, Serialize};

/// Which upstream table(s) a lead was found in.
///
/// The API sends this as a snake_case string. Anything it does not recognise
/// lands in `Unknown` instead of failing the whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceCategory {
    SchoolsOnly,
    SalesnavOnly,
    Both,
    #[default]
    #[serde(other)]
    Unknown,
}

impl SourceCategory {
    /// Derives the category from table membership.
    ///
    /// A lead present in neither table is not expected upstream, but it is
    /// classified as `Unknown` rather than rejected.
    pub fn from_membership(in_schools: bool, in_salesnav: bool) -> Self {
        match (in_schools, in_salesnav) {
            (true, true) => SourceCategory::Both,
            (true, false) => SourceCategory::SchoolsOnly,
            (false, true) => SourceCategory::SalesnavOnly,
            (false, false) => SourceCategory::Unknown,
        }
    }

    /// Wire value, also used as the `source_filter` query value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceCategory::SchoolsOnly => "schools_only",
            SourceCategory::SalesnavOnly => "salesnav_only",
            SourceCategory::Both => "both",
            SourceCategory::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SourceCategory::Unknown)
    }

    /// Bootstrap row class the API attaches as `color_class`.
    pub fn row_class(&self) -> &'static str {
        match self {
            SourceCategory::Both => "table-success",
            SourceCategory::SchoolsOnly => "table-info",
            SourceCategory::SalesnavOnly | SourceCategory::Unknown => "table-warning",
        }
    }
}

/// One merged lead, as returned by `/api/users` (list shape) or
/// `/api/users/{uid}` (detail shape).
///
/// Both shapes share this struct: fields missing from a payload fall back to
/// their defaults. The list shape carries `source_category` and
/// `color_class`; the detail shape carries the membership flags, timestamps
/// and the extended profile fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LeadRecord {
    pub uid: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub req_school: String,
    #[serde(default)]
    pub req_country: String,
    #[serde(default)]
    pub linkedin_profile_url: Option<String>,
    #[serde(default)]
    pub linkedin_image_url: Option<String>,
    #[serde(default)]
    pub color_class: String,
    #[serde(default)]
    pub source_category: SourceCategory,
    #[serde(default)]
    pub in_schools_table: bool,
    #[serde(default)]
    pub in_salesnav_table: bool,
    #[serde(default)]
    pub schools_timestamp: Option<String>,
    #[serde(default)]
    pub salesnav_timestamp: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
}

impl LeadRecord {
    /// The category to display for this record.
    ///
    /// Uses the category sent by the API when it is recognised, otherwise
    /// falls back to the membership flags (detail payloads only carry those).
    pub fn resolved_category(&self) -> SourceCategory {
        if self.source_category.is_known() {
            self.source_category
        } else {
            SourceCategory::from_membership(self.in_schools_table, self.in_salesnav_table)
        }
    }
}
