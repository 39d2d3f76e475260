//! Typed display models derived from [`LeadRecord`].
//!
//! These decide *what* to show (avatar fallback, badge per category, which
//! detail sections exist) independently of how the frontend renders it.

use crate::model::lead::{LeadRecord, SourceCategory};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    Image { url: String, alt: String },
    /// Upper-cased first letter of the name, shown when there is no picture.
    Initial(String),
}

impl Avatar {
    pub fn for_lead(user_name: &str, image_url: Option<&str>) -> Self {
        match image_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => Avatar::Image {
                url: url.to_string(),
                alt: user_name.to_string(),
            },
            None => Avatar::Initial(
                user_name
                    .chars()
                    .next()
                    .map(|c| c.to_uppercase().collect())
                    .unwrap_or_else(|| "?".to_string()),
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub class: &'static str,
}

pub fn source_badge(category: SourceCategory) -> Badge {
    match category {
        SourceCategory::SchoolsOnly => Badge {
            label: "Schools Only",
            class: "bg-info",
        },
        SourceCategory::SalesnavOnly => Badge {
            label: "Sales Navigator",
            class: "bg-warning",
        },
        SourceCategory::Both => Badge {
            label: "Both Tables",
            class: "bg-success",
        },
        SourceCategory::Unknown => Badge {
            label: "Unknown",
            class: "bg-secondary",
        },
    }
}

/// Choices of the source dropdown: `(query value, label)`.
pub fn source_choices() -> [(&'static str, &'static str); 3] {
    [
        SourceCategory::SchoolsOnly,
        SourceCategory::SalesnavOnly,
        SourceCategory::Both,
    ]
    .map(|category| (category.as_str(), source_badge(category).label))
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadRow {
    pub uid: String,
    pub user_name: String,
    pub title: String,
    pub location: String,
    pub school: String,
    pub country: String,
    pub row_class: String,
    pub avatar: Avatar,
    pub profile_url: Option<String>,
    pub badge: Badge,
}

/// Columns the table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Name,
    Title,
    Location,
    School,
    Country,
    Source,
}

impl SortColumn {
    pub const ALL: [SortColumn; 6] = [
        SortColumn::Name,
        SortColumn::Title,
        SortColumn::Location,
        SortColumn::School,
        SortColumn::Country,
        SortColumn::Source,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            SortColumn::Name => "Name",
            SortColumn::Title => "Title",
            SortColumn::Location => "Location",
            SortColumn::School => "School",
            SortColumn::Country => "Country",
            SortColumn::Source => "Source",
        }
    }
}

impl LeadRow {
    pub fn from_record(record: &LeadRecord) -> Self {
        Self {
            uid: record.uid.clone(),
            user_name: record.user_name.clone(),
            title: record.title.clone(),
            location: record.location.clone(),
            school: record.req_school.clone(),
            country: record.req_country.clone(),
            row_class: record.color_class.clone(),
            avatar: Avatar::for_lead(&record.user_name, record.linkedin_image_url.as_deref()),
            profile_url: non_blank(record.linkedin_profile_url.as_deref()),
            badge: source_badge(record.source_category),
        }
    }

    pub fn sort_key(&self, column: SortColumn) -> &str {
        match column {
            SortColumn::Name => &self.user_name,
            SortColumn::Title => &self.title,
            SortColumn::Location => &self.location,
            SortColumn::School => &self.school,
            SortColumn::Country => &self.country,
            SortColumn::Source => self.badge.label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub heading: &'static str,
    pub icon: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMembership {
    pub label: &'static str,
    pub present: bool,
    pub timestamp: Option<String>,
}

/// Everything the detail dialog shows for one lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub uid: String,
    pub heading: String,
    pub user_name: String,
    pub title: String,
    pub avatar: Avatar,
    pub profile_url: Option<String>,
    pub basic: Vec<(&'static str, String)>,
    /// Headline, about, skills and experience, in that order, only when set.
    pub sections: Vec<DetailSection>,
    pub sources: [SourceMembership; 2],
    pub badge: Badge,
}

impl DetailView {
    pub fn from_record(record: &LeadRecord) -> Self {
        let sections = [
            ("Headline", "fa-quote-left", &record.headline),
            ("About", "fa-user", &record.about),
            ("Skills", "fa-cogs", &record.skills),
            ("Experience", "fa-briefcase", &record.experience),
        ]
        .into_iter()
        .filter_map(|(heading, icon, text)| {
            non_blank(text.as_deref()).map(|text| DetailSection { heading, icon, text })
        })
        .collect();

        Self {
            uid: record.uid.clone(),
            heading: format!("{} - Detailed Information", record.user_name),
            user_name: record.user_name.clone(),
            title: record.title.clone(),
            avatar: Avatar::for_lead(&record.user_name, record.linkedin_image_url.as_deref()),
            profile_url: non_blank(record.linkedin_profile_url.as_deref()),
            basic: vec![
                ("Location", record.location.clone()),
                ("School", record.req_school.clone()),
                ("Country", record.req_country.clone()),
            ],
            sections,
            sources: [
                SourceMembership {
                    label: "Schools Table",
                    present: record.in_schools_table,
                    timestamp: non_blank(record.schools_timestamp.as_deref()),
                },
                SourceMembership {
                    label: "Sales Navigator",
                    present: record.in_salesnav_table,
                    timestamp: non_blank(record.salesnav_timestamp.as_deref()),
                },
            ],
            badge: source_badge(record.resolved_category()),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_falls_back_to_initial() {
        assert_eq!(
            Avatar::for_lead("michael Brown", None),
            Avatar::Initial("M".to_string())
        );
        assert_eq!(Avatar::for_lead("ana", Some("  ")), Avatar::Initial("A".to_string()));
        assert_eq!(Avatar::for_lead("", None), Avatar::Initial("?".to_string()));
        assert_eq!(
            Avatar::for_lead("Jane", Some("https://img/j.jpg")),
            Avatar::Image {
                url: "https://img/j.jpg".to_string(),
                alt: "Jane".to_string()
            }
        );
    }

    #[test]
    fn badge_per_category() {
        assert_eq!(source_badge(SourceCategory::SchoolsOnly).label, "Schools Only");
        assert_eq!(source_badge(SourceCategory::SalesnavOnly).class, "bg-warning");
        assert_eq!(source_badge(SourceCategory::Both).label, "Both Tables");
        assert_eq!(source_badge(SourceCategory::Unknown).class, "bg-secondary");
        assert_eq!(
            source_choices(),
            [
                ("schools_only", "Schools Only"),
                ("salesnav_only", "Sales Navigator"),
                ("both", "Both Tables"),
            ]
        );
    }

    #[test]
    fn row_carries_display_fields() {
        let record = LeadRecord {
            uid: "user_003".to_string(),
            user_name: "Michael Brown".to_string(),
            title: "Data Scientist".to_string(),
            location: "London, UK".to_string(),
            req_school: "Oxford University".to_string(),
            req_country: "UK".to_string(),
            linkedin_profile_url: Some(String::new()),
            color_class: "table-info".to_string(),
            source_category: SourceCategory::SchoolsOnly,
            ..Default::default()
        };
        let row = LeadRow::from_record(&record);
        assert_eq!(row.row_class, "table-info");
        assert_eq!(row.profile_url, None);
        assert_eq!(row.sort_key(SortColumn::School), "Oxford University");
        assert_eq!(row.sort_key(SortColumn::Source), "Schools Only");
    }

    #[test]
    fn detail_shows_only_present_sections() {
        let record = LeadRecord {
            uid: "user_002".to_string(),
            user_name: "Jane Smith".to_string(),
            headline: Some("Building products".to_string()),
            about: Some(String::new()),
            skills: None,
            experience: Some("PM at TechCorp".to_string()),
            in_schools_table: true,
            in_salesnav_table: true,
            schools_timestamp: Some("2024-01-16 14:20:00".to_string()),
            salesnav_timestamp: Some(String::new()),
            ..Default::default()
        };
        let view = DetailView::from_record(&record);
        assert_eq!(view.heading, "Jane Smith - Detailed Information");
        let headings: Vec<_> = view.sections.iter().map(|s| s.heading).collect();
        assert_eq!(headings, vec!["Headline", "Experience"]);
        assert!(view.sources[0].present);
        assert_eq!(view.sources[0].timestamp.as_deref(), Some("2024-01-16 14:20:00"));
        assert_eq!(view.sources[1].timestamp, None);
        assert_eq!(view.badge.label, "Both Tables");
    }
}
