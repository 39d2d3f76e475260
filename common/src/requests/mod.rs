//! Request shapes shared by the dashboard and the API server.
//!
//! `UserQuery` is the query builder used by the dashboard: it turns a
//! [`FilterCriteria`] into the canonical `/api/users` query, keeping only the
//! fields that carry a value. `UsersRequest` is the server-side view of the
//! same query string.

use serde::Deserialize;
use url::form_urlencoded;

use crate::model::filters::{FilterCriteria, FilterField};

/// Canonical query for `GET /api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserQuery {
    params: Vec<(&'static str, String)>,
}

impl UserQuery {
    /// Builds the query from the criteria, omitting every empty field.
    ///
    /// Values are forwarded as typed; nothing is checked against the filter
    /// options, the API response is authoritative.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let params = FilterField::ALL
            .iter()
            .filter_map(|field| {
                let value = criteria.get(*field);
                (!value.is_empty()).then(|| (field.param(), value.to_string()))
            })
            .collect();
        Self { params }
    }

    /// The query used for full loads.
    pub fn unfiltered() -> Self {
        Self::default()
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// URL-encoded `key=value&...` string, empty when there are no params.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter().map(|(k, v)| (*k, v.as_str())))
            .finish()
    }

    /// Request path for this query below `api_base`, e.g. `/api/users?search=ann`.
    pub fn path(&self, api_base: &str) -> String {
        let base = format!("{}/users", api_base.trim_end_matches('/'));
        if self.is_empty() {
            base
        } else {
            format!("{}?{}", base, self.to_query_string())
        }
    }
}

/// Path of the single-record endpoint for `uid`, with the uid percent-encoded.
pub fn detail_path(api_base: &str, uid: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(uid.as_bytes()).collect();
    format!(
        "{}/users/{}",
        api_base.trim_end_matches('/'),
        encoded.replace('+', "%20")
    )
}

/// Path of the filter options endpoint.
pub fn filters_path(api_base: &str) -> String {
    format!("{}/filters", api_base.trim_end_matches('/'))
}

/// Query parameters accepted by `GET /api/users` on the server.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsersRequest {
    pub search: Option<String>,
    pub location_filter: Option<String>,
    pub school_filter: Option<String>,
    pub country_filter: Option<String>,
    pub source_filter: Option<String>,
    pub order_by: Option<String>,
    pub order_direction: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_criteria_build_empty_query() {
        let query = UserQuery::from_criteria(&FilterCriteria::default());
        assert!(query.is_empty());
        assert_eq!(query.to_query_string(), "");
        assert_eq!(query.path("/api"), "/api/users");
    }

    #[test]
    fn empty_values_are_never_sent() {
        let criteria = FilterCriteria {
            search: String::new(),
            location_filter: "Boston, MA".to_string(),
            school_filter: String::new(),
            country_filter: "USA".to_string(),
            source_filter: String::new(),
        };
        let query = UserQuery::from_criteria(&criteria);
        assert_eq!(query.params().len(), 2);
        assert!(query.params().iter().all(|(_, v)| !v.is_empty()));
        assert_eq!(query.to_query_string(), "location_filter=Boston%2C+MA&country_filter=USA");
    }

    #[test]
    fn values_are_url_encoded_but_not_validated() {
        let criteria = FilterCriteria {
            search: "a&b=c".to_string(),
            source_filter: "not_a_real_source".to_string(),
            ..Default::default()
        };
        let query = UserQuery::from_criteria(&criteria);
        assert_eq!(
            query.path("/api/"),
            "/api/users?search=a%26b%3Dc&source_filter=not_a_real_source"
        );
    }

    #[test]
    fn detail_path_encodes_uid() {
        assert_eq!(detail_path("/api", "user_001"), "/api/users/user_001");
        assert_eq!(detail_path("/api", "a b/c"), "/api/users/a%20b%2Fc");
        assert_eq!(filters_path("/api"), "/api/filters");
    }
}
