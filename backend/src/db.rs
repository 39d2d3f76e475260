//! # Leads Database
//!
//! Read-only access to the SQLite leads database. Leads live in two tables,
//! `leads_schools` and `leads_salesnav`, keyed by `uid`; a lead may appear in
//! either or both. Every query here merges the two by `uid`:
//!
//! - `get_users` returns one list row per uid, with display defaults for blank
//!   fields and the source category derived from table membership.
//! - `get_user_detail` merges both rows field by field, keeping the longer
//!   value, and adds the extended profile fields from the salesnav row.
//! - `get_filter_options` returns the distinct non-empty dropdown values.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use common::model::filters::FilterOptions;
use common::model::lead::{LeadRecord, SourceCategory};
use common::requests::UsersRequest;
use log::info;
use rusqlite::{params, params_from_iter, Connection, OpenFlags, OptionalExtension, Row};

use crate::errors::ApiError;

/// Columns `order_by` may name. Anything else sorts by `user_name`.
const SORTABLE_COLUMNS: [&str; 5] = ["user_name", "title", "location", "req_school", "req_country"];

const USERS_QUERY: &str = "
WITH merged AS (
    SELECT uid, user_name, title, linkedin_profile_url, linkedin_image_url,
           location, req_school, req_country, 0 AS priority, 'schools' AS source_table
    FROM leads_schools
    WHERE uid IS NOT NULL AND uid != ''

    UNION ALL

    SELECT uid, user_name, title, linkedin_profile_url, linkedin_image_url,
           location, req_school, req_country, 1 AS priority, 'salesnav' AS source_table
    FROM leads_salesnav
    WHERE uid IS NOT NULL AND uid != ''
),
membership AS (
    SELECT uid,
           MAX(source_table = 'schools') AS in_schools,
           MAX(source_table = 'salesnav') AS in_salesnav
    FROM merged
    GROUP BY uid
),
ranked AS (
    SELECT m.*, ROW_NUMBER() OVER (PARTITION BY m.uid ORDER BY m.priority) AS row_num
    FROM merged m
),
unique_users AS (
    SELECT r.uid,
           COALESCE(NULLIF(r.user_name, ''), 'Unknown User') AS user_name,
           COALESCE(NULLIF(r.title, ''), 'No Title') AS title,
           r.linkedin_profile_url,
           r.linkedin_image_url,
           COALESCE(NULLIF(r.location, ''), 'Unknown Location') AS location,
           COALESCE(NULLIF(r.req_school, ''), 'No School') AS req_school,
           COALESCE(NULLIF(r.req_country, ''), 'Unknown Country') AS req_country,
           ms.in_schools,
           ms.in_salesnav
    FROM ranked r
    JOIN membership ms ON ms.uid = r.uid
    WHERE r.row_num = 1
)
SELECT uid, user_name, title, linkedin_profile_url, linkedin_image_url,
       location, req_school, req_country, in_schools, in_salesnav
FROM unique_users
WHERE 1=1";

const SCHOOLS_DETAIL_QUERY: &str = "
SELECT user_name, title, linkedin_profile_url, linkedin_image_url, location,
       req_school, req_country, timestamp, NULL, NULL, NULL, NULL
FROM leads_schools WHERE uid = ?1 LIMIT 1";

const SALESNAV_DETAIL_QUERY: &str = "
SELECT user_name, title, linkedin_profile_url, linkedin_image_url, location,
       req_school, req_country, timestamp, headline, about, skills, experience
FROM leads_salesnav WHERE uid = ?1 LIMIT 1";

/// Shared handle to the leads database.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Opens an existing database read-only and checks it answers queries.
    pub fn open(path: &Path) -> Result<Self, ApiError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| ApiError::Database(format!("cannot open {}: {}", path.display(), e)))?;
        conn.query_row("SELECT 1", [], |_| Ok(()))?;
        info!("Opened leads database at {}", path.display());
        Ok(Self::from_connection(conn))
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, ApiError> {
        self.conn
            .lock()
            .map_err(|_| ApiError::Database("connection lock poisoned".to_string()))
    }

    pub fn test_connection(&self) -> bool {
        match self.conn() {
            Ok(conn) => conn.query_row("SELECT 1", [], |_| Ok(())).is_ok(),
            Err(_) => false,
        }
    }

    /// Merged lead list, filtered and ordered as `request` asks.
    pub fn get_users(&self, request: &UsersRequest) -> Result<Vec<LeadRecord>, ApiError> {
        let mut sql = String::from(USERS_QUERY);
        let mut args: Vec<String> = Vec::new();

        if let Some(search) = present(&request.search) {
            sql.push_str(" AND (user_name LIKE ? OR title LIKE ? OR location LIKE ?)");
            let pattern = format!("%{}%", search);
            args.extend([pattern.clone(), pattern.clone(), pattern]);
        }
        for (column, value) in [
            ("location", &request.location_filter),
            ("req_school", &request.school_filter),
            ("req_country", &request.country_filter),
        ] {
            if let Some(value) = present(value) {
                sql.push_str(&format!(" AND {} LIKE ?", column));
                args.push(format!("%{}%", value));
            }
        }
        match present(&request.source_filter) {
            Some("schools_only") => sql.push_str(" AND in_schools = 1 AND in_salesnav = 0"),
            Some("salesnav_only") => sql.push_str(" AND in_schools = 0 AND in_salesnav = 1"),
            Some("both") => sql.push_str(" AND in_schools = 1 AND in_salesnav = 1"),
            _ => {}
        }
        sql.push_str(&order_clause(request));

        let conn = self.conn()?;
        let mut stmt = conn.prepare(&sql)?;
        let users = stmt
            .query_map(params_from_iter(args.iter()), list_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(users)
    }

    /// Full record for one lead, merged across both tables.
    pub fn get_user_detail(&self, uid: &str) -> Result<LeadRecord, ApiError> {
        let conn = self.conn()?;
        let schools = conn
            .query_row(SCHOOLS_DETAIL_QUERY, params![uid], SourceRow::from_row)
            .optional()?;
        let salesnav = conn
            .query_row(SALESNAV_DETAIL_QUERY, params![uid], SourceRow::from_row)
            .optional()?;

        if schools.is_none() && salesnav.is_none() {
            return Err(ApiError::NotFound);
        }
        Ok(merge_detail(uid, schools, salesnav))
    }

    pub fn get_filter_options(&self) -> Result<FilterOptions, ApiError> {
        let conn = self.conn()?;
        Ok(FilterOptions {
            locations: distinct_values(&conn, "location")?,
            schools: distinct_values(&conn, "req_school")?,
            countries: distinct_values(&conn, "req_country")?,
            sources: [
                SourceCategory::SchoolsOnly,
                SourceCategory::SalesnavOnly,
                SourceCategory::Both,
            ]
            .iter()
            .map(|category| category.as_str().to_string())
            .collect(),
        })
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn order_clause(request: &UsersRequest) -> String {
    let column = request
        .order_by
        .as_deref()
        .and_then(|requested| SORTABLE_COLUMNS.iter().find(|c| **c == requested))
        .copied()
        .unwrap_or("user_name");
    let direction = match request.order_direction.as_deref() {
        Some(d) if d.eq_ignore_ascii_case("DESC") => "DESC",
        _ => "ASC",
    };
    format!(" ORDER BY {} {}, uid ASC", column, direction)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn list_row(row: &Row<'_>) -> rusqlite::Result<LeadRecord> {
    let in_schools: bool = row.get(8)?;
    let in_salesnav: bool = row.get(9)?;
    let category = SourceCategory::from_membership(in_schools, in_salesnav);
    Ok(LeadRecord {
        uid: row.get(0)?,
        user_name: row.get(1)?,
        title: row.get(2)?,
        linkedin_profile_url: non_empty(row.get(3)?),
        linkedin_image_url: non_empty(row.get(4)?),
        location: row.get(5)?,
        req_school: row.get(6)?,
        req_country: row.get(7)?,
        color_class: category.row_class().to_string(),
        source_category: category,
        ..Default::default()
    })
}

/// One table's row for a lead, as read by the detail queries.
#[derive(Debug, Default)]
struct SourceRow {
    user_name: Option<String>,
    title: Option<String>,
    linkedin_profile_url: Option<String>,
    linkedin_image_url: Option<String>,
    location: Option<String>,
    req_school: Option<String>,
    req_country: Option<String>,
    timestamp: Option<String>,
    headline: Option<String>,
    about: Option<String>,
    skills: Option<String>,
    experience: Option<String>,
}

impl SourceRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            user_name: row.get(0)?,
            title: row.get(1)?,
            linkedin_profile_url: row.get(2)?,
            linkedin_image_url: row.get(3)?,
            location: row.get(4)?,
            req_school: row.get(5)?,
            req_country: row.get(6)?,
            timestamp: row.get(7)?,
            headline: row.get(8)?,
            about: row.get(9)?,
            skills: row.get(10)?,
            experience: row.get(11)?,
        })
    }
}

/// Picks the longer (trimmed) of two values; ties go to salesnav.
fn prefer_longer(schools: &Option<String>, salesnav: &Option<String>) -> String {
    let schools = schools.as_deref().filter(|v| !v.is_empty());
    let salesnav = salesnav.as_deref().filter(|v| !v.is_empty());
    match (schools, salesnav) {
        (Some(a), Some(b)) if a.trim().len() > b.trim().len() => a.to_string(),
        (Some(_), Some(b)) => b.to_string(),
        (a, b) => a.or(b).unwrap_or_default().to_string(),
    }
}

fn merge_detail(uid: &str, schools: Option<SourceRow>, salesnav: Option<SourceRow>) -> LeadRecord {
    let in_schools = schools.is_some();
    let in_salesnav = salesnav.is_some();
    let schools = schools.unwrap_or_default();
    let salesnav = salesnav.unwrap_or_default();
    let category = SourceCategory::from_membership(in_schools, in_salesnav);

    LeadRecord {
        uid: uid.to_string(),
        user_name: prefer_longer(&schools.user_name, &salesnav.user_name),
        title: prefer_longer(&schools.title, &salesnav.title),
        linkedin_profile_url: non_empty(Some(prefer_longer(
            &schools.linkedin_profile_url,
            &salesnav.linkedin_profile_url,
        ))),
        linkedin_image_url: non_empty(Some(prefer_longer(
            &schools.linkedin_image_url,
            &salesnav.linkedin_image_url,
        ))),
        location: prefer_longer(&schools.location, &salesnav.location),
        req_school: prefer_longer(&schools.req_school, &salesnav.req_school),
        req_country: prefer_longer(&schools.req_country, &salesnav.req_country),
        color_class: category.row_class().to_string(),
        source_category: category,
        in_schools_table: in_schools,
        in_salesnav_table: in_salesnav,
        schools_timestamp: schools.timestamp,
        salesnav_timestamp: salesnav.timestamp,
        headline: salesnav.headline,
        about: salesnav.about,
        skills: salesnav.skills,
        experience: salesnav.experience,
    }
}

/// Sorted distinct non-empty values of `column` across both tables.
/// `column` is always one of the fixed names above, never user input.
fn distinct_values(conn: &Connection, column: &str) -> Result<Vec<String>, ApiError> {
    let sql = format!(
        "SELECT DISTINCT {c} FROM (
             SELECT {c} FROM leads_schools WHERE {c} IS NOT NULL AND {c} != ''
             UNION
             SELECT {c} FROM leads_salesnav WHERE {c} IS NOT NULL AND {c} != ''
         ) ORDER BY {c}",
        c = column
    );
    let mut stmt = conn.prepare(&sql)?;
    let values = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;
    Ok(values)
}
