//! # Users Service Module
//!
//! Routes under `/api/users`, the lead list and the per-lead detail.
//!
//! ## Sub-modules:
//! - `list`: merged, filtered and ordered lead list.
//! - `detail`: one lead merged across both source tables.

mod detail;
mod list;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/users";

/// # Registered Routes:
///
/// *   **`GET /api/users`**: `list::process`. Accepts `search`,
///     `location_filter`, `school_filter`, `country_filter`, `source_filter`,
///     `order_by` and `order_direction`; every parameter is optional.
///
/// *   **`GET /api/users/{uid}`**: `detail::process`. `404` with
///     `{ "detail": "User not found" }` when neither table knows the uid.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/{uid}", get().to(detail::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fixtures::sample_database;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::lead::{LeadRecord, SourceCategory};
    use serde_json::Value;

    #[actix_web::test]
    async fn lists_all_users() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(sample_database()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/users").to_request();
        let users: Vec<LeadRecord> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(users.len(), 5);
    }

    #[actix_web::test]
    async fn lists_filtered_users() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(sample_database()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/users?location_filter=New%20York&source_filter=both")
            .to_request();
        let users: Vec<LeadRecord> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].uid, "user_002");
        assert_eq!(users[0].source_category, SourceCategory::Both);
    }

    #[actix_web::test]
    async fn returns_user_detail() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(sample_database()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/users/user_004").to_request();
        let user: LeadRecord = test::call_and_read_body_json(&app, req).await;
        assert_eq!(user.user_name, "David Wilson");
        assert!(!user.in_schools_table);
        assert!(user.in_salesnav_table);
    }

    #[actix_web::test]
    async fn unknown_user_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(sample_database()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/users/nobody").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "User not found");
    }
}
