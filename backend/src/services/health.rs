use actix_web::web::{get, scope};
use actix_web::{web, HttpResponse, Scope};
use serde::Serialize;

use crate::db::Database;

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    database: bool,
}

pub fn configure_routes() -> Scope {
    scope("/health").route("", get().to(process))
}

/// Always `200`; `database` reports whether the connection still answers.
async fn process(db: web::Data<Database>) -> HttpResponse {
    HttpResponse::Ok().json(Health {
        status: "healthy",
        database: db.test_connection(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fixtures::sample_database;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn reports_database_status() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(sample_database()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "status": "healthy", "database": true }));
    }
}
