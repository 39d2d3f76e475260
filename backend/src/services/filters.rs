//! `GET /api/filters`: dropdown values for the dashboard filter bar.

use actix_web::web::{get, scope};
use actix_web::{web, HttpResponse, Scope};

use crate::db::Database;
use crate::errors::ApiError;

const API_PATH: &str = "/api/filters";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

async fn process(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let options = db.get_filter_options()?;
    Ok(HttpResponse::Ok().json(options))
}
