use actix_web::{web, HttpResponse};
use common::requests::UsersRequest;

use crate::db::Database;
use crate::errors::ApiError;

/// `GET /api/users`: merged lead list as a JSON array.
pub async fn process(
    db: web::Data<Database>,
    query: web::Query<UsersRequest>,
) -> Result<HttpResponse, ApiError> {
    let users = db.get_users(&query)?;
    Ok(HttpResponse::Ok().json(users))
}
