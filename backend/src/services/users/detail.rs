use actix_web::{web, HttpResponse};

use crate::db::Database;
use crate::errors::ApiError;

/// `GET /api/users/{uid}`: one lead, merged across both tables.
pub async fn process(
    db: web::Data<Database>,
    uid: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user = db.get_user_detail(&uid)?;
    Ok(HttpResponse::Ok().json(user))
}
