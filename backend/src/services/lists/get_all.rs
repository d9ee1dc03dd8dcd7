use actix_web::{web, HttpResponse};

use crate::auth::AuthedAdmin;
use crate::db::Database;
use crate::error::ApiError;

/// Handler for `GET /api/lists`.
pub async fn process(
    db: web::Data<Database>,
    _admin: AuthedAdmin,
) -> Result<HttpResponse, ApiError> {
    let lists = db.find_all_lists()?;
    Ok(HttpResponse::Ok().json(lists))
}
