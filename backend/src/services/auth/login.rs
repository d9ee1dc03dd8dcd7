use actix_web::{web, HttpResponse};
use common::requests::{LoginRequest, LoginResponse};
use log::info;

use crate::auth::AuthKeys;
use crate::db::Database;
use crate::error::ApiError;

/// Handler for `POST /api/auth/login`.
///
/// Unknown email and wrong password are indistinguishable to the caller;
/// both come back as 401 "Invalid credentials".
pub async fn process(
    db: web::Data<Database>,
    keys: web::Data<AuthKeys>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = payload.into_inner();
    let user = db
        .find_user_by_email(&req.email)?
        .ok_or(ApiError::InvalidCredentials)?;

    let password_matches = bcrypt::verify(&req.password, &user.password_hash)
        .map_err(|e| ApiError::Internal(format!("password verification failed: {}", e)))?;
    if !password_matches {
        return Err(ApiError::InvalidCredentials);
    }

    let token = keys.issue(&user.id, &user.role)?;
    info!("operator {} logged in", user.email);
    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}
