//! Login endpoint issuing the bearer token consumed by the access gate.
//!
//! The provided route is:
//! - `POST /api/auth/login`: Verifies the operator's email and password
//!   against the users table and returns a signed token on success.

use actix_web::web::{post, scope};
use actix_web::Scope;

mod login;

const API_PATH: &str = "/api/auth";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/login", post().to(login::process))
}
