//! Contact list upload, distribution and review.
//!
//! The provided routes, both behind the access gate:
//! - `POST /api/lists/upload`: Accepts a multipart form with one `file`
//!   field (CSV or Excel), parses it, splits the rows round-robin across all
//!   registered agents and persists one list per agent. Validation failures
//!   (missing file, unknown extension, empty roster) come back as 400, an
//!   undecodable file as 500; either way nothing is written.
//! - `GET /api/lists`: Returns every persisted list joined with its agent's
//!   name and email for the dashboard.

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod get_all;
mod upload;

const API_PATH: &str = "/api/lists";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/upload", post().to(upload::process))
        .route("", get().to(get_all::process))
}
