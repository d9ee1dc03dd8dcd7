//! Agent registration and listing.
//!
//! The provided routes, both behind the access gate:
//! - `POST /api/agents`: Registers a new agent from a `NewAgentRequest`
//!   payload. The agent's password is bcrypt-hashed before storage and the
//!   hash is never serialized back out.
//! - `GET /api/agents`: Returns all agents in registration order, which is
//!   also the roster order used by upload distribution.

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod add;
mod get_all;

const API_PATH: &str = "/api/agents";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(add::process))
        .route("", get().to(get_all::process))
}
