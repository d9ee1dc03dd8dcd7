use serde::{Deserialize, Serialize};

/// Credentials sent to `POST /api/auth/login`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response carrying the bearer token for later requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Payload for registering a new agent via `POST /api/agents`.
/// The password is hashed server-side before anything is stored.
#[derive(Debug, Serialize, Deserialize)]
pub struct NewAgentRequest {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
}

/// Generic `{ "message": ... }` body used for confirmations and errors.
#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
