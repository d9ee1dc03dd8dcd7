use serde::{Deserialize, Serialize};

/// An operator account that can log in to the admin application.
///
/// The only role in use is `admin`; one such account is seeded at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: String,
}
