use serde::{Deserialize, Serialize};

/// A registered recipient of distributed contact rows.
///
/// Agents are created through `POST /api/agents` and act as the roster for
/// the upload distribution step. The stored password hash is never included
/// when an agent is serialized into an API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
}
