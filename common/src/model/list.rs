use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One parsed row of an uploaded contact file.
///
/// Only these three columns are retained from the source file, matched by
/// header name (`firstName`, `phone`, `notes`). Items carry no identity of
/// their own beyond their position in the upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub first_name: String,
    pub phone: String,
    pub notes: String,
}

/// The persisted group of items assigned to one agent by one upload.
///
/// Lists are append-only: every upload creates a fresh set, one per agent in
/// the roster at that moment. They are never updated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: String,
    pub agent_id: String,
    pub items: Vec<ListItem>,
    pub created_at: DateTime<Utc>,
}

/// A list joined with its owning agent's name and email, as returned by
/// `GET /api/lists` for the dashboard view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListWithAgent {
    pub id: String,
    pub agent_id: String,
    pub agent_name: String,
    pub agent_email: String,
    pub items: Vec<ListItem>,
    pub created_at: DateTime<Utc>,
}
