//! Persistence gateway over a local SQLite file.
//!
//! The [`Database`] handle is constructed once in `main` and injected into
//! the Actix application as `web::Data`, so no module holds an ambient
//! connection. List items are stored as a JSON text column; every other
//! field maps to a plain column.

use chrono::{DateTime, Utc};
use common::model::agent::Agent;
use common::model::list::{List, ListItem, ListWithAgent};
use common::model::user::User;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

use crate::error::ApiError;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id            TEXT PRIMARY KEY,
    email         TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    role          TEXT NOT NULL DEFAULT 'admin'
);
CREATE TABLE IF NOT EXISTS agents (
    id            TEXT PRIMARY KEY,
    name          TEXT NOT NULL,
    email         TEXT NOT NULL UNIQUE,
    mobile        TEXT NOT NULL,
    password_hash TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS lists (
    id         TEXT PRIMARY KEY,
    agent_id   TEXT NOT NULL REFERENCES agents(id),
    items      TEXT NOT NULL,
    created_at TEXT NOT NULL
);
";

#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Opens (creating if needed) the database file and ensures the schema
    /// exists.
    pub fn open(path: &Path) -> Result<Self, ApiError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts the admin account unless a user with that email already
    /// exists. Returns whether a row was created.
    pub fn seed_admin(&self, email: &str, password_hash: &str) -> Result<bool, ApiError> {
        if self.find_user_by_email(email)?.is_some() {
            return Ok(false);
        }
        self.lock().execute(
            "INSERT INTO users (id, email, password_hash, role) VALUES (?1, ?2, ?3, 'admin')",
            params![Uuid::new_v4().to_string(), email, password_hash],
        )?;
        Ok(true)
    }

    pub fn find_user_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let conn = self.lock();
        let user = conn
            .query_row(
                "SELECT id, email, password_hash, role FROM users WHERE email = ?1",
                params![email],
                |row| {
                    Ok(User {
                        id: row.get(0)?,
                        email: row.get(1)?,
                        password_hash: row.get(2)?,
                        role: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(user)
    }

    pub fn insert_agent(&self, agent: &Agent) -> Result<(), ApiError> {
        self.lock().execute(
            "INSERT INTO agents (id, name, email, mobile, password_hash)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                agent.id,
                agent.name,
                agent.email,
                agent.mobile,
                agent.password_hash
            ],
        )?;
        Ok(())
    }

    /// All agents in insertion order. Upload distribution depends on this
    /// order being stable between calls.
    pub fn find_all_agents(&self) -> Result<Vec<Agent>, ApiError> {
        let conn = self.lock();
        let mut stmt = conn.prepare(
            "SELECT id, name, email, mobile, password_hash FROM agents ORDER BY rowid",
        )?;
        let agents = stmt
            .query_map([], |row| {
                Ok(Agent {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                    mobile: row.get(3)?,
                    password_hash: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(agents)
    }

    /// Persists one distribution group for `agent_id`. Each call is its own
    /// statement; there is no transaction spanning the groups of an upload.
    pub fn create_list(&self, agent_id: &str, items: Vec<ListItem>) -> Result<List, ApiError> {
        let list = List {
            id: Uuid::new_v4().to_string(),
            agent_id: agent_id.to_string(),
            items,
            created_at: Utc::now(),
        };
        let items_json = serde_json::to_string(&list.items)
            .map_err(|e| ApiError::Internal(format!("failed to encode list items: {}", e)))?;
        self.lock().execute(
            "INSERT INTO lists (id, agent_id, items, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![list.id, list.agent_id, items_json, list.created_at],
        )?;
        Ok(list)
    }

    /// All persisted lists joined with their agent's name and email, in
    /// creation order.
    pub fn find_all_lists(&self) -> Result<Vec<ListWithAgent>, ApiError> {
        let conn = self.lock();
        let mut stmt = conn.prepare(
            "SELECT l.id, l.agent_id, a.name, a.email, l.items, l.created_at
             FROM lists l
             JOIN agents a ON a.id = l.agent_id
             ORDER BY l.rowid",
        )?;
        let lists = stmt
            .query_map([], |row| {
                let items_json: String = row.get(4)?;
                let items: Vec<ListItem> = serde_json::from_str(&items_json).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
                })?;
                let created_at: DateTime<Utc> = row.get(5)?;
                Ok(ListWithAgent {
                    id: row.get(0)?,
                    agent_id: row.get(1)?,
                    agent_name: row.get(2)?,
                    agent_email: row.get(3)?,
                    items,
                    created_at,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lists)
    }
}
