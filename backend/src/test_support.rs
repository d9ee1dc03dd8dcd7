//! Shared fixtures for the service tests: a scratch SQLite database, signing
//! keys and pre-authenticated bearer headers.

use common::model::agent::Agent;
use tempfile::TempDir;

use crate::auth::AuthKeys;
use crate::db::Database;

// Cheap bcrypt cost, tests only.
const TEST_BCRYPT_COST: u32 = 4;

pub(crate) fn test_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db = Database::open(&dir.path().join("test.sqlite")).unwrap();
    (dir, db)
}

pub(crate) fn test_keys() -> AuthKeys {
    AuthKeys::new("test-secret", 3600)
}

/// A ready-to-insert `Authorization` header value.
pub(crate) fn bearer(keys: &AuthKeys) -> String {
    let token = keys.issue("operator-1", "admin").unwrap();
    format!("Bearer {}", token)
}

pub(crate) fn seed_operator(db: &Database, email: &str, password: &str) {
    let hash = bcrypt::hash(password, TEST_BCRYPT_COST).unwrap();
    db.seed_admin(email, &hash).unwrap();
}

pub(crate) fn insert_agent(db: &Database, id: &str, email: &str) {
    db.insert_agent(&Agent {
        id: id.to_string(),
        name: id.to_uppercase(),
        email: email.to_string(),
        mobile: "555-0000".to_string(),
        password_hash: "hash".to_string(),
    })
    .unwrap();
}
