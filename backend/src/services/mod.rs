pub mod agents;
pub mod auth;
pub mod lists;
