//! The list ingestion pipeline: decoding an uploaded contact file into rows
//! and splitting those rows across the agent roster.
//!
//! Both halves are synchronous pure functions. The upload handler in
//! `services::lists` wires them together with the persistence gateway.

mod distribute;
mod parse;

pub use distribute::distribute;
pub use parse::{parse_rows, SourceFormat};
