//! Roster Core - account registry data model
//!
//! This crate provides the foundational types for the roster registry:
//! - The fixed account column schema with ordinal-based addressing
//! - Record and Table models (header row plus ordered data rows)
//! - Linear-scan locator primitives (exact, case-insensitive matching)
//! - Typed request variants for the command surface
//!
//! No I/O lives here; persistence belongs to `roster-store` and command
//! handling to `roster-engine`.

pub mod errors;
pub mod locate;
pub mod request;
pub mod schema;
pub mod table;

// Re-export commonly used types
pub use errors::{Result, TableError};
pub use locate::{find_all, find_first, normalize};
pub use request::Request;
pub use schema::Column;
pub use table::{Record, Table, FIRST_DATA_ROW};
