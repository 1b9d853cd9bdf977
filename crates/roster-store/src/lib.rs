//! Roster Store - registry persistence
//!
//! Owns the persisted form of the account table: a JSON document holding
//! one or more named tables, rewritten in full after every mutation.
//! Writes go through a temp-file-then-rename primitive so a failure
//! mid-write never corrupts the previous state.

pub mod atomic;
pub mod document;
pub mod errors;
pub mod store;

pub use document::Document;
pub use errors::{Result, StoreError};
pub use store::TableStore;
