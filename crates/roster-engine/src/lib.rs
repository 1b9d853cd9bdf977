//! Roster Engine - command handlers over the shared table
//!
//! This crate owns the [`Registry`]: the single shared instance of the
//! account table, guarded so that concurrent commands are safe. Mutating
//! handlers hold an exclusive section across their whole
//! read-validate-mutate-persist sequence; read handlers run against a
//! consistent snapshot and never observe a torn row.
//!
//! ## Logging Ownership
//!
//! The engine layer owns operation lifecycle logging (`tracing::info!`
//! on completed mutations, `tracing::warn!` on rejected input). The
//! store layer uses only `tracing::debug!` for internal details.

pub mod dispatch;
pub mod registry;

pub use dispatch::{dispatch, parse, ParseError};
pub use registry::Registry;
