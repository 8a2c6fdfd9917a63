//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep report/output structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — report and output-envelope structs.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.

pub mod models;
