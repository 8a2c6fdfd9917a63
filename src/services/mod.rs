//! Service layer containing the entrypoint steps and side-effect helpers.
//!
//! ## Service map
//! - `orchestrate.rs` — the wait/migrate/serve entrypoint sequence.
//! - `process.rs` — subprocess execution and exit-code mapping.
//! - `waitdb.rs` — database reachability probe.
//! - `doctor.rs` — environment readiness report.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod doctor;
pub mod orchestrate;
pub mod process;
pub mod waitdb;
