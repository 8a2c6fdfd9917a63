//! Command handler layer.
//!
//! ## Files
//! - `doctor.rs` — the `check` readiness report.
//! - `runtime.rs` — up/migrate/serve/wait-db.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Handlers return the process exit code; `main` owns process exit.

pub mod doctor;
pub mod runtime;

pub use doctor::handle_check;
pub use runtime::handle_runtime_commands;
