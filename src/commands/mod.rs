//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `backup.rs` — list-backups/parse-backup, including interactive selection.
//! - `advisory.rs` — decode-dtc/plan-change/trust-report/explain.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod advisory;
pub mod backup;

pub use advisory::handle_advisory_commands;
pub use backup::handle_backup_commands;
