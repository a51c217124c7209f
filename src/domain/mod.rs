//! Shared data model layer (structs/constants/errors only).
//!
//! ## Purpose
//! - Keep record/report structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON/CSV output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — backup metadata, decoded records, DTC info, change plans, reports.
//! - `constants.rs` — stable defaults and the static payload/DTC lookup constants.
//! - `errors.rs` — the typed error enum shared by all services.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs and export files.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod errors;
pub mod models;
