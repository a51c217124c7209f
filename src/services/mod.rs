//! Service layer containing the data transformation logic and side-effect helpers.
//!
//! ## Service map
//! - `catalog.rs` — backup discovery from file names, ordering, 1-based selection.
//! - `payload.rs` — fixed-offset decoding of backup payloads.
//! - `export.rs` — CSV/JSON/JSONL rendering and file writes.
//! - `dtc.rs` — DTC normalization, static knowledge base, pattern fallback.
//! - `planner.rs` — safety tier rule and change plan templates.
//! - `trust.rs` — static legitimacy report.
//! - `topics.rs` — static topic explanations.
//! - `config.rs` — optional TOML config loading.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod catalog;
pub mod config;
pub mod dtc;
pub mod export;
pub mod output;
pub mod payload;
pub mod planner;
pub mod topics;
pub mod trust;
