use crate::domain::constants::{
    DEFAULT_BACKUP_DIR, DEFAULT_BACKUP_EXTENSION, DEFAULT_CSV_OUT, DEFAULT_SAFETY_CRITICAL_MODULES,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub backup_dir: PathBuf,
    pub backup_extension: String,
    pub csv_out: PathBuf,
    pub safety_critical_modules: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backup_dir: PathBuf::from(DEFAULT_BACKUP_DIR),
            backup_extension: DEFAULT_BACKUP_EXTENSION.to_string(),
            csv_out: PathBuf::from(DEFAULT_CSV_OUT),
            safety_critical_modules: DEFAULT_SAFETY_CRITICAL_MODULES
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

/// Metadata recovered from a `<VIN>_<SYSTEM>_<YYYYMMDD>_<HHMMSS>.<ext>` file name.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct BackupFileMetadata {
    pub file_name: String,
    pub vin: String,
    pub system: String,
    pub captured_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DecodedRecord {
    #[serde(rename = "offset")]
    pub byte_offset: usize,
    #[serde(rename = "name")]
    pub field_name: String,
    pub value: u32,
    pub interpretation: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SafetyTier {
    /// Not produced by the current DTC table or module rule.
    Low,
    Medium,
    High,
}

impl SafetyTier {
    pub fn as_str(self) -> &'static str {
        match self {
            SafetyTier::Low => "low",
            SafetyTier::Medium => "medium",
            SafetyTier::High => "high",
        }
    }
}

impl fmt::Display for SafetyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct DtcInfo {
    pub code: String,
    pub title: String,
    pub system: String,
    pub severity: SafetyTier,
    pub likely_causes: Vec<String>,
    pub recommended_steps: Vec<String>,
}

/// Result of a DTC lookup: an authoritative table hit or a pattern-based inference.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "provenance", rename_all = "lowercase")]
pub enum CodeLookup {
    Known(DtcInfo),
    Inferred(DtcInfo),
}

impl CodeLookup {
    pub fn info(&self) -> &DtcInfo {
        match self {
            CodeLookup::Known(info) | CodeLookup::Inferred(info) => info,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, CodeLookup::Known(_))
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ChangePlan {
    pub module: String,
    pub parameter: String,
    pub current_value: String,
    pub target_value: String,
    pub safety_tier: SafetyTier,
    pub pre_checks: Vec<String>,
    pub execution_steps: Vec<String>,
    pub rollback_steps: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Serialize, Clone, Copy)]
pub struct SourceEvidence {
    pub title: &'static str,
    pub url: &'static str,
    pub category: &'static str,
    pub last_checked: &'static str,
    pub notes: &'static str,
}

#[derive(Debug, Serialize, Clone)]
pub struct TrustReport {
    pub legitimacy_score: u32,
    pub verdict: String,
    pub strengths: Vec<String>,
    pub caveats: Vec<String>,
    pub sources: Vec<SourceEvidence>,
}

#[derive(Debug, Serialize, Clone, Copy)]
pub struct TopicExplanation {
    #[serde(skip)]
    pub key: &'static str,
    pub topic: &'static str,
    pub summary: &'static str,
    pub why_it_matters: &'static [&'static str],
    pub common_mistakes: &'static [&'static str],
    pub best_practices: &'static [&'static str],
}

#[derive(Serialize)]
pub struct ParseReport {
    pub file: String,
    pub records: Vec<DecodedRecord>,
    pub csv_out: String,
    pub json_out: Option<String>,
    pub jsonl_out: Option<String>,
}

#[derive(Serialize)]
pub struct BackupListing {
    pub index: usize,
    #[serde(flatten)]
    pub meta: BackupFileMetadata,
}
