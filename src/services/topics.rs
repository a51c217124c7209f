use crate::domain::errors::HelperError;
use crate::domain::models::TopicExplanation;

static TOPICS: [TopicExplanation; 5] = [
    TopicExplanation {
        key: "asbuilt",
        topic: "As-Built",
        summary: "As-Built is factory configuration data for modules. Once you edit values, \
                  it is no longer factory As-Built.",
        why_it_matters: &[
            "Used to restore modules to known factory-state values.",
            "Critical when replacing modules or recovering from bad edits.",
            "Many forum spreadsheets and comparisons are based on As-Built lines.",
        ],
        common_mistakes: &[
            "Treating As-Built as universal between different trims/years/modules.",
            "Editing raw hex without a backup and rollback plan.",
            "Assuming every visible block is safe user configuration data.",
        ],
        best_practices: &[
            "Export backup before any write and keep timestamped copies.",
            "Prefer human-readable Module Configuration over raw As-Built edits.",
            "Write one change at a time and rescan DTCs after each step.",
        ],
    },
    TopicExplanation {
        key: "abt",
        topic: "ABT Files",
        summary: "ABT is FORScan's module configuration backup/export format. \
                  Newer FORScan versions use an updated encoding for large block/line values.",
        why_it_matters: &[
            "ABT is your practical restore point before risky changes.",
            "Compatibility differs between old and new FORScan versions.",
            "Useful for offline comparison and change audits.",
        ],
        common_mistakes: &[
            "Opening old ABT tools against new-encoding ABT content without conversion.",
            "Confusing Motorcraft .AB files with FORScan .ABT backups.",
            "Relying on one backup copy only.",
        ],
        best_practices: &[
            "Keep both module-level ABT backups and a whole-session export.",
            "Version your ABT backups by VIN/module/date.",
            "Verify your restore path before making complex edits.",
        ],
    },
    TopicExplanation {
        key: "ecc",
        topic: "Economized Central Configuration (ECC)",
        summary: "ECC stores shared vehicle data used across multiple modules \
                  (for example VIN/tire size/axle ratio in newer platforms).",
        why_it_matters: &[
            "ECC changes can affect many modules at once.",
            "Post-change relearn/initialization may be required.",
            "Missed synchronization can trigger U2100/U2101-style faults.",
        ],
        common_mistakes: &[
            "Updating ECC values but skipping module initialization/relearn.",
            "Assuming only the edited module is impacted.",
            "Applying values copied from a different platform without validation.",
        ],
        best_practices: &[
            "Use official procedure notes for your exact platform and year.",
            "Run relearn synchronization after ECC writes if applicable.",
            "Baseline scan before change and compare DTC deltas after.",
        ],
    },
    TopicExplanation {
        key: "vid",
        topic: "PCM VID",
        summary: "VID (Vehicle Identification block) contains crucial PCM-related configuration \
                  and may require checksum-aware/special handling.",
        why_it_matters: &[
            "Incorrect VID edits can affect drivability and calibration behavior.",
            "Some older platforms may need special programming/update flow.",
            "Adapter capabilities and stable power become even more critical.",
        ],
        common_mistakes: &[
            "Treating VID like ordinary As-Built text edits.",
            "Using low-quality adapters for firmware-related operations.",
            "Attempting VID work without a fully verified fallback plan.",
        ],
        best_practices: &[
            "Use dedicated FORScan VID-related procedures where provided.",
            "Confirm adapter requirements before attempting changes.",
            "Do not proceed without power stabilization and complete backups.",
        ],
    },
    TopicExplanation {
        key: "trid",
        topic: "TCM TRID",
        summary: "TRID is transmission characterization data and is safety/drivability sensitive.",
        why_it_matters: &[
            "Checksum/protection and format constraints can apply.",
            "Bad changes can cause shifting or transmission behavior issues.",
            "Dedicated procedures are safer than raw block edits.",
        ],
        common_mistakes: &[
            "Editing TRID through generic As-Built workflows.",
            "Applying copied values without matching hardware/firmware context.",
            "Skipping post-operation validation drive cycles.",
        ],
        best_practices: &[
            "Use FORScan Transmission Characterization Update when applicable.",
            "Avoid experimentation in this area unless you have a clear recovery path.",
            "Validate with DTC checks and controlled test drive afterward.",
        ],
    },
];

pub fn normalize_topic(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

pub fn list_topics() -> Vec<&'static str> {
    let mut keys: Vec<_> = TOPICS.iter().map(|t| t.key).collect();
    keys.sort_unstable();
    keys
}

pub fn get_topic_explanation(topic: &str) -> Result<&'static TopicExplanation, HelperError> {
    let key = normalize_topic(topic);
    TOPICS
        .iter()
        .find(|t| t.key == key)
        .ok_or_else(|| HelperError::UnknownTopic {
            topic: topic.to_string(),
            available: list_topics().join(", "),
        })
}
