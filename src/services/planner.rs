use crate::domain::constants::DEFAULT_SAFETY_CRITICAL_MODULES;
use crate::domain::models::{ChangePlan, SafetyTier};
use std::collections::HashSet;

const PRE_CHECKS: [&str; 4] = [
    "Connect stable battery maintainer before any write",
    "Save full module backup (As-Built and plain-text export)",
    "Scan all modules and export baseline DTC report",
    "Verify ignition state and network stability",
];

const ROLLBACK_STEPS: [&str; 3] = [
    "If behavior regresses, restore previous value immediately",
    "If communication faults appear, write original As-Built backup",
    "Clear DTCs only after root cause is addressed and repair is verified",
];

const BASE_WARNINGS: [&str; 2] = [
    "This tool does not perform writes to the vehicle.",
    "Always validate against official Ford service data before programming.",
];

pub const SAFETY_CRITICAL_WARNING: &str =
    "Safety-critical module detected: use OEM procedure and do not proceed without backup power.";

fn module_key(module: &str) -> String {
    module.trim().to_lowercase()
}

pub struct ChangePlanner {
    critical_modules: HashSet<String>,
}

impl Default for ChangePlanner {
    fn default() -> Self {
        Self::new(DEFAULT_SAFETY_CRITICAL_MODULES)
    }
}

impl ChangePlanner {
    pub fn new<I, S>(critical_modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            critical_modules: critical_modules
                .into_iter()
                .map(|m| module_key(m.as_ref()))
                .filter(|m| !m.is_empty())
                .collect(),
        }
    }

    pub fn safety_tier(&self, module: &str) -> SafetyTier {
        if self.critical_modules.contains(&module_key(module)) {
            SafetyTier::High
        } else {
            SafetyTier::Medium
        }
    }

    /// Builds the checklist. Inputs are interpolated verbatim into the execution steps.
    pub fn plan(
        &self,
        module: &str,
        parameter: &str,
        current_value: &str,
        target_value: &str,
    ) -> ChangePlan {
        let safety_tier = self.safety_tier(module);

        let execution_steps = vec![
            format!("Open {module} in FORScan Configuration and Programming"),
            format!("Locate parameter '{parameter}' and confirm current value '{current_value}'"),
            format!("Apply target value '{target_value}'"),
            "Perform module reset/relearn if prompted by FORScan".to_string(),
            "Rescan DTCs and validate no new faults".to_string(),
        ];

        let mut warnings: Vec<String> = BASE_WARNINGS.iter().map(|w| w.to_string()).collect();
        if safety_tier == SafetyTier::High {
            warnings.push(SAFETY_CRITICAL_WARNING.to_string());
        }

        ChangePlan {
            module: module.to_string(),
            parameter: parameter.to_string(),
            current_value: current_value.to_string(),
            target_value: target_value.to_string(),
            safety_tier,
            pre_checks: PRE_CHECKS.iter().map(|s| s.to_string()).collect(),
            execution_steps,
            rollback_steps: ROLLBACK_STEPS.iter().map(|s| s.to_string()).collect(),
            warnings,
        }
    }
}
