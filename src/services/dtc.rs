use crate::domain::constants::{GENERIC_DTC_SYSTEM, UNMAPPED_DTC_TITLE};
use crate::domain::errors::HelperError;
use crate::domain::models::{CodeLookup, DtcInfo, SafetyTier};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

fn entry(
    code: &str,
    title: &str,
    system: &str,
    severity: SafetyTier,
    likely_causes: [&str; 3],
    recommended_steps: [&str; 3],
) -> (String, DtcInfo) {
    (
        code.to_string(),
        DtcInfo {
            code: code.to_string(),
            title: title.to_string(),
            system: system.to_string(),
            severity,
            likely_causes: likely_causes.iter().map(|s| s.to_string()).collect(),
            recommended_steps: recommended_steps.iter().map(|s| s.to_string()).collect(),
        },
    )
}

static KNOWN_DTCS: Lazy<BTreeMap<String, DtcInfo>> = Lazy::new(|| {
    BTreeMap::from([
        entry(
            "P0420",
            "Catalyst System Efficiency Below Threshold (Bank 1)",
            "Powertrain",
            SafetyTier::Medium,
            [
                "Aging catalytic converter",
                "Exhaust leak upstream of catalyst",
                "O2 sensor drift or wiring issue",
            ],
            [
                "Confirm no exhaust leaks before replacing parts",
                "Capture live O2 sensor data before and after catalyst",
                "Address fuel trim or misfire issues first",
            ],
        ),
        entry(
            "P0171",
            "System Too Lean (Bank 1)",
            "Powertrain",
            SafetyTier::High,
            [
                "Vacuum leak",
                "Low fuel pressure",
                "MAF sensor contamination",
            ],
            [
                "Inspect intake and vacuum hoses",
                "Check fuel pressure against Ford spec",
                "Review STFT/LTFT under idle and load",
            ],
        ),
        entry(
            "U0121",
            "Lost Communication With Anti-Lock Brake System Module",
            "Network",
            SafetyTier::High,
            [
                "ABS module power/ground issue",
                "CAN bus wiring fault",
                "Intermittent module failure",
            ],
            [
                "Run network test with ignition state noted",
                "Verify ABS module power and grounds under load",
                "Check CAN high/low resistance and continuity",
            ],
        ),
        entry(
            "B10D7",
            "Key Transponder Signal Fault",
            "Body",
            SafetyTier::Medium,
            [
                "Weak key battery",
                "Antenna ring issue",
                "PATS programming mismatch",
            ],
            [
                "Test with a second known-good key",
                "Inspect PATS antenna connector",
                "Check recent key programming history",
            ],
        ),
    ])
});

/// Drops every non-alphanumeric character and uppercases the rest.
pub fn normalize_dtc(code: &str) -> String {
    code.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

pub fn infer_system_from_dtc(code: &str) -> &'static str {
    code.chars()
        .next()
        .and_then(|first| {
            GENERIC_DTC_SYSTEM
                .iter()
                .find(|(letter, _)| *letter == first)
                .map(|(_, system)| *system)
        })
        .unwrap_or("Unknown")
}

/// One of `P`, `B`, `C`, `U` followed by exactly four uppercase hex digits.
fn matches_generic_pattern(code: &str) -> bool {
    let mut chars = code.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let rest = chars.as_str();
    matches!(first, 'P' | 'B' | 'C' | 'U')
        && rest.len() == 4
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}

pub fn decode_dtc(code: &str) -> Result<CodeLookup, HelperError> {
    let normalized = normalize_dtc(code);
    if let Some(known) = KNOWN_DTCS.get(&normalized) {
        return Ok(CodeLookup::Known(known.clone()));
    }

    if !matches_generic_pattern(&normalized) {
        return Err(HelperError::InvalidCodeFormat(code.to_string()));
    }

    Ok(CodeLookup::Inferred(DtcInfo {
        system: infer_system_from_dtc(&normalized).to_string(),
        code: normalized,
        title: UNMAPPED_DTC_TITLE.to_string(),
        severity: SafetyTier::Medium,
        likely_causes: vec!["Code not yet mapped in local knowledge base".to_string()],
        recommended_steps: vec![
            "Capture freeze frame data".to_string(),
            "Use FORScan service function tests for affected module".to_string(),
            "Consult Ford service documentation for this exact code".to_string(),
        ],
    }))
}

#[cfg(test)]
mod tests {
    use super::{decode_dtc, normalize_dtc, KNOWN_DTCS};
    use crate::domain::errors::HelperError;
    use crate::domain::models::SafetyTier;

    #[test]
    fn decodes_known_code() {
        let decoded = decode_dtc("P0171").expect("known");
        assert!(decoded.is_known());
        let info = decoded.info();
        assert_eq!(info.code, "P0171");
        assert_eq!(info.system, "Powertrain");
        assert_eq!(info.severity, SafetyTier::High);
    }

    #[test]
    fn known_lookup_normalizes_input() {
        let decoded = decode_dtc(" u0-121 ").expect("known");
        assert!(decoded.is_known());
        assert_eq!(decoded.info().code, "U0121");
    }

    #[test]
    fn infers_unmapped_but_valid_code() {
        let decoded = decode_dtc("c1234").expect("inferred");
        assert!(!decoded.is_known());
        let info = decoded.info();
        assert_eq!(info.code, "C1234");
        assert_eq!(info.title, "Unknown/Unmapped DTC");
        assert_eq!(info.system, "Chassis");
        assert_eq!(info.severity, SafetyTier::Medium);
        assert_eq!(info.recommended_steps.len(), 3);
    }

    #[test]
    fn system_letter_mapping() {
        assert_eq!(decode_dtc("P1ABC").expect("ok").info().system, "Powertrain");
        assert_eq!(decode_dtc("B0001").expect("ok").info().system, "Body");
        assert_eq!(decode_dtc("U3FFF").expect("ok").info().system, "Network");
    }

    #[test]
    fn rejects_invalid_format_with_original_input() {
        let err = decode_dtc("NOT-A-DTC").expect_err("invalid");
        assert!(matches!(&err, HelperError::InvalidCodeFormat(raw) if raw == "NOT-A-DTC"));
        assert_eq!(err.to_string(), "Invalid DTC format: NOT-A-DTC");

        for bad in ["", "P123", "P12345", "X1234", "P12G4"] {
            assert!(decode_dtc(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["p0-171", "  U 0121 ", "NOT-A-DTC", "", "ß12é4", "b10d7"] {
            let once = normalize_dtc(raw);
            assert_eq!(normalize_dtc(&once), once);
        }
        assert_eq!(normalize_dtc("p0-171"), "P0171");
    }

    #[test]
    fn table_keys_are_canonical() {
        for (code, info) in KNOWN_DTCS.iter() {
            assert_eq!(&normalize_dtc(code), code);
            assert_eq!(&info.code, code);
        }
    }
}
