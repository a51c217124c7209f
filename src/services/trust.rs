use crate::domain::models::{SourceEvidence, TrustReport};

pub const OFFICIAL_SOURCES: [SourceEvidence; 6] = [
    SourceEvidence {
        title: "FORScan Home",
        url: "https://forscan.org/home.html",
        category: "official",
        last_checked: "2026-02-21",
        notes: "Core feature, adapter, and platform support statements.",
    },
    SourceEvidence {
        title: "FORScan Products and Release Notes",
        url: "https://forscan.org/download.html",
        category: "official",
        last_checked: "2026-02-21",
        notes: "Current versions and recent release history.",
    },
    SourceEvidence {
        title: "FORScan Documentation Hub",
        url: "https://forscan.org/documentation.html",
        category: "official",
        last_checked: "2026-02-21",
        notes: "Docs entrypoint; notes that v2 docs are in progress.",
    },
    SourceEvidence {
        title: "FORScan HowTo",
        url: "https://forscan.org/howto.html",
        category: "official",
        last_checked: "2026-02-21",
        notes: "Legacy links and redirects to forum-based procedures.",
    },
    SourceEvidence {
        title: "FORScan Supported Modules",
        url: "https://forscan.org/modules_list.html",
        category: "official",
        last_checked: "2026-02-21",
        notes: "Large module abbreviation reference useful for tooling.",
    },
    SourceEvidence {
        title: "FORScan Forum Configuration Guidance",
        url: "https://forscan.org/forum/viewtopic.php?f=16&t=17208",
        category: "official-community",
        last_checked: "2026-02-21",
        notes: "Pinned practical guidance for module configuration workflows.",
    },
];

const STRENGTHS: [&str; 3] = [
    "Primary project website and long-term publication history are available.",
    "Current release notes show active maintenance (v2.3.70 referenced).",
    "Support, documentation, and forum channels are clearly linked.",
];

/// Each caveat carries the score penalty it applies.
const CAVEATS: [(&str, u32); 3] = [
    (
        "Documentation for FORScan v2 is incomplete on static docs pages.",
        10,
    ),
    (
        "Some HowTo material has moved to forum posts, so procedures can fragment.",
        5,
    ),
    (
        "Vehicle support for newest model years is marked best-effort.",
        5,
    ),
];

pub fn verdict_for_score(score: u32) -> &'static str {
    if score >= 85 {
        "high-confidence with normal technical caution"
    } else if score >= 70 {
        "moderate-confidence, verify per-vehicle before writes"
    } else {
        "low-confidence, do not use without independent validation"
    }
}

pub fn build_trust_report() -> TrustReport {
    let penalty: u32 = CAVEATS.iter().map(|(_, p)| p).sum();
    let score = 100u32.saturating_sub(penalty);

    TrustReport {
        legitimacy_score: score,
        verdict: verdict_for_score(score).to_string(),
        strengths: STRENGTHS.iter().map(|s| s.to_string()).collect(),
        caveats: CAVEATS.iter().map(|(c, _)| c.to_string()).collect(),
        sources: OFFICIAL_SOURCES.to_vec(),
    }
}
