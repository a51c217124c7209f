pub const DEFAULT_BACKUP_DIR: &str = "abt";
pub const DEFAULT_BACKUP_EXTENSION: &str = "abt";
pub const DEFAULT_CSV_OUT: &str = "output_file.csv";

/// Module abbreviations treated as safety-critical when no config override exists.
pub const DEFAULT_SAFETY_CRITICAL_MODULES: [&str; 6] = ["pcm", "tcm", "abs", "rcm", "eps", "srs"];

pub const MIN_PAYLOAD_LEN: usize = 8;

/// `(offset, name, interpretation)` for each little-endian u32 read from a backup payload.
pub const PAYLOAD_FIELDS: [(usize, &str, &str); 2] = [
    (0, "first_uint32", "Primary sample value"),
    (4, "second_uint32", "Secondary sample value"),
];

pub const GENERIC_DTC_SYSTEM: [(char, &str); 4] = [
    ('P', "Powertrain"),
    ('B', "Body"),
    ('C', "Chassis"),
    ('U', "Network"),
];

pub const UNMAPPED_DTC_TITLE: &str = "Unknown/Unmapped DTC";
