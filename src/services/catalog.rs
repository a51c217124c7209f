use crate::domain::errors::HelperError;
use crate::domain::models::BackupFileMetadata;
use chrono::{NaiveDate, NaiveDateTime};
use std::path::Path;

fn all_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_captured_at(date: &str, time: &str) -> Option<NaiveDateTime> {
    if !all_digits(date, 8) || !all_digits(time, 6) {
        return None;
    }
    let year: i32 = date[0..4].parse().ok()?;
    let month: u32 = date[4..6].parse().ok()?;
    let day: u32 = date[6..8].parse().ok()?;
    let hour: u32 = time[0..2].parse().ok()?;
    let minute: u32 = time[2..4].parse().ok()?;
    let second: u32 = time[4..6].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)
}

/// Splits `<VIN>_<SYSTEM>_<YYYYMMDD>_<HHMMSS>[...].<ext>` into metadata.
///
/// Returns `None` for names with fewer than four segments or an unparseable timestamp.
pub fn parse_backup_name(file_name: &str) -> Option<BackupFileMetadata> {
    let parts: Vec<&str> = file_name.split('_').collect();
    if parts.len() < 4 {
        return None;
    }
    let time = parts[3].split('.').next().unwrap_or_default();
    let captured_at = parse_captured_at(parts[2], time)?;
    Some(BackupFileMetadata {
        file_name: file_name.to_string(),
        vin: parts[0].to_string(),
        system: parts[1].to_string(),
        captured_at,
    })
}

/// Scans `dir` for backups with the given extension, newest capture first.
///
/// A missing directory (or a path that is not a directory) yields an empty listing.
pub fn list_backups(dir: &Path, extension: &str) -> Result<Vec<BackupFileMetadata>, HelperError> {
    if !dir.is_dir() {
        log::debug!("backup directory {} not present", dir.display());
        return Ok(vec![]);
    }

    let mut out = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| HelperError::io(dir, e))? {
        let entry = entry.map_err(|e| HelperError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        match parse_backup_name(name) {
            Some(meta) => out.push(meta),
            None => log::debug!("skipping malformed backup name: {}", name),
        }
    }

    Ok(sort_newest_first(out))
}

/// Stable: entries sharing a capture time keep their scan order.
pub fn sort_newest_first(mut listing: Vec<BackupFileMetadata>) -> Vec<BackupFileMetadata> {
    listing.sort_by(|a, b| b.captured_at.cmp(&a.captured_at));
    listing
}

/// Maps a 1-based user choice onto the listing.
pub fn select_backup<'a>(
    listing: &'a [BackupFileMetadata],
    input: &str,
) -> Result<&'a BackupFileMetadata, HelperError> {
    let raw = input.trim();
    let digits = raw.strip_prefix(|c| c == '+' || c == '-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HelperError::InvalidSelection(raw.to_string()));
    }
    let out_of_range = || HelperError::SelectionOutOfRange {
        choice: raw.to_string(),
        available: listing.len(),
    };
    // integers too wide for i64 are still integers, just never in range
    let index = raw
        .parse::<i64>()
        .ok()
        .and_then(|c| c.checked_sub(1))
        .and_then(|i| usize::try_from(i).ok())
        .ok_or_else(out_of_range)?;
    listing.get(index).ok_or_else(out_of_range)
}
