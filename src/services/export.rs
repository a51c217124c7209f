use crate::domain::errors::HelperError;
use crate::domain::models::DecodedRecord;
use std::path::Path;

pub fn render_csv(records: &[DecodedRecord]) -> anyhow::Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(["offset", "name", "value", "interpretation"])?;
    for r in records {
        writer.write_record([
            r.byte_offset.to_string(),
            r.field_name.clone(),
            r.value.to_string(),
            r.interpretation.clone(),
        ])?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

pub fn render_json(records: &[DecodedRecord]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub fn render_jsonl(records: &[DecodedRecord]) -> anyhow::Result<String> {
    let mut out = String::new();
    for r in records {
        out.push_str(&serde_json::to_string(r)?);
        out.push('\n');
    }
    Ok(out)
}

fn write_export(path: &Path, body: &str, kind: &str) -> anyhow::Result<()> {
    std::fs::write(path, body).map_err(|e| HelperError::io(path, e))?;
    log::info!("wrote {} export to {}", kind, path.display());
    Ok(())
}

pub fn write_csv(records: &[DecodedRecord], path: &Path) -> anyhow::Result<()> {
    write_export(path, &render_csv(records)?, "csv")
}

pub fn write_json(records: &[DecodedRecord], path: &Path) -> anyhow::Result<()> {
    write_export(path, &render_json(records)?, "json")
}

pub fn write_jsonl(records: &[DecodedRecord], path: &Path) -> anyhow::Result<()> {
    write_export(path, &render_jsonl(records)?, "jsonl")
}
