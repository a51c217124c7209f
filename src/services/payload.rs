use crate::domain::constants::{MIN_PAYLOAD_LEN, PAYLOAD_FIELDS};
use crate::domain::errors::HelperError;
use crate::domain::models::DecodedRecord;
use std::io::Read;
use std::path::Path;

/// Decodes the two documented little-endian u32 fields at the start of a backup payload.
/// Bytes past offset 8 are not interpreted.
pub fn decode_payload(payload: &[u8]) -> Result<Vec<DecodedRecord>, HelperError> {
    if payload.len() < MIN_PAYLOAD_LEN {
        return Err(HelperError::PayloadTooShort { len: payload.len() });
    }

    let mut records = Vec::with_capacity(PAYLOAD_FIELDS.len());
    for (offset, name, interpretation) in PAYLOAD_FIELDS {
        let mut word = [0u8; 4];
        word.copy_from_slice(&payload[offset..offset + 4]);
        records.push(DecodedRecord {
            byte_offset: offset,
            field_name: name.to_string(),
            value: u32::from_le_bytes(word),
            interpretation: interpretation.to_string(),
        });
    }
    Ok(records)
}

pub fn read_backup_file(path: &Path) -> Result<Vec<DecodedRecord>, HelperError> {
    let payload = {
        let mut file = std::fs::File::open(path).map_err(|e| HelperError::io(path, e))?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)
            .map_err(|e| HelperError::io(path, e))?;
        buf
    };
    log::debug!("read {} bytes from {}", payload.len(), path.display());
    decode_payload(&payload)
}
