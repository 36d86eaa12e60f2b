use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{ContactError, ContactResult};
use crate::model::Contact;

/// Reads the contacts file. Returns `Ok(None)` when the file does not exist.
pub fn read(path: &Path) -> ContactResult<Option<Vec<Contact>>> {
    let json_str = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ContactError::Read {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let mut records: Vec<Contact> =
        serde_json::from_str(&json_str).map_err(|e| ContactError::Malformed {
            path: path.to_path_buf(),
            source: e,
        })?;

    if let Some(index) = records.iter().position(|c| c.name.trim().is_empty()) {
        return Err(ContactError::BlankRecordName {
            path: path.to_path_buf(),
            index,
        });
    }

    for record in &mut records {
        record.name = record.name.trim().to_string();
    }

    Ok(Some(records))
}

/// Overwrites the contacts file with `contacts` as a JSON array, indented by four spaces.
pub fn write<'a>(path: &Path, contacts: impl IntoIterator<Item = &'a Contact>) -> ContactResult<()> {
    let records: Vec<&Contact> = contacts.into_iter().collect();

    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut ser).map_err(|e| ContactError::Save {
        path: path.to_path_buf(),
        source: e.into(),
    })?;

    std::fs::write(path, buf).map_err(|e| ContactError::Save {
        path: path.to_path_buf(),
        source: e,
    })
}
