//! Record line codec
//!
//! Encoding and decoding of records for the data file.
//!
//! ## Line Format
//! ```text
//! ┌────────┬───┬──────┬───┬─────────┬───┬───────┐
//! │  name  │ , │  id  │ , │  major  │ , │  gpa  │
//! └────────┴───┴──────┴───┴─────────┴───┴───────┘
//! ```
//!
//! Fields are joined with a bare comma. Nothing is quoted or escaped, so a
//! name or major containing a comma produces a line that no longer decodes.

use crate::error::{RecordError, Result};
use crate::record::{format_gpa, Record};

/// Field separator
pub const DELIMITER: char = ',';

/// Number of fields in a well-formed line
pub const FIELD_COUNT: usize = 4;

/// Encode a record as one line (without the trailing newline)
pub fn encode(record: &Record) -> String {
    format!(
        "{name}{d}{id}{d}{major}{d}{gpa}",
        name = record.name,
        id = record.id,
        major = record.major,
        gpa = format_gpa(record.gpa()),
        d = DELIMITER
    )
}

/// Decode a record from one line
///
/// Only the line terminator is stripped, so leading or trailing spaces in
/// the name and major survive a round trip. Fails with `MalformedLine`
/// unless the line splits into exactly four fields.
/// A bad GPA field does not fail the line: it is logged and the record
/// keeps a GPA of 0.0.
pub fn decode(line: &str) -> Result<Record> {
    let fields: Vec<&str> = line
        .trim_end_matches(['\n', '\r'])
        .split(DELIMITER)
        .collect();

    let [name, id, major, gpa] = fields.as_slice() else {
        return Err(RecordError::MalformedLine {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    };

    let mut record = Record::new(*name, *id, *major);
    if let Err(e) = record.set_gpa_text(gpa) {
        tracing::warn!("Record {} has a rejected GPA, keeping 0.0: {}", record.id, e);
    }

    Ok(record)
}
