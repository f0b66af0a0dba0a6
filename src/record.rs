//! Student Record
//!
//! A single student's academic data.
//!
//! ## Invariants
//! - `gpa` is always within [`GPA_MIN`, `GPA_MAX`]. The field is private and
//!   only changes through [`Record::set_gpa`] / [`Record::set_gpa_text`].
//! - `id` is kept as text. Every comparison on it is a string comparison,
//!   so `"9" > "10"`.

use std::fmt;

use crate::error::{RecordError, Result};

/// Lowest accepted GPA
pub const GPA_MIN: f64 = 0.0;

/// Highest accepted GPA
pub const GPA_MAX: f64 = 4.0;

/// Column width the name is padded to in [`Record::describe`]
pub const NAME_DISPLAY_WIDTH: usize = 20;

/// Anything that can render a one-line summary of itself
pub trait Describe {
    fn describe(&self) -> String;
}

/// One student's record
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub name: String,

    /// Student number, digits only (checked at entry time, see [`is_valid_id`])
    pub id: String,

    pub major: String,

    gpa: f64,
}

impl Record {
    /// Create a record with a GPA of 0.0
    pub fn new(name: impl Into<String>, id: impl Into<String>, major: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            major: major.into(),
            gpa: GPA_MIN,
        }
    }

    /// Current GPA
    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    /// Assign the GPA if it lies within [0.0, 4.0]
    ///
    /// On error the previous value is kept.
    pub fn set_gpa(&mut self, value: f64) -> Result<()> {
        // NaN fails the range check as well
        if !(GPA_MIN..=GPA_MAX).contains(&value) {
            return Err(RecordError::GpaOutOfRange(value));
        }
        self.gpa = value;
        Ok(())
    }

    /// Parse `raw` as a float and assign it through [`Record::set_gpa`]
    ///
    /// Returns `InvalidGpaFormat` when the text is not a number and
    /// `GpaOutOfRange` when it is outside [0.0, 4.0]. Either way the
    /// previous value is kept.
    pub fn set_gpa_text(&mut self, raw: &str) -> Result<()> {
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| RecordError::InvalidGpaFormat(raw.to_string()))?;
        self.set_gpa(value)
    }
}

impl Describe for Record {
    fn describe(&self) -> String {
        format!(
            "ID: {} | Name: {:<width$} | Major: {} | GPA: {}",
            self.id,
            self.name,
            self.major,
            format_gpa(self.gpa),
            width = NAME_DISPLAY_WIDTH
        )
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Check that a student number is non-empty and made of ASCII digits only
pub fn is_valid_id(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Render a GPA as the shortest text that parses back to the same value,
/// always with a fractional part ("4.0", not "4")
pub fn format_gpa(value: f64) -> String {
    // Debug formatting of f64 keeps the ".0" that Display drops
    format!("{:?}", value)
}
