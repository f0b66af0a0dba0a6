//! Store Module
//!
//! The in-memory record collection and its data file.
//!
//! ## Responsibilities
//! - Keep records in insertion order until a sort reorders them
//! - Load the collection from the data file, skipping malformed lines
//! - Save the collection back, one line per record, in current order
//! - Route search and sort requests to their algorithms
//!
//! ## Lifecycle
//! ```text
//!   Store::new() ──► load(path) ──► add / search / sort ... ──► save(path)
//!    (empty)        (replace all)       (in place)             (overwrite)
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::codec;
use crate::error::Result;
use crate::record::Record;
use crate::search;
use crate::sort;

/// Outcome of [`Store::load`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Whether the data file existed
    pub file_found: bool,

    /// Number of records decoded and kept
    pub loaded: usize,

    /// Number of lines dropped as malformed
    pub skipped: usize,
}

/// Ordered collection of student records
#[derive(Debug, Default, Clone)]
pub struct Store {
    records: Vec<Record>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Load records from `path`
    ///
    /// A missing file is not an error: the current collection is left as it
    /// is. Otherwise the collection is replaced by the decoded lines, with
    /// malformed lines (wrong field count, not UTF-8) dropped.
    pub fn load(&mut self, path: &Path) -> Result<LoadReport> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No data file at {}, keeping current records", path.display());
                return Ok(LoadReport::default());
            }
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        let mut skipped = 0;

        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            // A line that is not UTF-8 is malformed like any other bad line
            let decoded = match std::str::from_utf8(&buf) {
                Ok(line) => codec::decode(line),
                Err(e) => {
                    tracing::debug!("Skipping line {} of {}: {}", line_no, path.display(), e);
                    skipped += 1;
                    continue;
                }
            };

            match decoded {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::debug!("Skipping line {} of {}: {}", line_no, path.display(), e);
                    skipped += 1;
                }
            }
        }

        let report = LoadReport {
            file_found: true,
            loaded: records.len(),
            skipped,
        };
        tracing::info!(
            "Loaded {} records from {} ({} skipped)",
            report.loaded,
            path.display(),
            report.skipped
        );

        self.records = records;
        Ok(report)
    }

    /// Overwrite `path` with the current records, one line each
    ///
    /// Not atomic: a crash mid-write leaves a partial file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        for record in &self.records {
            writeln!(writer, "{}", codec::encode(record))?;
        }
        writer.flush()?;

        tracing::info!("Saved {} records to {}", self.records.len(), path.display());
        Ok(())
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Append a record. Duplicate ids are allowed.
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Records whose name contains `query`, ignoring case
    pub fn linear_search(&self, query: &str) -> Vec<&Record> {
        search::linear_search(&self.records, query)
    }

    /// Sort by id, then binary search for `target_id`
    ///
    /// The sort by id stays in effect after the call.
    pub fn binary_search(&mut self, target_id: &str) -> Option<&Record> {
        search::binary_search(&mut self.records, target_id)
    }

    // =========================================================================
    // Sort
    // =========================================================================

    /// Reorder ascending by id (string order)
    pub fn sort_by_id(&mut self) {
        sort::bubble_sort_by_id(&mut self.records);
    }

    /// Reorder descending by GPA
    pub fn sort_by_gpa_desc(&mut self) {
        sort::shell_sort_by_gpa_desc(&mut self.records);
    }

    /// Replace the sequence with a copy sorted ascending by name, ignoring case
    pub fn sort_by_name(&mut self) {
        let records = std::mem::take(&mut self.records);
        self.records = sort::merge_sort_by_name(records);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Records in current order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Record> for Store {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
