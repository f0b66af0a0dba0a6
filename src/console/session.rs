//! Console Session
//!
//! Runs the interactive menu loop against a store.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::error::{RecordError, Result};
use crate::record::{is_valid_id, Describe, Record, GPA_MIN};
use crate::store::Store;

use super::MenuChoice;

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// An interactive session over any line-based input and output
///
/// The binary wires this to stdin/stdout; tests use in-memory buffers.
pub struct Console<R, W> {
    store: Store,
    config: Config,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a session that owns `store`
    pub fn new(store: Store, config: Config, input: R, output: W) -> Self {
        Self {
            store,
            config,
            input,
            output,
        }
    }

    /// Run the menu loop until "save and exit" or end of input
    ///
    /// Invalid choices and bad field input never end the loop. A failure to
    /// save (or to write to the output) is returned to the caller.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.prompt("Choose menu: ")? else {
                tracing::info!("End of input, leaving without saving");
                return Ok(());
            };

            let flow = match MenuChoice::parse(&line) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    writeln!(self.output, "Invalid choice.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        tracing::debug!("Menu choice: {:?}", choice);
        match choice {
            MenuChoice::Add => self.add_record(),
            MenuChoice::List => self.list_records().map(|_| Flow::Continue),
            MenuChoice::SearchByName => self.search_by_name(),
            MenuChoice::SearchById => self.search_by_id(),
            MenuChoice::SortByGpa => self.sort_by_gpa().map(|_| Flow::Continue),
            MenuChoice::SortByName => self.sort_by_name().map(|_| Flow::Continue),
            MenuChoice::SaveAndExit => self.save_and_exit(),
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    fn add_record(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n--- Add Student ---")?;

        let Some(name) = self.prompt("Name: ")? else {
            return Ok(Flow::Exit);
        };

        let id = loop {
            let Some(id) = self.prompt("ID (digits only): ")? else {
                return Ok(Flow::Exit);
            };
            if is_valid_id(&id) {
                break id;
            }
            writeln!(self.output, "Invalid ID! Digits only.")?;
        };

        let Some(major) = self.prompt("Major: ")? else {
            return Ok(Flow::Exit);
        };

        let Some(gpa_text) = self.prompt("GPA (0.0 - 4.0): ")? else {
            return Ok(Flow::Exit);
        };
        let gpa = match gpa_text.trim().parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                writeln!(self.output, "Invalid GPA input, using 0.0")?;
                GPA_MIN
            }
        };

        let mut record = Record::new(name, id, major);
        if let Err(e) = record.set_gpa(gpa) {
            self.report_gpa_error(&e)?;
        }

        self.store.add(record);
        writeln!(self.output, "Record added!")?;
        Ok(Flow::Continue)
    }

    fn list_records(&mut self) -> Result<()> {
        let rule = "=".repeat(self.config.rule_width);
        writeln!(self.output, "\n{}", rule)?;
        writeln!(self.output, "STUDENT LIST (Total: {})", self.store.len())?;
        writeln!(self.output, "{}", rule)?;

        if self.store.is_empty() {
            writeln!(self.output, "(No data)")?;
        } else {
            for (i, record) in self.store.records().iter().enumerate() {
                writeln!(self.output, "{}. {}", i + 1, record.describe())?;
            }
        }
        Ok(())
    }

    fn search_by_name(&mut self) -> Result<Flow> {
        let Some(query) = self.prompt("Enter the name to search for: ")? else {
            return Ok(Flow::Exit);
        };

        writeln!(self.output, "\nLinear search results:")?;
        let matches = self.store.linear_search(&query);
        for record in &matches {
            writeln!(self.output, "-> FOUND: {}", record.describe())?;
        }
        if matches.is_empty() {
            writeln!(self.output, "Not found.")?;
        }
        Ok(Flow::Continue)
    }

    fn search_by_id(&mut self) -> Result<Flow> {
        writeln!(self.output, "Sorting records by ID first...")?;
        self.store.sort_by_id();

        let Some(target) = self.prompt("Enter the ID to search for: ")? else {
            return Ok(Flow::Exit);
        };

        // The store is already in id order, so the search's own sort is a no-op pass
        match self.store.binary_search(&target) {
            Some(record) => {
                let line = record.describe();
                writeln!(self.output, "-> FOUND: {}", line)?;
            }
            None => writeln!(self.output, "ID not found.")?,
        }
        Ok(Flow::Continue)
    }

    fn sort_by_gpa(&mut self) -> Result<()> {
        writeln!(self.output, "Running Shell Sort by GPA...")?;
        self.store.sort_by_gpa_desc();
        writeln!(self.output, "Records sorted by GPA (highest -> lowest)")?;
        Ok(())
    }

    fn sort_by_name(&mut self) -> Result<()> {
        writeln!(self.output, "Running Merge Sort by Name...")?;
        self.store.sort_by_name();
        writeln!(self.output, "Records sorted by Name (A-Z)")?;
        Ok(())
    }

    fn save_and_exit(&mut self) -> Result<Flow> {
        self.store.save(&self.config.data_file)?;
        writeln!(self.output, "Data saved to file.")?;
        writeln!(self.output, "Thank you!")?;
        Ok(Flow::Exit)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== STUDENT RECORD BOOK ===")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice as u8, choice.label())?;
        }
        Ok(())
    }

    /// Print `message` and read one line, without its line terminator
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn report_gpa_error(&mut self, error: &RecordError) -> Result<()> {
        match error {
            RecordError::GpaOutOfRange(_) => {
                writeln!(self.output, "Error: GPA must be between 0.0 and 4.0")?
            }
            _ => writeln!(self.output, "Error: GPA must be a number.")?,
        }
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The store this session works on
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// The session configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// End the session and hand back the store
    pub fn into_store(self) -> Store {
        self.store
    }
}
