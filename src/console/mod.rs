//! Console Module
//!
//! The interactive front end of the record book.
//!
//! ## Menu
//! ```text
//!   1  Add Student                      → Store::add
//!   2  Show All                         → Store::records
//!   3  Search (Linear Search - by Name) → Store::linear_search
//!   4  Search (Binary Search - by ID)   → Store::binary_search
//!   5  Sort by GPA (Shell Sort)         → Store::sort_by_gpa_desc
//!   6  Sort by Name (Merge Sort)        → Store::sort_by_name
//!   7  Save & Exit                      → Store::save
//! ```
//!
//! Anything else prints "Invalid choice." and shows the menu again.

mod menu;
mod session;

pub use menu::MenuChoice;
pub use session::Console;
