//! Menu definitions
//!
//! Represents the choices a user can type at the main prompt.

/// A parsed menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuChoice {
    /// Add a student
    Add = 1,

    /// Show all records
    List = 2,

    /// Linear search by name
    SearchByName = 3,

    /// Binary search by id
    SearchById = 4,

    /// Shell sort by GPA, highest first
    SortByGpa = 5,

    /// Merge sort by name, A to Z
    SortByName = 6,

    /// Save and exit
    SaveAndExit = 7,
}

impl MenuChoice {
    /// Every choice, in menu order
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Add,
        MenuChoice::List,
        MenuChoice::SearchByName,
        MenuChoice::SearchById,
        MenuChoice::SortByGpa,
        MenuChoice::SortByName,
        MenuChoice::SaveAndExit,
    ];

    /// Parse what the user typed. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::List),
            "3" => Some(MenuChoice::SearchByName),
            "4" => Some(MenuChoice::SearchById),
            "5" => Some(MenuChoice::SortByGpa),
            "6" => Some(MenuChoice::SortByName),
            "7" => Some(MenuChoice::SaveAndExit),
            _ => None,
        }
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Student",
            MenuChoice::List => "Show All",
            MenuChoice::SearchByName => "Search (Linear Search - by Name)",
            MenuChoice::SearchById => "Search (Binary Search - by ID)",
            MenuChoice::SortByGpa => "Sort by GPA (Shell Sort)",
            MenuChoice::SortByName => "Sort by Name (Merge Sort)",
            MenuChoice::SaveAndExit => "Save & Exit",
        }
    }
}
