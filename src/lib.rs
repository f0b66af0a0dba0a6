//! # recordbook
//!
//! A console record book for student academic records with:
//! - Validated GPA (0.0 - 4.0) behind a private field
//! - Plain-text persistence, one comma-separated line per record
//! - Linear search by name and binary search by id
//! - Bubble, shell and merge sort over the live collection
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Console                                │
//! │                (Menu loop, stdin/stdout)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Store                                 │
//! │             (Ordered Vec<Record>, load/save)                 │
//! └──────┬──────────────────────┬──────────────────────┬────────┘
//!        │                      │                      │
//!        ▼                      ▼                      ▼
//!   ┌─────────┐           ┌──────────┐           ┌──────────┐
//!   │ Search  │           │   Sort   │           │  Codec   │
//!   │lin / bin│           │bub/sh/mrg│           │ (lines)  │
//!   └─────────┘           └──────────┘           └────┬─────┘
//!                                                     │
//!                                                     ▼
//!                                               ┌──────────┐
//!                                               │data file │
//!                                               └──────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod codec;
pub mod search;
pub mod sort;
pub mod store;
pub mod console;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RecordError, Result};
pub use config::Config;
pub use record::{Describe, Record};
pub use store::{LoadReport, Store};
pub use console::Console;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of recordbook
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
