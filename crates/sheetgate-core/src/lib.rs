//! # sheetgate-core
//!
//! Core data structures and the comparison engine for sheetgate.
//!
//! This crate provides the fundamental types used throughout sheetgate:
//! - [`CellValue`] and [`CellNote`] - cell contents and annotations
//! - [`Workbook`], [`Worksheet`] - the in-memory document model backends read into
//! - [`CellRegion`] - a rectangular range of cells to examine
//! - [`compare_regions`] - per-cell comparison of two worksheets
//! - [`ComparisonOutcome`] - the aggregated pass/fail verdict
//! - [`WorkbookStore`] - the contract a spreadsheet backend implements
//!
//! ## Example
//!
//! ```rust
//! use sheetgate_core::{compare_regions, CellRegion, CompareOptions, ComparisonOutcome, Worksheet};
//!
//! let mut expected = Worksheet::new("Report");
//! expected.set_value(2, 1, "X").unwrap();
//! let mut actual = Worksheet::new("Report");
//! actual.set_value(2, 1, "Y").unwrap();
//!
//! let region = CellRegion::new(2, 1, 1, 1).unwrap();
//! let mut records = compare_regions(&[region], &expected, &actual, &CompareOptions::default());
//! let outcome = ComparisonOutcome::aggregate(&mut records);
//! assert!(!outcome.success);
//! assert_eq!(outcome.error_rate, 100);
//! ```

pub mod address;
pub mod cell;
pub mod color;
pub mod compare;
pub mod error;
pub mod outcome;
pub mod region;
pub mod store;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{CellNote, CellValue};
pub use color::Color;
pub use compare::{compare_region, compare_regions, CellComparison, CompareOptions};
pub use error::{Error, Result};
pub use outcome::ComparisonOutcome;
pub use region::CellRegion;
pub use store::{MemoryStore, StoreError, WorkbookHandle, WorkbookLocator, WorkbookStore};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

/// Maximum number of rows in a worksheet (Excel limit, 1-based)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit, 1-based)
pub const MAX_COLS: u16 = 16_384;
