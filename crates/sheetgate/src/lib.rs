//! # sheetgate
//!
//! Spreadsheet acceptance testing: compare a generated ("actual") workbook
//! against a reference ("expected") workbook and, when they differ, write an
//! annotated copy of the actual workbook with every failing cell highlighted.
//!
//! Comparison is exact string equality per cell, walked over rectangular
//! regions. An expected cell holding the configured sentinel (default
//! `"N/A"`) is a "don't care" and is excluded entirely. The verdict carries an
//! error rate in whole percent and a per-cell diff message.
//!
//! ## Example
//!
//! ```rust
//! use sheetgate::prelude::*;
//!
//! let store = MemoryStore::new();
//!
//! let mut reference = Workbook::new();
//! reference.worksheet_mut(0).unwrap().set_value(2, 1, "X").unwrap();
//! store.insert("accept", "totals.xlsx", reference);
//!
//! let mut generated = Workbook::new();
//! generated.worksheet_mut(0).unwrap().set_value(2, 1, "Y").unwrap();
//! store.insert("out", "totals.xlsx", generated);
//!
//! let comparer = Comparer::new(store);
//! let run = RunConfig::new("totals", "out");
//! let outcome = comparer
//!     .compare_files("accept/totals.xlsx".as_ref(), "out/totals.xlsx".as_ref(), &run)
//!     .unwrap();
//!
//! assert!(!outcome.success);
//! assert_eq!(outcome.error_rate, 100);
//! assert!(outcome.message.contains("A2 Before: X After: Y"));
//! ```

pub mod error;
pub mod prelude;
pub mod report;
pub mod runner;

pub use error::{Error, Result};
pub use report::write_error_report;
pub use runner::{Comparer, RunConfig};

// Re-export core types
pub use sheetgate_core::{
    address,
    compare_region,
    compare_regions,
    CellComparison,
    CellNote,
    // Cell types
    CellValue,
    // Region and engine types
    CellRegion,
    Color,
    CompareOptions,
    ComparisonOutcome,
    MemoryStore,
    // Store contract
    StoreError,
    // Main types
    Workbook,
    WorkbookHandle,
    WorkbookLocator,
    WorkbookStore,
    Worksheet,
    MAX_COLS,
    // Constants
    MAX_ROWS,
};
