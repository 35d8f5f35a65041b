//! Convenience re-exports for the common case
//!
//! ```rust
//! use sheetgate::prelude::*;
//! ```

pub use crate::error::{Error, Result};
pub use crate::runner::{Comparer, RunConfig};
pub use sheetgate_core::{
    CellRegion, CellValue, CompareOptions, ComparisonOutcome, MemoryStore, Workbook,
    WorkbookHandle, WorkbookStore, Worksheet,
};
