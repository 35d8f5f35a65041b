//! Rectangular cell regions

use std::fmt;

use crate::address::{cell_name, parse_cell_ref};
use crate::error::{Error, Result};
use crate::worksheet::Worksheet;

/// A rectangular range of cells to examine, anchored at a 1-based offset.
///
/// `rows`/`cols` are extents and may be zero (an empty region compares no
/// cells). The cell at relative position `(i, j)` has the absolute address
/// `(row_offset + i, col_offset + j)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRegion {
    /// First row of the region (1-based)
    pub row_offset: u32,
    /// First column of the region (1-based)
    pub col_offset: u16,
    /// Number of rows covered
    pub rows: u32,
    /// Number of columns covered
    pub cols: u16,
}

impl CellRegion {
    /// Create a region. Offsets must be at least 1; extents may be zero.
    pub fn new(row_offset: u32, col_offset: u16, rows: u32, cols: u16) -> Result<Self> {
        if row_offset == 0 || col_offset == 0 {
            return Err(Error::InvalidRegion(format!(
                "offsets are 1-based, got row_offset={}, col_offset={}",
                row_offset, col_offset
            )));
        }
        Ok(Self {
            row_offset,
            col_offset,
            rows,
            cols,
        })
    }

    /// The default region for a worksheet: column A, starting at row 2 (the
    /// row under a single header row), spanning the sheet's used range.
    ///
    /// An empty sheet, or one holding only the header row, yields a region
    /// with zero extent; comparing it succeeds vacuously.
    pub fn below_header(sheet: &Worksheet) -> Self {
        match sheet.dimension() {
            Some((end_row, end_col)) => Self {
                row_offset: 2,
                col_offset: 1,
                rows: end_row.saturating_sub(1),
                cols: end_col,
            },
            None => Self {
                row_offset: 2,
                col_offset: 1,
                rows: 0,
                cols: 0,
            },
        }
    }

    /// Parse a region from an `"B2:D10"`-style rectangle (a single cell
    /// reference names a 1×1 region).
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let (start, end) = match s.find(':') {
            Some(pos) => (parse_cell_ref(&s[..pos])?, parse_cell_ref(&s[pos + 1..])?),
            None => {
                let cell = parse_cell_ref(s)?;
                (cell, cell)
            }
        };

        let (start_row, end_row) = (start.0.min(end.0), start.0.max(end.0));
        let (start_col, end_col) = (start.1.min(end.1), start.1.max(end.1));

        Ok(Self {
            row_offset: start_row,
            col_offset: start_col,
            rows: end_row - start_row + 1,
            cols: end_col - start_col + 1,
        })
    }

    /// Get the total number of cells in the region
    pub fn cell_count(&self) -> u64 {
        self.rows as u64 * self.cols as u64
    }

    /// Check if the region covers no cells
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

impl fmt::Display for CellRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "{} (empty)", cell_name(self.row_offset, self.col_offset))
        } else {
            write!(
                f,
                "{}:{}",
                cell_name(self.row_offset, self.col_offset),
                cell_name(
                    self.row_offset + self.rows - 1,
                    self.col_offset + self.cols - 1
                )
            )
        }
    }
}
