//! The comparison engine
//!
//! Walks rectangular regions across two worksheets and emits one
//! [`CellComparison`] per examined cell. Cells whose expected value equals the
//! configured sentinel are excluded entirely: they produce no record and count
//! toward neither pass nor fail.

use crate::region::CellRegion;
use crate::worksheet::Worksheet;

/// Engine configuration.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompareOptions {
    /// The "don't-care" marker. An expected cell holding exactly this text is
    /// skipped without reading the actual cell.
    pub sentinel: String,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            sentinel: "N/A".to_string(),
        }
    }
}

impl CompareOptions {
    /// Options with a custom sentinel
    pub fn with_sentinel(sentinel: impl Into<String>) -> Self {
        Self {
            sentinel: sentinel.into(),
        }
    }
}

/// The result of comparing a single cell position across two worksheets.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellComparison {
    /// Absolute row of the cell (1-based)
    pub row: u32,
    /// Absolute column of the cell (1-based)
    pub col: u16,
    /// Text of the expected cell (`None` if missing or empty)
    pub expected: Option<String>,
    /// Text of the actual cell (`None` if missing or empty)
    pub actual: Option<String>,
    /// Whether expected and actual agree
    pub equal: bool,
    /// Human-readable description of the mismatch; filled in during
    /// aggregation for failing records only
    pub message: Option<String>,
}

impl CellComparison {
    /// Create a record; `equal` is derived from the two values.
    ///
    /// Equality is exact and case-sensitive. A missing value is its own value:
    /// `None != Some("")`, `None == None`.
    pub fn new(row: u32, col: u16, expected: Option<String>, actual: Option<String>) -> Self {
        let equal = expected == actual;
        Self {
            row,
            col,
            expected,
            actual,
            equal,
            message: None,
        }
    }

    /// The per-cell diff line, e.g. `"B2 Before: Y After: Z"`.
    ///
    /// Missing values render as nothing. Aggregation stores this into
    /// [`message`](CellComparison::message) for failing records.
    pub fn describe(&self) -> String {
        format!(
            "{} Before: {} After: {}",
            crate::address::cell_name(self.row, self.col),
            self.expected.as_deref().unwrap_or(""),
            self.actual.as_deref().unwrap_or("")
        )
    }
}

/// Compare one region of two worksheets, appending records to `out`.
///
/// Iteration is row-major: all columns of the first row, then the next row.
pub fn compare_region(
    region: &CellRegion,
    expected: &Worksheet,
    actual: &Worksheet,
    options: &CompareOptions,
    out: &mut Vec<CellComparison>,
) {
    for i in 0..region.rows {
        let row = region.row_offset + i;
        for j in 0..region.cols {
            let col = region.col_offset + j;

            let expected_text = expected.text_at(row, col);
            if expected_text.as_deref() == Some(options.sentinel.as_str()) {
                continue;
            }

            let actual_text = actual.text_at(row, col);
            out.push(CellComparison::new(row, col, expected_text, actual_text));
        }
    }
}

/// Compare a sequence of regions of two worksheets.
///
/// Regions are walked in the order given; overlapping regions are not
/// deduplicated, so keeping them disjoint is the caller's responsibility.
pub fn compare_regions(
    regions: &[CellRegion],
    expected: &Worksheet,
    actual: &Worksheet,
    options: &CompareOptions,
) -> Vec<CellComparison> {
    let mut records = Vec::new();
    for region in regions {
        compare_region(region, expected, actual, options, &mut records);
    }
    records
}
