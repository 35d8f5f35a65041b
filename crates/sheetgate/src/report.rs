//! Annotated diff-report writing
//!
//! A diff report is a copy of the actual workbook in which every failing cell
//! gets a red background fill and a note carrying that cell's diff line.
//! Passing cells are never touched, and the original workbooks are never
//! mutated.
//!
//! The writer leans on the store contract: `copy` produces a fresh persisted
//! copy (never an alias of the original's handle), the copy is then loaded for
//! editing, and `save` consumes the edited handle.

use std::path::Path;

use sheetgate_core::{
    CellComparison, Color, Error as CoreError, WorkbookHandle, WorkbookLocator, WorkbookStore,
};

use crate::error::Result;

/// Write the annotated diff report for a failed comparison.
///
/// The report is a copy of `actual`, named `report_filename`, written into
/// `output_dir`. Only records with `equal == false` are marked; each gets
/// [`Color::RED`] and its diff line as a note.
pub fn write_error_report<S: WorkbookStore>(
    store: &S,
    actual: &WorkbookHandle,
    records: &[CellComparison],
    sheet_index: usize,
    output_dir: &Path,
    report_filename: &str,
) -> Result<WorkbookLocator> {
    // Stage the copy in the output directory: a store copies a workbook into
    // the directory of the handle it is given.
    let staged = WorkbookHandle::new(
        actual.workbook.clone(),
        output_dir,
        actual.filename.clone(),
    );
    let locator = store.copy(&staged, report_filename)?;

    // The copy must be reopened before editing; saving it later invalidates
    // this handle in turn.
    let mut report = store.load_from(&locator.directory, &locator.filename)?;

    let sheet_count = report.workbook.sheet_count();
    let sheet = report
        .workbook
        .worksheet_mut(sheet_index)
        .ok_or(CoreError::SheetOutOfBounds(sheet_index, sheet_count))?;

    let mut marked = 0usize;
    for record in records.iter().filter(|r| !r.equal) {
        let note = match &record.message {
            Some(message) => message.clone(),
            None => record.describe(),
        };
        sheet.mark(record.row, record.col, Color::RED, note)?;
        marked += 1;
    }

    let locator = store.save(report)?;
    tracing::info!(
        "Wrote diff report with {} marked cells to {}",
        marked,
        locator.path().display()
    );
    Ok(locator)
}
