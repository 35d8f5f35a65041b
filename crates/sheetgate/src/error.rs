//! Error types for sheetgate

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while orchestrating a comparison run.
///
/// Everything here is infrastructural: a missing file, a bad sheet index, a
/// backend failure. A content mismatch between two workbooks is not an error;
/// it comes back as a [`ComparisonOutcome`](sheetgate_core::ComparisonOutcome)
/// with `success == false`.
#[derive(Debug, Error)]
pub enum Error {
    /// Core model error
    #[error(transparent)]
    Core(#[from] sheetgate_core::Error),

    /// Workbook store error
    #[error(transparent)]
    Store(#[from] sheetgate_core::StoreError),
}
