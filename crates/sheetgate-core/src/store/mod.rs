//! The workbook store contract
//!
//! A [`WorkbookStore`] is the seam between the comparison core and a concrete
//! spreadsheet backend (file parser/writer). The core never touches a file
//! format itself; it loads, saves and copies workbooks through this trait.
//!
//! ## Handle lifecycle
//!
//! Persisting a workbook invalidates its handle: some backends close the
//! underlying stream on save. The contract encodes this in ownership:
//! [`WorkbookStore::save`] consumes the handle, and further reads require a
//! fresh [`WorkbookStore::load`]. Likewise, editing a copy of a workbook means
//! copying first and loading the copy; a copy is never an alias of the
//! original's handle.

mod memory;

pub use memory::MemoryStore;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::workbook::Workbook;
use crate::worksheet::Worksheet;

/// Errors produced by workbook stores
#[derive(Debug, Error)]
pub enum StoreError {
    /// No workbook at the given location
    #[error("Workbook not found: {0}")]
    NotFound(PathBuf),

    /// A path without a filename component
    #[error("Not a workbook path: {0}")]
    InvalidPath(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Core model error
    #[error(transparent)]
    Core(#[from] crate::error::Error),

    /// Backend-specific failure
    #[error("{0}")]
    Backend(String),
}

/// Where a persisted workbook lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbookLocator {
    /// Directory holding the file
    pub directory: PathBuf,
    /// Filename within the directory
    pub filename: String,
}

impl WorkbookLocator {
    /// Create a locator
    pub fn new(directory: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            filename: filename.into(),
        }
    }

    /// The full path to the file
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

/// An open workbook plus the location it will persist to.
///
/// The filename and directory are plain fields: the asynchronous orchestration
/// path renames a produced workbook (prefixing the test name) and retargets it
/// at the output directory before persisting it.
#[derive(Debug, Clone)]
pub struct WorkbookHandle {
    /// The in-memory document
    pub workbook: Workbook,
    /// Directory the workbook persists to
    pub directory: PathBuf,
    /// Filename the workbook persists under
    pub filename: String,
}

impl WorkbookHandle {
    /// Create a handle
    pub fn new(workbook: Workbook, directory: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            workbook,
            directory: directory.into(),
            filename: filename.into(),
        }
    }

    /// The full path the workbook persists to
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }

    /// The handle's location
    pub fn locator(&self) -> WorkbookLocator {
        WorkbookLocator::new(self.directory.clone(), self.filename.clone())
    }

    /// Shorthand for a worksheet of the underlying workbook
    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.workbook.worksheet(index)
    }
}

/// A spreadsheet backend: loads, persists and copies workbooks.
pub trait WorkbookStore {
    /// Open the workbook at `path`
    fn load(&self, path: &Path) -> Result<WorkbookHandle, StoreError>;

    /// Open a workbook by directory and filename
    fn load_from(&self, directory: &Path, filename: &str) -> Result<WorkbookHandle, StoreError> {
        self.load(&directory.join(filename))
    }

    /// Persist the workbook, consuming its handle.
    ///
    /// Overwrites any previous file at the handle's path. Reading the workbook
    /// again requires [`load`](WorkbookStore::load).
    fn save(&self, handle: WorkbookHandle) -> Result<WorkbookLocator, StoreError>;

    /// Persist a copy of the workbook under `new_filename` in the handle's
    /// directory, leaving the handle untouched.
    fn copy(&self, handle: &WorkbookHandle, new_filename: &str) -> Result<WorkbookLocator, StoreError>;

    /// The filename extension this backend writes (without the dot)
    fn extension(&self) -> &str;
}
