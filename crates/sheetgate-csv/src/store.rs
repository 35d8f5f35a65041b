//! CSV-backed workbook store

use std::fs;
use std::path::Path;

use crate::error::CsvError;
use crate::options::CsvOptions;
use crate::reader::CsvReader;
use crate::writer::CsvWriter;
use sheetgate_core::{
    StoreError, Workbook, WorkbookHandle, WorkbookLocator, WorkbookStore, Worksheet,
};

impl From<CsvError> for StoreError {
    fn from(err: CsvError) -> Self {
        match err {
            CsvError::Io(e) => StoreError::Io(e),
            CsvError::Core(e) => StoreError::Core(e),
            CsvError::Csv(e) => StoreError::Backend(e.to_string()),
        }
    }
}

/// A [`WorkbookStore`] reading and writing one-sheet workbooks as CSV files.
#[derive(Debug, Default)]
pub struct CsvStore {
    options: CsvOptions,
}

impl CsvStore {
    /// Create a store with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with the given options
    pub fn with_options(options: CsvOptions) -> Self {
        Self { options }
    }

    fn write_workbook(&self, workbook: &Workbook, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        match workbook.worksheet(0) {
            Some(sheet) => {
                if sheet.cells().any(|(_, _, c)| c.fill.is_some() || c.note.is_some()) {
                    log::warn!(
                        "CSV cannot carry cell fills or notes; {} keeps values only",
                        path.display()
                    );
                }
                CsvWriter::write_file(sheet, path, &self.options)?;
            }
            None => {
                CsvWriter::write_file(&Worksheet::new("Sheet1"), path, &self.options)?;
            }
        }
        Ok(())
    }
}

impl WorkbookStore for CsvStore {
    fn load(&self, path: &Path) -> Result<WorkbookHandle, StoreError> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| StoreError::InvalidPath(path.to_path_buf()))?
            .to_string();
        let directory = path.parent().unwrap_or_else(|| Path::new("")).to_path_buf();

        if !path.exists() {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }

        let worksheet = CsvReader::read_file(path, &self.options).map_err(StoreError::from)?;
        let mut workbook = Workbook::empty();
        workbook.add_existing_worksheet(worksheet)?;

        log::debug!("Loaded {}", path.display());
        Ok(WorkbookHandle::new(workbook, directory, filename))
    }

    fn save(&self, handle: WorkbookHandle) -> Result<WorkbookLocator, StoreError> {
        let locator = handle.locator();
        self.write_workbook(&handle.workbook, &locator.path())?;
        log::debug!("Saved {}", locator.path().display());
        Ok(locator)
    }

    fn copy(&self, handle: &WorkbookHandle, new_filename: &str) -> Result<WorkbookLocator, StoreError> {
        let locator = WorkbookLocator::new(handle.directory.clone(), new_filename);
        self.write_workbook(&handle.workbook, &locator.path())?;
        Ok(locator)
    }

    fn extension(&self) -> &str {
        "csv"
    }
}
