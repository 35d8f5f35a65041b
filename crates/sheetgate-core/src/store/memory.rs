//! In-memory workbook store
//!
//! Backs tests and embedders that synthesize workbooks instead of reading
//! files. Honors the full store contract, including overwrite-on-save.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::workbook::Workbook;

use super::{StoreError, WorkbookHandle, WorkbookLocator, WorkbookStore};

/// A [`WorkbookStore`] keeping every workbook in a map keyed by path.
#[derive(Debug)]
pub struct MemoryStore {
    files: Mutex<HashMap<PathBuf, Workbook>>,
    extension: String,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store; pretends to be an `.xlsx` backend
    pub fn new() -> Self {
        Self::with_extension("xlsx")
    }

    /// Create an empty store with a custom filename extension
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
            extension: extension.into(),
        }
    }

    /// Seed a workbook at `directory/filename`
    pub fn insert(&self, directory: impl AsRef<Path>, filename: &str, workbook: Workbook) {
        self.lock().insert(directory.as_ref().join(filename), workbook);
    }

    /// A snapshot of the workbook at `path`, if one is stored
    pub fn get(&self, path: &Path) -> Option<Workbook> {
        self.lock().get(path).cloned()
    }

    /// Whether a workbook is stored at `path`
    pub fn contains(&self, path: &Path) -> bool {
        self.lock().contains_key(path)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, Workbook>> {
        // A poisoned map is still a valid map
        self.files.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl WorkbookStore for MemoryStore {
    fn load(&self, path: &Path) -> Result<WorkbookHandle, StoreError> {
        let workbook = self
            .lock()
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(path.to_path_buf()))?;

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| StoreError::InvalidPath(path.to_path_buf()))?
            .to_string();
        let directory = path.parent().unwrap_or_else(|| Path::new("")).to_path_buf();

        Ok(WorkbookHandle::new(workbook, directory, filename))
    }

    fn save(&self, handle: WorkbookHandle) -> Result<WorkbookLocator, StoreError> {
        let locator = handle.locator();
        self.lock().insert(handle.path(), handle.workbook);
        Ok(locator)
    }

    fn copy(&self, handle: &WorkbookHandle, new_filename: &str) -> Result<WorkbookLocator, StoreError> {
        let locator = WorkbookLocator::new(handle.directory.clone(), new_filename);
        self.lock().insert(locator.path(), handle.workbook.clone());
        Ok(locator)
    }

    fn extension(&self) -> &str {
        &self.extension
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn workbook_with(text: &str) -> Workbook {
        let mut wb = Workbook::new();
        wb.worksheet_mut(0).unwrap().set_value(1, 1, text).unwrap();
        wb
    }

    #[test]
    fn test_load_missing() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.load(Path::new("out/missing.xlsx")),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = MemoryStore::new();
        let handle = WorkbookHandle::new(workbook_with("v1"), "out", "report.xlsx");
        let locator = store.save(handle).unwrap();
        assert_eq!(locator.path(), PathBuf::from("out/report.xlsx"));

        let reloaded = store.load(&locator.path()).unwrap();
        assert_eq!(reloaded.worksheet(0).unwrap().text_at(1, 1), Some("v1".to_string()));
        assert_eq!(reloaded.filename, "report.xlsx");
        assert_eq!(reloaded.directory, PathBuf::from("out"));
    }

    #[test]
    fn test_save_overwrites() {
        let store = MemoryStore::new();
        store.save(WorkbookHandle::new(workbook_with("v1"), "out", "r.xlsx")).unwrap();
        store.save(WorkbookHandle::new(workbook_with("v2"), "out", "r.xlsx")).unwrap();

        let reloaded = store.load(Path::new("out/r.xlsx")).unwrap();
        assert_eq!(reloaded.worksheet(0).unwrap().text_at(1, 1), Some("v2".to_string()));
    }

    #[test]
    fn test_copy_leaves_original_alone() {
        let store = MemoryStore::new();
        let handle = store
            .save(WorkbookHandle::new(workbook_with("orig"), "out", "r.xlsx"))
            .and_then(|loc| store.load(&loc.path()))
            .unwrap();

        let copy_loc = store.copy(&handle, "r_Errors.xlsx").unwrap();
        assert_eq!(copy_loc.path(), PathBuf::from("out/r_Errors.xlsx"));

        // Mutating the copy does not touch the original
        let mut copy = store.load(&copy_loc.path()).unwrap();
        copy.workbook.worksheet_mut(0).unwrap().set_value(1, 1, "changed").unwrap();
        store.save(copy).unwrap();

        let original = store.load(Path::new("out/r.xlsx")).unwrap();
        assert_eq!(original.worksheet(0).unwrap().text_at(1, 1), Some("orig".to_string()));
    }
}
