//! Workbook type - the main document structure

use crate::error::{Error, Result};
use crate::worksheet::Worksheet;

/// A workbook (spreadsheet document)
///
/// A workbook is an ordered collection of worksheets. It is `Clone` because
/// the store contract hands out defensive copies: a diff report starts life as
/// a copy of the actual workbook.
#[derive(Debug, Clone)]
pub struct Workbook {
    /// Worksheets in the workbook
    worksheets: Vec<Worksheet>,
}

impl Workbook {
    /// Create a new workbook with one worksheet named "Sheet1"
    pub fn new() -> Self {
        let mut wb = Self::empty();
        wb.add_worksheet("Sheet1").unwrap();
        wb
    }

    /// Create an empty workbook with no worksheets
    pub fn empty() -> Self {
        Self {
            worksheets: Vec::new(),
        }
    }

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Check if the workbook has no worksheets
    pub fn is_empty(&self) -> bool {
        self.worksheets.is_empty()
    }

    /// Get a worksheet by 0-based index
    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.worksheets.get(index)
    }

    /// Get a mutable worksheet by 0-based index
    pub fn worksheet_mut(&mut self, index: usize) -> Option<&mut Worksheet> {
        self.worksheets.get_mut(index)
    }

    /// Get a worksheet by name
    pub fn worksheet_by_name(&self, name: &str) -> Option<&Worksheet> {
        self.worksheets.iter().find(|ws| ws.name() == name)
    }

    /// Iterate over all worksheets
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    /// Add a new worksheet with the given name, returning its index
    pub fn add_worksheet(&mut self, name: &str) -> Result<usize> {
        if self.worksheets.iter().any(|ws| ws.name() == name) {
            return Err(Error::DuplicateSheetName(name.to_string()));
        }
        let index = self.worksheets.len();
        self.worksheets.push(Worksheet::new(name));
        Ok(index)
    }

    /// Add an existing worksheet to the workbook, returning its index
    pub fn add_existing_worksheet(&mut self, worksheet: Worksheet) -> Result<usize> {
        if self.worksheets.iter().any(|ws| ws.name() == worksheet.name()) {
            return Err(Error::DuplicateSheetName(worksheet.name().to_string()));
        }
        let index = self.worksheets.len();
        self.worksheets.push(worksheet);
        Ok(index)
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_one_sheet() {
        let wb = Workbook::new();
        assert_eq!(wb.sheet_count(), 1);
        assert_eq!(wb.worksheet(0).unwrap().name(), "Sheet1");
        assert!(wb.worksheet(1).is_none());
    }

    #[test]
    fn test_duplicate_sheet_name() {
        let mut wb = Workbook::new();
        assert!(wb.add_worksheet("Sheet1").is_err());
        assert_eq!(wb.add_worksheet("Data").unwrap(), 1);
    }

    #[test]
    fn test_lookup_by_name() {
        let mut wb = Workbook::empty();
        wb.add_worksheet("Report").unwrap();
        assert!(wb.worksheet_by_name("Report").is_some());
        assert!(wb.worksheet_by_name("Missing").is_none());
    }
}
