//! Comparison orchestration
//!
//! [`Comparer`] ties the engine, the aggregator and the report writer to a
//! workbook store. Each entry point is one linear pass: load, resolve regions,
//! compare, aggregate, and (only on failure) write the diff report. There
//! are no retries; infrastructural failures propagate as errors, while a
//! content mismatch is an ordinary outcome with `success == false`.

use std::future::Future;
use std::path::{Path, PathBuf};

use sheetgate_core::{
    compare_regions, CellRegion, CompareOptions, ComparisonOutcome, Error as CoreError,
    WorkbookHandle, WorkbookStore,
};

use crate::error::Result;
use crate::report;

/// Names one comparison run: the test it belongs to, where its artifacts go,
/// and which worksheet to examine.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Test name; prefixes generated artifacts
    pub test_name: String,
    /// Directory receiving the diff report (and, on the asynchronous path,
    /// the persisted actual workbook)
    pub output_dir: PathBuf,
    /// Diff report filename; defaults to `"<test_name>_Errors.<ext>"`
    pub report_filename: Option<String>,
    /// 0-based worksheet index examined on both workbooks
    pub sheet: usize,
}

impl RunConfig {
    /// A run named `test_name` writing artifacts to `output_dir`, examining
    /// the first worksheet.
    pub fn new(test_name: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            test_name: test_name.into(),
            output_dir: output_dir.into(),
            report_filename: None,
            sheet: 0,
        }
    }

    /// Examine the given 0-based worksheet index instead of the first
    pub fn with_sheet(mut self, sheet: usize) -> Self {
        self.sheet = sheet;
        self
    }

    /// Override the diff report filename
    pub fn with_report_filename(mut self, filename: impl Into<String>) -> Self {
        self.report_filename = Some(filename.into());
        self
    }

    fn report_filename(&self, extension: &str) -> String {
        match &self.report_filename {
            Some(name) => name.clone(),
            None => format!("{}_Errors.{}", self.test_name, extension),
        }
    }
}

/// Compares actual workbooks against expected ones through a store.
#[derive(Debug)]
pub struct Comparer<S> {
    store: S,
    options: CompareOptions,
}

impl<S: WorkbookStore> Comparer<S> {
    /// A comparer with the default engine options (sentinel `"N/A"`)
    pub fn new(store: S) -> Self {
        Self {
            store,
            options: CompareOptions::default(),
        }
    }

    /// A comparer with custom engine options
    pub fn with_options(store: S, options: CompareOptions) -> Self {
        Self { store, options }
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Compare two workbook files.
    ///
    /// The examined region is derived from the expected sheet's used range:
    /// column A, starting at row 2 (under a single header row).
    pub fn compare_files(
        &self,
        expected_path: &Path,
        actual_path: &Path,
        run: &RunConfig,
    ) -> Result<ComparisonOutcome> {
        let expected = self.store.load(expected_path)?;
        let actual = self.store.load(actual_path)?;
        self.compare_workbooks(&[], &expected, &actual, run)
    }

    /// Compare two loaded workbooks over explicit regions.
    ///
    /// An empty `regions` slice derives the default below-header region from
    /// the expected sheet. Regions are examined in order; keeping them
    /// disjoint is the caller's responsibility.
    pub fn compare_workbooks(
        &self,
        regions: &[CellRegion],
        expected: &WorkbookHandle,
        actual: &WorkbookHandle,
        run: &RunConfig,
    ) -> Result<ComparisonOutcome> {
        let expected_sheet = expected
            .worksheet(run.sheet)
            .ok_or(CoreError::SheetOutOfBounds(run.sheet, expected.workbook.sheet_count()))?;
        let actual_sheet = actual
            .worksheet(run.sheet)
            .ok_or(CoreError::SheetOutOfBounds(run.sheet, actual.workbook.sheet_count()))?;

        let derived;
        let regions = if regions.is_empty() {
            derived = [CellRegion::below_header(expected_sheet)];
            &derived[..]
        } else {
            regions
        };

        let mut records = compare_regions(regions, expected_sheet, actual_sheet, &self.options);
        let mut outcome = ComparisonOutcome::aggregate(&mut records);
        tracing::debug!(
            "Compared {} cells over {} regions: {} failing",
            outcome.total,
            regions.len(),
            outcome.failed
        );

        if outcome.success {
            return Ok(outcome);
        }

        let report_filename = run.report_filename(self.store.extension());
        let locator = report::write_error_report(
            &self.store,
            actual,
            &records,
            run.sheet,
            &run.output_dir,
            &report_filename,
        )?;
        outcome.message.push_str(&format!("\nDetails: {}", locator.path().display()));
        outcome.report = Some(locator.path());
        Ok(outcome)
    }

    /// Await a workbook producer, persist its result, then compare it against
    /// the acceptance file `"<test_name>.<ext>"` in `acceptance_dir`.
    ///
    /// The produced workbook is renamed (test name prefixed to its filename),
    /// retargeted at the run's output directory, and persisted *before* the
    /// comparison, so the artifact compared is exactly the artifact left on
    /// disk for inspection. Persisting invalidates the producer's handle, and
    /// the workbook is reloaded from the store before the comparison reads it.
    pub async fn compare_generated<F>(
        &self,
        acceptance_dir: &Path,
        regions: &[CellRegion],
        producer: F,
        run: &RunConfig,
    ) -> Result<ComparisonOutcome>
    where
        F: Future<Output = Result<WorkbookHandle>>,
    {
        let mut actual = producer.await?;
        actual.filename = format!("{}_{}", run.test_name, actual.filename);
        actual.directory = run.output_dir.clone();

        let saved = self.store.save(actual)?;
        tracing::info!("Persisted generated workbook to {}", saved.path().display());
        let actual = self.store.load(&saved.path())?;

        let acceptance_filename = format!("{}.{}", run.test_name, self.store.extension());
        let expected = self.store.load_from(acceptance_dir, &acceptance_filename)?;

        self.compare_workbooks(regions, &expected, &actual, run)
    }
}
