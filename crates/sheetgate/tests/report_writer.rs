//! Diff-report behavior: marking, placement, overwrite, isolation

use std::path::Path;

use pretty_assertions::assert_eq;
use sheetgate::prelude::*;
use sheetgate_core::Color;

fn workbook(cells: &[(u32, u16, &str)]) -> Workbook {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();
    for (row, col, value) in cells {
        sheet.set_value(*row, *col, *value).unwrap();
    }
    wb
}

#[test]
fn report_lands_in_the_output_directory_with_default_name() {
    let store = MemoryStore::new();
    store.insert("accept", "totals.xlsx", workbook(&[(2, 1, "Y")]));
    store.insert("out", "totals.xlsx", workbook(&[(2, 1, "Z")]));

    let comparer = Comparer::new(store);
    let run = RunConfig::new("totals", "out");
    let outcome = comparer
        .compare_files(Path::new("accept/totals.xlsx"), Path::new("out/totals.xlsx"), &run)
        .unwrap();

    assert!(!outcome.success);
    assert_eq!(
        outcome.report.as_deref(),
        Some(Path::new("out/totals_Errors.xlsx"))
    );
    assert!(outcome.message.ends_with("Details: out/totals_Errors.xlsx"));
    assert!(comparer.store().contains(Path::new("out/totals_Errors.xlsx")));
}

#[test]
fn failing_cells_are_marked_and_passing_cells_untouched() {
    let store = MemoryStore::new();
    store.insert("accept", "totals.xlsx", workbook(&[(2, 1, "X"), (2, 2, "Y")]));
    store.insert("out", "totals.xlsx", workbook(&[(2, 1, "X"), (2, 2, "Z")]));

    let comparer = Comparer::new(store);
    let run = RunConfig::new("totals", "out");
    comparer
        .compare_files(Path::new("accept/totals.xlsx"), Path::new("out/totals.xlsx"), &run)
        .unwrap();

    let report = comparer
        .store()
        .get(Path::new("out/totals_Errors.xlsx"))
        .unwrap();
    let sheet = report.worksheet(0).unwrap();

    // B2 failed: red fill, note carrying the diff line, value preserved
    assert_eq!(sheet.fill_at(2, 2), Some(Color::RED));
    assert_eq!(sheet.note_at(2, 2).unwrap().text, "B2 Before: Y After: Z");
    assert_eq!(sheet.text_at(2, 2), Some("Z".to_string()));

    // A2 passed: untouched
    assert_eq!(sheet.fill_at(2, 1), None);
    assert!(sheet.note_at(2, 1).is_none());
}

#[test]
fn original_workbooks_are_never_mutated() {
    let store = MemoryStore::new();
    store.insert("accept", "totals.xlsx", workbook(&[(2, 1, "Y")]));
    store.insert("out", "totals.xlsx", workbook(&[(2, 1, "Z")]));

    let comparer = Comparer::new(store);
    let run = RunConfig::new("totals", "out");
    comparer
        .compare_files(Path::new("accept/totals.xlsx"), Path::new("out/totals.xlsx"), &run)
        .unwrap();

    let actual = comparer.store().get(Path::new("out/totals.xlsx")).unwrap();
    let sheet = actual.worksheet(0).unwrap();
    assert_eq!(sheet.fill_at(2, 1), None);
    assert!(sheet.note_at(2, 1).is_none());

    let expected = comparer.store().get(Path::new("accept/totals.xlsx")).unwrap();
    assert_eq!(expected.worksheet(0).unwrap().text_at(2, 1), Some("Y".to_string()));
}

#[test]
fn report_is_overwritten_not_appended() {
    let store = MemoryStore::new();
    store.insert("accept", "totals.xlsx", workbook(&[(2, 1, "X"), (2, 2, "Y")]));
    store.insert("out", "totals.xlsx", workbook(&[(2, 1, "BAD"), (2, 2, "Y")]));

    let comparer = Comparer::new(store);
    let run = RunConfig::new("totals", "out");
    comparer
        .compare_files(Path::new("accept/totals.xlsx"), Path::new("out/totals.xlsx"), &run)
        .unwrap();

    // Fix A2, break B2, run again: the report reflects only the second run
    comparer.store().insert("out", "totals.xlsx", workbook(&[(2, 1, "X"), (2, 2, "OTHER")]));
    comparer
        .compare_files(Path::new("accept/totals.xlsx"), Path::new("out/totals.xlsx"), &run)
        .unwrap();

    let report = comparer
        .store()
        .get(Path::new("out/totals_Errors.xlsx"))
        .unwrap();
    let sheet = report.worksheet(0).unwrap();
    assert_eq!(sheet.fill_at(2, 1), None);
    assert_eq!(sheet.fill_at(2, 2), Some(Color::RED));
}

#[test]
fn no_report_is_written_on_success() {
    let store = MemoryStore::new();
    store.insert("accept", "totals.xlsx", workbook(&[(2, 1, "X")]));
    store.insert("out", "totals.xlsx", workbook(&[(2, 1, "X")]));

    let comparer = Comparer::new(store);
    let run = RunConfig::new("totals", "out");
    let outcome = comparer
        .compare_files(Path::new("accept/totals.xlsx"), Path::new("out/totals.xlsx"), &run)
        .unwrap();

    assert!(outcome.success);
    assert_eq!(outcome.report, None);
    assert!(!comparer.store().contains(Path::new("out/totals_Errors.xlsx")));
}

#[test]
fn custom_report_filename_is_honored() {
    let store = MemoryStore::new();
    store.insert("accept", "totals.xlsx", workbook(&[(2, 1, "Y")]));
    store.insert("out", "totals.xlsx", workbook(&[(2, 1, "Z")]));

    let comparer = Comparer::new(store);
    let run = RunConfig::new("totals", "out").with_report_filename("diff.xlsx");
    let outcome = comparer
        .compare_files(Path::new("accept/totals.xlsx"), Path::new("out/totals.xlsx"), &run)
        .unwrap();

    assert_eq!(outcome.report.as_deref(), Some(Path::new("out/diff.xlsx")));
}

#[test]
fn marking_covers_cells_missing_from_the_actual_sheet() {
    let store = MemoryStore::new();
    // Expected has A2 and A3; actual reaches row 3 but leaves A2 absent
    store.insert("accept", "totals.xlsx", workbook(&[(2, 1, "present"), (3, 1, "x")]));
    store.insert("out", "totals.xlsx", workbook(&[(3, 1, "x")]));

    let comparer = Comparer::new(store);
    let run = RunConfig::new("totals", "out");
    let outcome = comparer
        .compare_files(Path::new("accept/totals.xlsx"), Path::new("out/totals.xlsx"), &run)
        .unwrap();
    assert!(!outcome.success);

    let report = comparer
        .store()
        .get(Path::new("out/totals_Errors.xlsx"))
        .unwrap();
    let sheet = report.worksheet(0).unwrap();
    assert_eq!(sheet.fill_at(2, 1), Some(Color::RED));
    assert_eq!(sheet.note_at(2, 1).unwrap().text, "A2 Before: present After: ");
}
