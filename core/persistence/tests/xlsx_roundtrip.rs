// FILENAME: core/persistence/tests/xlsx_roundtrip.rs
// End-to-end checks through real files: write with rust_xlsxwriter, read
// back with calamine, and run the consolidation pipeline in between.

use consolidate_engine::{consolidate, ConsolidateOptions, ConsolidatedTable};
use engine::CellValue;
use persistence::{load_workbook, save_table, PersistenceError};
use rust_xlsxwriter::Workbook as XlsxWorkbook;

fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

fn num(n: f64) -> CellValue {
    CellValue::Number(n)
}

#[test]
fn saved_table_reads_back_with_blanks_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xlsx");

    let table = ConsolidatedTable {
        columns: vec!["县域".to_string(), "GDP".to_string(), "人口".to_string()],
        rows: vec![
            vec![text("县A"), num(7.5), num(10.0)],
            vec![text("县B"), CellValue::Empty, num(20.0)],
        ],
    };
    save_table(&table, &path).unwrap();

    let workbook = load_workbook(&path).unwrap();
    assert_eq!(workbook.sheets.len(), 1);
    let grid = &workbook.sheets[0].grid;

    // Header row.
    assert_eq!(*grid.value(0, 0), text("县域"));
    assert_eq!(*grid.value(0, 1), text("GDP"));
    assert_eq!(*grid.value(0, 2), text("人口"));
    // Data rows; the missing GDP cell for 县B is blank, not 0.
    assert_eq!(*grid.value(1, 1), num(7.5));
    assert_eq!(*grid.value(2, 0), text("县B"));
    assert_eq!(*grid.value(2, 1), CellValue::Empty);
    assert_eq!(*grid.value(2, 2), num(20.0));
}

#[test]
fn pipeline_runs_file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("source.xlsx");
    let output = dir.path().join("result.xlsx");

    // A source sheet with two blocks and a divider row in between.
    let mut xlsx = XlsxWorkbook::new();
    let sheet = xlsx.add_worksheet();
    sheet.write_string(0, 0, "指标").unwrap();
    sheet.write_string(0, 1, "单位").unwrap();
    sheet.write_string(0, 2, "县A").unwrap();
    sheet.write_string(0, 3, "县B").unwrap();
    sheet.write_string(1, 0, "人口").unwrap();
    sheet.write_string(1, 1, "万人").unwrap();
    sheet.write_number(1, 2, 10.0).unwrap();
    sheet.write_number(1, 3, 20.0).unwrap();
    sheet.write_string(2, 0, "一、总计").unwrap();
    sheet.write_string(3, 0, "指标").unwrap();
    sheet.write_string(3, 1, "单位").unwrap();
    sheet.write_string(3, 2, "县C").unwrap();
    sheet.write_string(4, 0, "人口").unwrap();
    sheet.write_string(4, 1, "万人").unwrap();
    sheet.write_number(4, 2, 30.0).unwrap();
    xlsx.save(&input).unwrap();

    let workbook = load_workbook(&input).unwrap();
    let table = consolidate(&workbook, &ConsolidateOptions::default()).unwrap();

    assert_eq!(table.columns, vec!["县域", "人口"]);
    assert_eq!(
        table.rows,
        vec![
            vec![text("县A"), num(10.0)],
            vec![text("县B"), num(20.0)],
            vec![text("县C"), num(30.0)],
        ]
    );

    save_table(&table, &output).unwrap();
    let written = load_workbook(&output).unwrap();
    assert_eq!(*written.sheets[0].grid.value(3, 1), num(30.0));
}

#[test]
fn unreadable_file_propagates_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not_a_workbook.xlsx");
    std::fs::write(&path, b"this is not a zip archive").unwrap();

    let err = load_workbook(&path).unwrap_err();
    assert!(matches!(
        err,
        PersistenceError::XlsxRead(_) | PersistenceError::Io(_)
    ));
}
