//! Spreadsheet rows through a fake tabular backend

use std::sync::Arc;

use address_groups::config::ImportSettings;
use address_groups::import::{import_bytes, read_and_import, ImportedRow};
use address_groups::{FileKind, UploadedFile, SPREADSHEET_MIME};

use super::common::{write_file, FakeTabular};

#[test]
fn test_rows_without_address_are_kept() {
    let parser = FakeTabular(vec![
        vec![("address", "x"), ("amount", "1")],
        vec![("amount", "2")],
    ]);
    let file = UploadedFile::new("list.xlsx", SPREADSHEET_MIME, Vec::new());

    let batch = import_bytes(&file, &ImportSettings::default(), &parser).unwrap();

    assert_eq!(batch.kind, FileKind::Spreadsheet);
    assert_eq!(
        batch.rows,
        vec![ImportedRow::new("x", "1"), ImportedRow::new("", "2")]
    );
}

#[test]
fn test_rows_with_neither_column_become_empty_rows() {
    let parser = FakeTabular(vec![vec![("note", "hello")], vec![]]);
    let file = UploadedFile::new("list.xlsx", SPREADSHEET_MIME, Vec::new());

    let batch = import_bytes(&file, &ImportSettings::default(), &parser).unwrap();

    assert_eq!(batch.rows, vec![ImportedRow::default(), ImportedRow::default()]);
}

#[test]
fn test_custom_spreadsheet_type_from_settings() {
    let parser = FakeTabular(vec![vec![("address", "x")]]);
    let settings = ImportSettings {
        spreadsheet_mime: "application/x-sheet".to_string(),
        ..ImportSettings::default()
    };

    let default_type = UploadedFile::new("a.xlsx", SPREADSHEET_MIME, Vec::new());
    assert!(import_bytes(&default_type, &settings, &parser).unwrap().is_empty());

    let custom_type = UploadedFile::new("a.xlsx", "application/x-sheet", Vec::new());
    assert_eq!(import_bytes(&custom_type, &settings, &parser).unwrap().len(), 1);
}

#[tokio::test]
async fn test_xlsx_file_goes_through_tabular_backend() {
    let (_dir, path) = write_file("list.xlsx", b"not really a workbook");
    let parser = Arc::new(FakeTabular(vec![vec![("address", "x"), ("amount", "3")]]));

    let batch = read_and_import(&path, None, &ImportSettings::default(), parser)
        .await
        .unwrap();

    assert_eq!(batch.rows, vec![ImportedRow::new("x", "3")]);
}
