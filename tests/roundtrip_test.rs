//! End-to-end conversion tests across real files in temp directories.

use std::fs;
use std::io::Write;

use docshift::detect::SourceKind;
use docshift::tabular::{read_tabular, write_tabular};
use docshift::{CellValue, TabularData};

fn report_table() -> TabularData {
    TabularData::from_rows(
        vec!["Name".into(), "Score".into()],
        vec![vec![CellValue::Text("Ann".into()), CellValue::Number(5.0)]],
    )
    .unwrap()
}

#[test]
fn test_xlsx_to_csv_basic_table() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("report.xlsx");
    write_tabular(&report_table(), &source, SourceKind::TabularXlsx).unwrap();

    let dest = docshift::convert(&source).unwrap();

    assert_eq!(dest, dir.path().join("report.csv"));
    assert_eq!(fs::read_to_string(&dest).unwrap(), "Name,Score\nAnn,5\n");
}

#[test]
fn test_csv_back_to_xlsx_reproduces_the_table() {
    let dir = tempfile::tempdir().unwrap();
    let back_dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("report.csv");
    fs::write(&csv_path, "Name,Score\nAnn,5\n").unwrap();

    let dest = docshift::convert_into(&csv_path, back_dir.path()).unwrap();
    assert_eq!(dest, back_dir.path().join("report.xlsx"));

    let table = read_tabular(&dest, SourceKind::TabularXlsx).unwrap();
    assert_eq!(table.header(), vec!["Name", "Score"]);
    let row: Vec<_> = table.rows().next().unwrap();
    assert_eq!(row[0], &CellValue::Text("Ann".into()));
    assert_eq!(row[1], &CellValue::Number(5.0));
}

#[test]
fn test_full_tabular_round_trip_preserves_text_representation() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("grades.xlsx");
    let table = TabularData::from_rows(
        vec!["Name".into(), "Score".into(), "Note".into()],
        vec![
            vec![
                CellValue::Text("Ann".into()),
                CellValue::Number(5.0),
                CellValue::Text("ok".into()),
            ],
            vec![
                CellValue::Text("Bea".into()),
                CellValue::Number(7.5),
                CellValue::Empty,
            ],
        ],
    )
    .unwrap();
    write_tabular(&table, &source, SourceKind::TabularXlsx).unwrap();

    // xlsx -> csv
    let csv_path = docshift::convert(&source).unwrap();
    let first_pass = fs::read_to_string(&csv_path).unwrap();

    // csv -> xlsx -> csv again; the text representation must be stable
    let second_dir = tempfile::tempdir().unwrap();
    let xlsx_again = docshift::convert_into(&csv_path, second_dir.path()).unwrap();
    let csv_again = docshift::convert(&xlsx_again).unwrap();
    let second_pass = fs::read_to_string(&csv_again).unwrap();

    assert_eq!(first_pass, second_pass);
    assert!(first_pass.starts_with("Name,Score,Note\n"));
}

/// Build a minimal `.docx` package by hand.
fn write_minimal_docx(path: &std::path::Path, paragraphs: &[&str]) {
    let file = fs::File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();

    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#,
    )
    .unwrap();

    zip.start_file("_rels/.rels", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#,
    )
    .unwrap();

    zip.start_file("word/document.xml", options).unwrap();
    let mut body = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#,
    );
    for paragraph in paragraphs {
        if paragraph.is_empty() {
            body.push_str("<w:p/>");
        } else {
            body.push_str(&format!(
                "<w:p><w:r><w:t>{}</w:t></w:r></w:p>",
                paragraph
            ));
        }
    }
    body.push_str("</w:body></w:document>");
    zip.write_all(body.as_bytes()).unwrap();
    zip.finish().unwrap();
}

#[test]
fn test_docx_to_pdf_writes_a_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("memo.docx");
    write_minimal_docx(&source, &["Hello world", "", "Second paragraph"]);

    let dest = docshift::convert(&source).unwrap();
    assert_eq!(dest, dir.path().join("memo.pdf"));

    let bytes = fs::read(&dest).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_pdf_to_docx_produces_a_word_package() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("memo.docx");
    write_minimal_docx(&source, &["Hello world from docshift"]);

    // docx -> pdf -> docx
    let pdf = docshift::convert(&source).unwrap();
    let back_dir = tempfile::tempdir().unwrap();
    let docx = docshift::convert_into(&pdf, back_dir.path()).unwrap();
    assert_eq!(docx, back_dir.path().join("memo.docx"));

    let file = fs::File::open(&docx).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let part = archive.by_name("word/document.xml").unwrap();
    assert!(part.size() > 0);
}

#[test]
fn test_corrupt_docx_reports_extraction_failure() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("memo.docx");
    fs::write(&source, b"definitely not a zip archive").unwrap();

    let outcome = docshift::outcome(&source);
    assert!(!outcome.success);
    assert!(outcome.detail.starts_with("[ERROR: "));
    assert!(!dir.path().join("memo.pdf").exists());
}
