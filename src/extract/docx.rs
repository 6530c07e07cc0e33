//! Paragraph extraction from OOXML word documents.
//!
//! A `.docx` file is a ZIP package whose main part is
//! `word/document.xml`. The extractor streams that part and collects one
//! entry per `<w:p>` element in document order: `<w:t>` runs are
//! concatenated, `<w:tab/>` contributes a tab, `<w:br/>` a newline.

use crate::error::{Error, Result};
use log::debug;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use zip::ZipArchive;

/// Extract paragraphs from a `.docx` package.
pub fn extract(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;
    let mut part = archive.by_name("word/document.xml").map_err(|e| {
        Error::Extraction(format!("{}: word/document.xml: {}", path.display(), e))
    })?;
    let mut xml = String::new();
    part.read_to_string(&mut xml)?;

    let paragraphs = parse_document_xml(&xml)?;
    debug!(
        "extracted {} paragraphs from {}",
        paragraphs.len(),
        path.display()
    );
    Ok(paragraphs)
}

fn parse_document_xml(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = true;
                    current.clear();
                }
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                // a self-closing <w:p/> is an empty paragraph
                b"w:p" => paragraphs.push(String::new()),
                b"w:tab" if in_paragraph => current.push('\t'),
                b"w:br" | b"w:cr" if in_paragraph => current.push('\n'),
                _ => {}
            },
            Event::Text(e) if in_text => current.push_str(&e.unescape()?),
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = false;
                    paragraphs.push(std::mem::take(&mut current));
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
