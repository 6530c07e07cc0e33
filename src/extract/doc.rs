//! Coarse text extraction from legacy Word binary documents.
//!
//! A `.doc` file is an OLE2 compound file. The extractor reads the
//! `WordDocument` stream, validates the file information block, and
//! decodes the simple text range `fcMin..fcMac`. Fast-saved documents
//! store their text as a piece table instead of one contiguous range;
//! those are reported as extraction failures rather than decoded as
//! garbage.

use crate::error::{Error, Result};
use cfb::CompoundFile;
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// FIB magic number (`wIdent`) of a Word binary document.
const WORD_MAGIC: u16 = 0xA5EC;

/// `fComplex` flag: text is stored as a piece table, not a simple range.
const FLAG_COMPLEX: u16 = 0x0004;

/// Extract paragraphs from a legacy `.doc` file.
///
/// Paragraph boundaries are newline splits of the recovered text; the
/// binary format carries no structural paragraph metadata at this level.
pub fn extract(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let mut compound = CompoundFile::open(file)
        .map_err(|e| Error::Extraction(format!("{}: not an OLE2 file: {}", path.display(), e)))?;
    let mut stream = compound.open_stream("WordDocument").map_err(|e| {
        Error::Extraction(format!("{}: WordDocument stream: {}", path.display(), e))
    })?;
    let mut data = Vec::new();
    stream.read_to_end(&mut data)?;

    let text = decode_word_stream(&data)
        .map_err(|e| Error::Extraction(format!("{}: {}", path.display(), e)))?;
    let paragraphs: Vec<String> = text.split('\n').map(String::from).collect();
    debug!(
        "extracted {} paragraphs from {}",
        paragraphs.len(),
        path.display()
    );
    Ok(paragraphs)
}

fn decode_word_stream(stream: &[u8]) -> std::result::Result<String, String> {
    if stream.len() < 32 {
        return Err("WordDocument stream is truncated".into());
    }
    if read_u16(stream, 0x00) != WORD_MAGIC {
        return Err("missing Word document signature".into());
    }
    let flags = read_u16(stream, 0x0A);
    if flags & FLAG_COMPLEX != 0 {
        return Err("fast-saved document; piece-table text is not supported".into());
    }

    let fc_min = read_u32(stream, 0x18) as usize;
    let fc_mac = read_u32(stream, 0x1C) as usize;
    if fc_mac < fc_min || fc_min > stream.len() {
        return Err("text range is out of bounds".into());
    }
    let end = fc_mac.min(stream.len());
    Ok(normalize(&decode_bytes(&stream[fc_min..end])))
}

/// Decode the raw text range as UTF-16LE when at least half of the high
/// bytes are zero, single-byte otherwise.
fn decode_bytes(raw: &[u8]) -> String {
    let units = raw.len() / 2;
    let zero_high = raw.iter().skip(1).step_by(2).filter(|b| **b == 0).count();
    if units > 0 && zero_high * 2 >= units {
        let code_units: Vec<u16> = raw
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&code_units)
    } else {
        raw.iter().map(|&b| b as char).collect()
    }
}

/// Map Word control marks to plain text: paragraph/line/page marks become
/// newlines, cell marks become tabs, remaining control characters are
/// dropped.
fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\r' | '\u{0B}' | '\u{0C}' => out.push('\n'),
            '\u{07}' => out.push('\t'),
            c if (c as u32) < 0x20 && c != '\n' && c != '\t' => {}
            c => out.push(c),
        }
    }
    out
}

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}
