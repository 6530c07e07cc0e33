//! PDF page sink backed by printpdf.

use crate::error::{Error, Result};
use crate::render::paginate::{PageGeometry, PageSink};
use log::debug;
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Pt,
};
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Serializes draw-line / start-page commands into a PDF document.
///
/// Text is set in the built-in Helvetica at the geometry's font size.
/// This type is the only printpdf-aware code; the paginator upstream
/// never sees the renderer.
pub struct PdfCanvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    geometry: PageGeometry,
    pages: usize,
}

impl PdfCanvas {
    /// Create a canvas with its first page open.
    pub fn new(title: &str, geometry: PageGeometry) -> Result<Self> {
        let (doc, page, layer) = PdfDocument::new(
            title,
            Mm::from(Pt(geometry.page_width as f32)),
            Mm::from(Pt(geometry.page_height as f32)),
            "text",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| Error::Write(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            font,
            geometry,
            pages: 1,
        })
    }

    /// Number of pages opened so far.
    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Serialize the document to `path`.
    ///
    /// The bytes are staged in a temp file next to the destination and
    /// persisted in one rename, so a failed save leaves no partial file.
    pub fn save(self, path: &Path) -> Result<()> {
        let staging = NamedTempFile::new_in(crate::staging_dir(path))?;
        let mut writer = BufWriter::new(staging.as_file());
        self.doc
            .save(&mut writer)
            .map_err(|e| Error::Write(e.to_string()))?;
        writer.flush()?;
        drop(writer);
        staging
            .persist(path)
            .map_err(|e| Error::Write(e.to_string()))?;
        debug!("wrote {} pages to {}", self.pages, path.display());
        Ok(())
    }
}

impl PageSink for PdfCanvas {
    fn draw_line(&mut self, x: f64, y: f64, text: &str) -> Result<()> {
        if !text.is_empty() {
            self.layer.use_text(
                text,
                self.geometry.font_size as f32,
                Mm::from(Pt(x as f32)),
                Mm::from(Pt(y as f32)),
                &self.font,
            );
        }
        Ok(())
    }

    fn start_page(&mut self) -> Result<()> {
        let (page, layer) = self.doc.add_page(
            Mm::from(Pt(self.geometry.page_width as f32)),
            Mm::from(Pt(self.geometry.page_height as f32)),
            "text",
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.pages += 1;
        Ok(())
    }
}
