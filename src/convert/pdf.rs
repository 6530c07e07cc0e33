//! Word-document to PDF conversion.

use crate::error::Result;
use crate::extract::extract_paragraphs;
use crate::render::{PageGeometry, Paginator, PdfCanvas};
use std::path::Path;

use super::Convert;

/// Converts a `.docx` or `.doc` file into a paginated plain-text PDF.
///
/// Paragraphs are extracted in document order, wrapped at the geometry's
/// character width, and laid out top to bottom with a page break whenever
/// the content area is exhausted. Only plain text survives: fonts, styles
/// and embedded objects are not carried through this path.
#[derive(Debug, Clone, Default)]
pub struct DocToPdf {
    geometry: PageGeometry,
}

impl DocToPdf {
    /// Create a converter with the default page geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with a custom page geometry.
    pub fn with_geometry(geometry: PageGeometry) -> Self {
        Self { geometry }
    }
}

impl Convert for DocToPdf {
    fn name(&self) -> &str {
        "doc-to-pdf"
    }

    fn source_suffixes(&self) -> &[&str] {
        &[".docx", ".doc"]
    }

    fn target_suffix(&self) -> &str {
        ".pdf"
    }

    fn convert(&self, source: &Path, dest: &Path) -> Result<()> {
        let paragraphs = extract_paragraphs(source)?;
        let title = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());

        let mut canvas = PdfCanvas::new(&title, self.geometry.clone())?;
        Paginator::new(self.geometry.clone(), &mut canvas).paginate(&paragraphs)?;
        canvas.save(dest)
    }
}
