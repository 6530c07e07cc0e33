//! Paginated text rendering.
//!
//! The pipeline is renderer-agnostic: [`wrap`] turns a paragraph into
//! fixed-width lines, [`Paginator`] walks those lines against a
//! [`PageGeometry`] and issues draw-line/start-page commands to a
//! [`PageSink`], and [`PdfCanvas`] is the sink that serializes the
//! commands into a PDF file.

mod paginate;
mod pdf;
mod wrap;

pub use paginate::{PageGeometry, PageSink, Paginator, RecordingSink, A4_HEIGHT_PT, A4_WIDTH_PT};
pub use pdf::PdfCanvas;
pub use wrap::wrap;
