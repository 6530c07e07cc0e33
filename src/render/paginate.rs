//! Page geometry and the pagination state machine.

use crate::error::Result;
use crate::render::wrap::wrap;
use log::trace;

/// A4 page width in points.
pub const A4_WIDTH_PT: f64 = 595.276;
/// A4 page height in points.
pub const A4_HEIGHT_PT: f64 = 841.89;

/// Fixed numeric parameters governing pagination, in points.
///
/// Defaults: an A4 page, a 40 pt margin on every side, 20 pt between
/// baselines, lines wrapped at 120 characters, 12 pt type.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    /// Page width in points.
    pub page_width: f64,
    /// Page height in points.
    pub page_height: f64,
    /// Margin in points, applied top and bottom (and as the x offset).
    pub margin: f64,
    /// Vertical distance between consecutive lines, in points.
    pub line_height: f64,
    /// Maximum characters per line.
    pub wrap_width: usize,
    /// Font size in points.
    pub font_size: f64,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            page_width: A4_WIDTH_PT,
            page_height: A4_HEIGHT_PT,
            margin: 40.0,
            line_height: 20.0,
            wrap_width: 120,
            font_size: 12.0,
        }
    }
}

impl PageGeometry {
    /// Create the default geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size in points.
    pub fn with_page_size(mut self, width: f64, height: f64) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Set the margin in points.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the line height in points.
    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    /// Set the wrap width in characters.
    pub fn with_wrap_width(mut self, wrap_width: usize) -> Self {
        self.wrap_width = wrap_width;
        self
    }

    /// Set the font size in points.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// The y position of the first baseline on a page.
    pub fn top(&self) -> f64 {
        self.page_height - self.margin
    }
}

/// Receiver of pagination commands.
///
/// The coordinate origin is the renderer's: y decreases down the page,
/// measured in points from the bottom edge.
pub trait PageSink {
    /// Draw one line of text with its baseline at `(x, y)`.
    fn draw_line(&mut self, x: f64, y: f64, text: &str) -> Result<()>;

    /// Finalize the current page and start a new one.
    fn start_page(&mut self) -> Result<()>;
}

/// Drives a [`PageSink`] through a paragraph sequence.
///
/// The cursor moves monotonically down the page; when a drawn line lands
/// on the last slot of the content area the paginator arms a pending
/// break and emits it lazily, immediately before the next line. The lazy
/// break is what keeps a document whose text ends exactly at the bottom
/// margin from growing a trailing blank page.
///
/// Output is deterministic: the same paragraphs and geometry always
/// produce the same ordered command stream.
pub struct Paginator<'a, S: PageSink> {
    geometry: PageGeometry,
    sink: &'a mut S,
    y: f64,
    needs_break: bool,
}

impl<'a, S: PageSink> Paginator<'a, S> {
    /// Create a paginator positioned at the top of the first page.
    pub fn new(geometry: PageGeometry, sink: &'a mut S) -> Self {
        let y = geometry.top();
        Self {
            geometry,
            sink,
            y,
            needs_break: false,
        }
    }

    /// Render every paragraph, in order, wrapping each to the geometry's
    /// width.
    pub fn paginate(&mut self, paragraphs: &[String]) -> Result<()> {
        for paragraph in paragraphs {
            for line in wrap(paragraph, self.geometry.wrap_width) {
                self.emit(&line)?;
            }
        }
        Ok(())
    }

    fn emit(&mut self, line: &str) -> Result<()> {
        if self.needs_break {
            trace!("page break before {:?}", line);
            self.sink.start_page()?;
            self.y = self.geometry.top();
            self.needs_break = false;
        }
        self.sink.draw_line(self.geometry.margin, self.y, line)?;
        self.y -= self.geometry.line_height;
        if self.y < self.geometry.margin {
            self.needs_break = true;
        }
        Ok(())
    }
}

/// A [`PageSink`] that records the command stream instead of rendering.
///
/// Used by tests to assert placement and determinism.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Draw commands as `(page index, y, text)` triples, in order.
    pub lines: Vec<(usize, f64, String)>,
    /// Number of page breaks emitted.
    pub breaks: usize,
    page: usize,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageSink for RecordingSink {
    fn draw_line(&mut self, _x: f64, y: f64, text: &str) -> Result<()> {
        self.lines.push((self.page, y, text.to_string()));
        Ok(())
    }

    fn start_page(&mut self) -> Result<()> {
        self.page += 1;
        self.breaks += 1;
        Ok(())
    }
}
