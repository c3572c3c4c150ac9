//! The span-ingestion boundary.
//!
//! Raw spans come from an external PDF-rendering collaborator through the
//! [`SpanSource`] trait. This module normalizes them into
//! [`TextFragment`]s: positions are divided by the page dimensions so the
//! downstream heuristics are page-size-independent, boldness is derived from
//! the font name, and obvious non-content (lone page numbers, copyright
//! marks, decorative flyer boilerplate) is dropped before the pipeline ever
//! sees it.
//!
//! The core never reads raw file bytes itself; everything below this module
//! operates on fragments only.

use crate::error::{Error, Result};
use crate::fragment::TextFragment;
use crate::geometry::{Point, Rect};
use crate::patterns;

/// Font-name markers that indicate a bold face.
const BOLD_MARKERS: &[&str] = &["bold", "black", "heavy"];

/// Standalone tokens that are never content.
const NON_CONTENT_TOKENS: &[&str] = &["page", "of", "©", "copyright"];

/// A raw, renderer-level run of text with uniform font, before any
/// combination logic is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSpan {
    /// Text content as reported by the renderer.
    pub text: String,
    /// Font size in points.
    pub font_size: f32,
    /// Full font name; bold detection looks for markers inside it.
    pub font_name: String,
    /// Bounding box in raw page coordinates.
    pub bbox: Rect,
}

/// All spans of one page together with the page dimensions used for
/// position normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSpans {
    /// Raw spans on this page, in renderer order.
    pub spans: Vec<RawSpan>,
    /// Page width in raw units.
    pub width: f32,
    /// Page height in raw units.
    pub height: f32,
}

/// Optional document metadata supplied by the collaborator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentMetadata {
    /// Title from the document's metadata dictionary, if any.
    pub title: Option<String>,
}

/// The seam to the external span-ingestion collaborator.
///
/// Implementations wrap whatever renderer actually opens the file; the
/// pipeline only pulls pages of spans and optional metadata through this
/// trait. Any `Err` returned here degrades the document's result to the
/// error fallback (see [`crate::ExtractionResult::error_fallback`]).
pub trait SpanSource {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Spans and dimensions for the page at `page_index` (0-based).
    fn page_spans(&mut self, page_index: u32) -> Result<PageSpans>;

    /// Document metadata, if the collaborator exposes any.
    fn metadata(&mut self) -> DocumentMetadata {
        DocumentMetadata::default()
    }
}

/// An in-memory [`SpanSource`] over pre-collected pages.
///
/// Useful for tests and for collaborators that parse a whole document up
/// front.
#[derive(Debug, Clone, Default)]
pub struct InMemorySpanSource {
    pages: Vec<PageSpans>,
    metadata: DocumentMetadata,
}

impl InMemorySpanSource {
    /// Create a source over the given pages.
    pub fn new(pages: Vec<PageSpans>) -> Self {
        Self {
            pages,
            metadata: DocumentMetadata::default(),
        }
    }

    /// Attach document metadata.
    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

impl SpanSource for InMemorySpanSource {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_spans(&mut self, page_index: u32) -> Result<PageSpans> {
        self.pages
            .get(page_index as usize)
            .cloned()
            .ok_or(Error::SpanSource {
                page: page_index + 1,
                reason: "page index out of bounds".to_string(),
            })
    }

    fn metadata(&mut self) -> DocumentMetadata {
        self.metadata.clone()
    }
}

/// Check whether a font name indicates a bold face.
///
/// # Examples
///
/// ```
/// use pdf_outline::span::is_bold_font;
///
/// assert!(is_bold_font("Helvetica-Bold"));
/// assert!(is_bold_font("Arial Black"));
/// assert!(!is_bold_font("Times-Roman"));
/// ```
pub fn is_bold_font(font_name: &str) -> bool {
    let lower = font_name.to_lowercase();
    BOLD_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Check whether a span's text is obvious non-content.
///
/// Filters lone page numbers (at most 3 digits), standalone "page"/"of"/
/// copyright tokens, and decorative flyer text (URLs, addresses, file
/// markers, venue boilerplate).
pub fn is_non_content(text: &str) -> bool {
    let trimmed = text.trim();
    let lower = trimmed.to_lowercase();

    if patterns::BARE_NUMBER.is_match(trimmed) && trimmed.len() <= 3 {
        return true;
    }

    if NON_CONTENT_TOKENS.contains(&lower.as_str()) {
        return true;
    }

    patterns::is_decorative(&lower)
}

/// Pull every page from `source` and normalize its spans into fragments.
///
/// Empty and non-content spans are dropped silently. Page indices on the
/// produced fragments are 1-based.
pub fn collect_fragments<S: SpanSource + ?Sized>(source: &mut S) -> Result<Vec<TextFragment>> {
    let mut fragments = Vec::new();

    for page_index in 0..source.page_count() {
        let page = source.page_spans(page_index)?;
        let page_number = page_index + 1;

        if page.width <= 0.0 || page.height <= 0.0 {
            return Err(Error::InvalidPageGeometry {
                page: page_number,
                width: page.width,
                height: page.height,
            });
        }

        for span in &page.spans {
            let text = span.text.trim();
            if text.is_empty() {
                continue;
            }
            if is_non_content(text) {
                log::debug!("Skipping non-content span on page {}: {:?}", page_number, text);
                continue;
            }

            fragments.push(TextFragment::new(
                text,
                page_number,
                span.font_size,
                is_bold_font(&span.font_name),
                Point::new(span.bbox.x0 / page.width, span.bbox.y0 / page.height),
                span.bbox,
            ));
        }
    }

    log::debug!("Collected {} fragments from {} pages", fragments.len(), source.page_count());
    Ok(fragments)
}
