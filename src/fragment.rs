//! The text fragment data model.
//!
//! A [`TextFragment`] is the unit flowing through the whole pipeline: raw
//! spans are normalized into fragments at ingestion, the combiner merges
//! fragments into coherent runs, and the scorer/classifier read them without
//! further mutation.

use crate::geometry::{Point, Rect};

/// One logical chunk of text with position and font metadata.
///
/// After the combiner has run, a fragment represents one coherent run of
/// text that is treated as a single heading/line unit. Style attributes
/// (`font_size`, `is_bold`, `position`) are always those of the first
/// constituent span; merging never averages or recomputes them.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    /// Trimmed, non-empty text content.
    pub text: String,

    /// 1-based page index.
    pub page: u32,

    /// Font size in points, as reported by the renderer.
    pub font_size: f32,

    /// Whether the font name carried a bold/black/heavy marker.
    pub is_bold: bool,

    /// Top-left position normalized to `[0, 1]` by the page dimensions.
    pub position: Point,

    /// Bounding box in raw page coordinates. Covers the union of every
    /// span the fragment absorbed during combination.
    pub bounding_box: Rect,
}

impl TextFragment {
    /// Create a fragment at a normalized position with a raw bounding box.
    pub fn new(
        text: impl Into<String>,
        page: u32,
        font_size: f32,
        is_bold: bool,
        position: Point,
        bounding_box: Rect,
    ) -> Self {
        Self {
            text: text.into(),
            page,
            font_size,
            is_bold,
            position,
            bounding_box,
        }
    }

    /// Number of whitespace-separated words in the fragment text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Number of characters in the fragment text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
