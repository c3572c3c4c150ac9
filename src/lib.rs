//! # PDF Outline
//!
//! Heuristic inference of a structural outline — document title plus nested
//! H1–H3 headings with page numbers — from the raw text spans of a PDF
//! document, without relying on the document's own bookmark metadata.
//!
//! ## Pipeline
//!
//! Spans arrive from an external PDF-rendering collaborator through the
//! [`span::SpanSource`] seam and flow strictly left to right:
//!
//! 1. **Ingestion** ([`span`]) — normalize spans into fragments, derive
//!    boldness from the font name, drop obvious non-content.
//! 2. **Combination** ([`combiner`]) — merge fragments that are really
//!    pieces of one logical phrase (split titles, scattered flyer text).
//! 3. **Genre classification** ([`genre`]) — tag the document as form,
//!    invitation, RFP, academic, or generic; the tag parameterizes every
//!    downstream heuristic.
//! 4. **Title resolution** ([`title`]) and **candidate scoring**
//!    ([`scorer`]) — genre-specific strategies over the combined fragments.
//! 5. **Hierarchy classification** ([`hierarchy`]) — font-size ranks plus
//!    text-pattern overrides produce the final H1–H3 outline.
//!
//! Processing is single-threaded and synchronous per document; documents
//! are independent, so a batch caller may run extractors concurrently.
//!
//! ## Quick Start
//!
//! ```
//! use pdf_outline::geometry::Rect;
//! use pdf_outline::span::{InMemorySpanSource, PageSpans, RawSpan};
//! use pdf_outline::OutlineExtractor;
//!
//! let page = PageSpans {
//!     spans: vec![
//!         RawSpan {
//!             text: "Annual Report".to_string(),
//!             font_size: 28.0,
//!             font_name: "Helvetica-Bold".to_string(),
//!             bbox: Rect::new(60.0, 40.0, 360.0, 68.0),
//!         },
//!         RawSpan {
//!             text: "Summary".to_string(),
//!             font_size: 16.0,
//!             font_name: "Helvetica-Bold".to_string(),
//!             bbox: Rect::new(60.0, 300.0, 160.0, 316.0),
//!         },
//!     ],
//!     width: 612.0,
//!     height: 792.0,
//! };
//!
//! let mut source = InMemorySpanSource::new(vec![page]);
//! let result = OutlineExtractor::new().extract_from_source(&mut source);
//!
//! assert_eq!(result.title, "Annual Report  ");
//! assert!(!result.outline.is_empty());
//! ```
//!
//! ## Failure contract
//!
//! The heuristic stages are total: degenerate inputs take explicit safe
//! defaults. Only span ingestion can fail, and that degrades the document
//! to [`ExtractionResult::error_fallback`] instead of propagating — a
//! batch run never aborts on one bad document.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Geometric primitives
pub mod geometry;

// Input boundary
pub mod span;

// The fragment data model
pub mod fragment;

// Static keyword/pattern tables
pub mod patterns;

// Pipeline stages
pub mod combiner;
pub mod genre;
pub mod hierarchy;
pub mod scorer;
pub mod title;

// Pipeline orchestration
pub mod extractor;

// Re-exports
pub use combiner::{CombinerConfig, FragmentCombiner};
pub use error::{Error, Result};
pub use extractor::{ExtractionResult, OutlineExtractor};
pub use fragment::TextFragment;
pub use genre::DocumentGenre;
pub use hierarchy::{HeadingLevel, OutlineEntry};

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Safely compare two floating point numbers, handling NaN cases.
    ///
    /// NaN values are treated as equal to each other and greater than all
    /// other values, so sorting operations never panic on NaN comparisons.
    #[inline]
    pub fn safe_float_cmp(a: f32, b: f32) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                // Both are normal numbers, safe to unwrap
                a.partial_cmp(&b).unwrap()
            },
        }
    }

}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
