//! Pipeline orchestration and the extraction result.
//!
//! [`OutlineExtractor`] wires the stages together in their fixed order:
//! combine fragments, classify the genre, resolve the title, score
//! candidates, assign levels. Each stage is total over its input, so
//! extraction over an ingested fragment set cannot fail; only the span
//! source can, and that degrades the document to the error fallback rather
//! than aborting a batch run.

use serde::{Deserialize, Serialize};

use crate::combiner::{CombinerConfig, FragmentCombiner};
use crate::fragment::TextFragment;
use crate::genre::DocumentGenre;
use crate::hierarchy::{classify_headings, OutlineEntry};
use crate::scorer::find_candidates;
use crate::span::{collect_fragments, DocumentMetadata, SpanSource};
use crate::title::resolve_title;

/// Title reported when span ingestion fails.
const ERROR_TITLE: &str = "Error Processing Document";

/// The one-shot result of processing a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Resolved document title. Carries a two-space terminator unless it is
    /// a fallback value or the empty invitation title.
    pub title: String,

    /// Heading entries in document order.
    pub outline: Vec<OutlineEntry>,
}

impl ExtractionResult {
    /// The degraded result emitted when span ingestion fails.
    pub fn error_fallback() -> Self {
        Self {
            title: ERROR_TITLE.to_string(),
            outline: Vec::new(),
        }
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_outline::ExtractionResult;
    ///
    /// let json = ExtractionResult::error_fallback().to_json().unwrap();
    /// assert!(json.contains("\"outline\": []"));
    /// ```
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Runs the heuristic pipeline over one document.
///
/// The extractor is stateless between documents; one instance can process
/// any number of documents sequentially, and independent instances can run
/// concurrently without shared state.
#[derive(Debug, Clone, Default)]
pub struct OutlineExtractor {
    combiner: FragmentCombiner,
}

impl OutlineExtractor {
    /// Create an extractor with default tolerances.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with explicit combiner tolerances.
    pub fn with_config(config: CombinerConfig) -> Self {
        Self {
            combiner: FragmentCombiner::with_config(config),
        }
    }

    /// Run the pipeline over already-ingested fragments.
    ///
    /// Total over its input: degenerate fragment sets produce the safe
    /// defaults (empty outline, fallback title) instead of failing.
    pub fn extract(
        &self,
        fragments: Vec<TextFragment>,
        metadata: &DocumentMetadata,
    ) -> ExtractionResult {
        log::info!("Starting outline extraction over {} fragments", fragments.len());

        let combined = self.combiner.combine(fragments);
        let genre = DocumentGenre::classify(&combined);
        let title = resolve_title(&combined, genre, metadata);

        if genre.suppresses_outline() {
            log::info!("Detected {} document, outline forced empty", genre.name());
            return ExtractionResult {
                title,
                outline: Vec::new(),
            };
        }

        let candidates = find_candidates(&combined, genre);
        let outline = classify_headings(candidates);

        log::info!("Extracted {} headings ({} document)", outline.len(), genre.name());
        ExtractionResult { title, outline }
    }

    /// Ingest a document from a span source and run the pipeline.
    ///
    /// Any ingestion error degrades to
    /// [`ExtractionResult::error_fallback`]; the error itself is logged,
    /// never propagated, so a batch caller is free to keep going.
    pub fn extract_from_source<S: SpanSource + ?Sized>(&self, source: &mut S) -> ExtractionResult {
        let metadata = source.metadata();
        match collect_fragments(source) {
            Ok(fragments) => self.extract(fragments, &metadata),
            Err(err) => {
                log::warn!("Span ingestion failed, emitting fallback result: {}", err);
                ExtractionResult::error_fallback()
            }
        }
    }
}
