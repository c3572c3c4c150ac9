//! Error types for the outline inference library.
//!
//! Errors only arise at the span-ingestion boundary. The heuristic stages
//! themselves are total over their input domain: degenerate inputs take
//! explicit safe defaults instead of failing.

/// Result type alias for outline inference operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while ingesting spans from a collaborator.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The span source failed to produce spans for a page.
    #[error("Span source failed on page {page}: {reason}")]
    SpanSource {
        /// 1-based page index where ingestion failed
        page: u32,
        /// Reason reported by the collaborator
        reason: String,
    },

    /// A page reported non-positive dimensions, so positions cannot be
    /// normalized.
    #[error("Invalid page geometry on page {page}: {width}x{height}")]
    InvalidPageGeometry {
        /// 1-based page index
        page: u32,
        /// Reported page width
        width: f32,
        /// Reported page height
        height: f32,
    },

    /// IO error from a collaborator implementation.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_source_error_display() {
        let err = Error::SpanSource {
            page: 3,
            reason: "truncated stream".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("page 3"));
        assert!(msg.contains("truncated stream"));
    }

    #[test]
    fn test_invalid_page_geometry_display() {
        let err = Error::InvalidPageGeometry {
            page: 1,
            width: 0.0,
            height: 792.0,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("page 1"));
        assert!(msg.contains("0x792"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
