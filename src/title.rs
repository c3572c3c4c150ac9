//! Title resolution.
//!
//! Picks the document title from first-page fragments using genre-specific
//! strategies: invitations get an empty title, RFP documents reassemble
//! their split title from domain-keyword fragments, everything else takes
//! the best large-font candidate from the upper half of the first page.
//! Resolved titles carry a canonical two-space terminator.

use lazy_static::lazy_static;
use regex::Regex;

use crate::fragment::TextFragment;
use crate::genre::DocumentGenre;
use crate::patterns;
use crate::span::DocumentMetadata;

lazy_static! {
    /// Runs of whitespace collapsed to a single space in resolved titles.
    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Fallback title when no usable first-page text exists.
const UNTITLED: &str = "Untitled Document";

/// Resolve the document title from combined fragments.
///
/// Resolution order: invitation blanking, RFP first-page assembly, generic
/// font-size scoring, metadata fallback, `"Untitled Document"`.
pub fn resolve_title(
    fragments: &[TextFragment],
    genre: DocumentGenre,
    metadata: &DocumentMetadata,
) -> String {
    // Invitations and flyers have no title by contract
    if genre.blanks_title() {
        return String::new();
    }

    let first_page: Vec<&TextFragment> = fragments.iter().filter(|f| f.page == 1).collect();
    if first_page.is_empty() {
        return UNTITLED.to_string();
    }

    if genre == DocumentGenre::Rfp {
        if let Some(title) = rfp_title(&first_page) {
            return title;
        }
    }

    if let Some(title) = scored_title(&first_page) {
        return title;
    }

    match &metadata.title {
        Some(title) if !title.trim().is_empty() => canonical_title(title),
        _ => UNTITLED.to_string(),
    }
}

/// Reassemble an RFP title from every upper-half first-page fragment that
/// carries a domain keyword, in document order.
fn rfp_title(first_page: &[&TextFragment]) -> Option<String> {
    let parts: Vec<&str> = first_page
        .iter()
        .filter(|f| {
            f.position.y < 0.5
                && patterns::contains_any(&f.text.to_lowercase(), patterns::TITLE_DOMAIN_KEYWORDS)
        })
        .map(|f| f.text.trim())
        .collect();

    if parts.is_empty() {
        return None;
    }

    Some(canonical_title(&parts.join(" ")))
}

/// Generic title scoring: large font, upper half, non-trivial length; the
/// font size is the score, with a bonus for domain keywords.
fn scored_title(first_page: &[&TextFragment]) -> Option<String> {
    let max_font_size = first_page
        .iter()
        .map(|f| f.font_size)
        .fold(f32::MIN, f32::max);

    let mut best: Option<(&TextFragment, f32)> = None;
    for &fragment in first_page {
        if fragment.font_size < max_font_size * 0.9
            || fragment.position.y >= 0.5
            || fragment.char_count() <= 10
        {
            continue;
        }

        let mut score = fragment.font_size;
        if patterns::contains_any(&fragment.text.to_lowercase(), patterns::TITLE_DOMAIN_KEYWORDS) {
            score += 10.0;
        }

        // Strictly-greater keeps the earliest fragment on ties
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((fragment, score));
        }
    }

    best.map(|(fragment, _)| canonical_title(&fragment.text))
}

/// Collapse whitespace and append the canonical two-space terminator.
fn canonical_title(text: &str) -> String {
    let collapsed = RE_WHITESPACE.replace_all(text.trim(), " ");
    format!("{}  ", collapsed)
}
