//! Fragment recombination.
//!
//! Renderers frequently split one logical phrase into many spans: font
//! changes inside creative layouts, scattered invitation text, or titles
//! broken mid-word ("RFP: R" + "equest"). This module merges such adjacent
//! fragments back into coherent runs so the downstream scorer sees complete
//! phrases instead of shards.
//!
//! The scan is greedy and anchored: fragments are sorted by
//! `(page, y, x)`, then each unconsumed fragment opens a run and absorbs
//! following fragments while the combination predicate holds. Style
//! attributes of the run are inherited from the anchor fragment; only the
//! bounding box grows.

use std::collections::HashSet;

use crate::fragment::TextFragment;
use crate::patterns;
use crate::utils::safe_float_cmp;

/// Closing punctuation that suppresses the space before a merged fragment.
const CLOSING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')'];

/// Numeric tolerances of the combination predicate.
///
/// The defaults are deliberately permissive: creative/flyer layouts vary
/// font size and position within one logical phrase.
#[derive(Debug, Clone)]
pub struct CombinerConfig {
    /// Maximum font-size difference between run anchor and absorbed
    /// fragment, in points.
    pub font_size_tolerance: f32,

    /// Maximum normalized vertical offset from the anchor.
    pub max_vertical_offset: f32,

    /// Maximum normalized leftward jump from the anchor; forward progress
    /// is expected but small left movements are tolerated.
    pub max_leftward_offset: f32,

    /// A run longer than this no longer absorbs fragments under the
    /// general continuation rule.
    pub max_run_chars: usize,

    /// Fragments longer than this are not absorbed under the general
    /// continuation rule.
    pub max_next_chars: usize,
}

impl Default for CombinerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CombinerConfig {
    /// Create a configuration with the default tolerances.
    pub fn new() -> Self {
        Self {
            font_size_tolerance: 4.0,
            max_vertical_offset: 0.15,
            max_leftward_offset: 0.3,
            max_run_chars: 50,
            max_next_chars: 20,
        }
    }

    /// Set the font-size tolerance in points.
    pub fn with_font_size_tolerance(mut self, tolerance: f32) -> Self {
        self.font_size_tolerance = tolerance;
        self
    }

    /// Set the maximum normalized vertical offset.
    pub fn with_max_vertical_offset(mut self, offset: f32) -> Self {
        self.max_vertical_offset = offset;
        self
    }

    /// Set the maximum normalized leftward offset.
    pub fn with_max_leftward_offset(mut self, offset: f32) -> Self {
        self.max_leftward_offset = offset;
        self
    }
}

/// Merges adjacent raw fragments into coherent text runs.
#[derive(Debug, Clone, Default)]
pub struct FragmentCombiner {
    config: CombinerConfig,
}

impl FragmentCombiner {
    /// Create a combiner with default tolerances.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a combiner with explicit tolerances.
    pub fn with_config(config: CombinerConfig) -> Self {
        Self { config }
    }

    /// Combine fragmented text into complete runs.
    ///
    /// Returns the combined fragments in document order `(page, y, x)`.
    /// Runs whose final text is not meaningful (too short, purely numeric,
    /// or character repetition) are dropped silently.
    pub fn combine(&self, mut fragments: Vec<TextFragment>) -> Vec<TextFragment> {
        if fragments.is_empty() {
            return Vec::new();
        }

        fragments.sort_by(|a, b| {
            a.page
                .cmp(&b.page)
                .then(safe_float_cmp(a.position.y, b.position.y))
                .then(safe_float_cmp(a.position.x, b.position.x))
        });

        let mut combined = Vec::new();
        let mut i = 0;

        while i < fragments.len() {
            let anchor = fragments[i].clone();
            let mut text = anchor.text.clone();
            let mut bbox = anchor.bounding_box;

            let mut j = i + 1;
            while j < fragments.len() {
                let next = &fragments[j];
                if !self.should_combine(&anchor, next, &text) {
                    break;
                }

                if needs_space_between(&text, &next.text) {
                    text.push(' ');
                }
                text.push_str(&next.text);
                bbox.expand_right_bottom(&next.bounding_box);

                j += 1;
            }

            if is_meaningful(&text) {
                combined.push(TextFragment {
                    text: text.trim().to_string(),
                    page: anchor.page,
                    font_size: anchor.font_size,
                    is_bold: anchor.is_bold,
                    position: anchor.position,
                    bounding_box: bbox,
                });
            }

            i = j.max(i + 1);
        }

        log::debug!(
            "Combined {} raw fragments into {} runs",
            fragments.len(),
            combined.len()
        );
        combined
    }

    /// The combination predicate: should `next` be absorbed into the run
    /// opened at `anchor` whose accumulated text is `accumulated`?
    fn should_combine(
        &self,
        anchor: &TextFragment,
        next: &TextFragment,
        accumulated: &str,
    ) -> bool {
        // Must be on the same page
        if anchor.page != next.page {
            return false;
        }

        // Similar font properties, lenient for creative layouts
        if (next.font_size - anchor.font_size).abs() > self.config.font_size_tolerance {
            return false;
        }
        if anchor.is_bold != next.is_bold {
            return false;
        }

        // Reasonably close vertically, tolerant of scattered text
        if (next.position.y - anchor.position.y).abs() > self.config.max_vertical_offset {
            return false;
        }

        // Forward progress expected, small left jumps allowed
        if next.position.x - anchor.position.x < -self.config.max_leftward_offset {
            return false;
        }

        let current_lower = accumulated.to_lowercase();
        let current_text = current_lower.trim();
        let next_lower = next.text.to_lowercase();
        let next_text = next_lower.trim();

        // Never merge a protected standalone heading into adjacent prose
        if patterns::PROTECTED_HEADINGS
            .iter()
            .any(|h| current_text.contains(h) || next_text.contains(h))
        {
            return false;
        }

        // Scattered invitation phrases combine aggressively
        if looks_like_invitation_continuation(current_text, next_text) {
            return true;
        }

        // Split RFP titles combine on known suffix/prefix cues
        if patterns::RFP_RUN_SUFFIXES
            .iter()
            .any(|s| current_text.ends_with(s))
            || patterns::RFP_NEXT_PREFIXES
                .iter()
                .any(|p| next_text.starts_with(p))
            || patterns::matches_pair_table(current_text, next_text, &patterns::TITLE_CONTINUATIONS)
        {
            return true;
        }

        // General continuation rule for short fragments
        accumulated.chars().count() < self.config.max_run_chars
            && next_text.chars().count() < self.config.max_next_chars
            && !accumulated.ends_with('.')
            && !next_text.starts_with("http")
    }
}

/// Check whether the accumulated run and the next fragment look like pieces
/// of a scattered invitation phrase.
fn looks_like_invitation_continuation(current: &str, next: &str) -> bool {
    if patterns::matches_pair_table(current, next, &patterns::INVITATION_CONTINUATIONS) {
        return true;
    }

    // Single-character continuations are common in creative layouts
    current.chars().count() >= 3 && next.chars().count() <= 3
}

/// Decide whether a space belongs between two merged pieces.
///
/// No space when either side already carries boundary whitespace or the
/// next text opens with closing punctuation. A small table of exact string
/// boundaries overrides the default for split words like "T" + "HERE".
fn needs_space_between(current: &str, next: &str) -> bool {
    if current.is_empty() || next.is_empty() {
        return false;
    }

    if current.ends_with(' ') || next.starts_with(' ') {
        return false;
    }

    if next.starts_with(CLOSING_PUNCTUATION) {
        return false;
    }

    let current_lower = current.to_lowercase();
    let next_lower = next.to_lowercase();

    // "Y" + "ou" reconstitutes "You" without a space
    if current_lower.ends_with('y') && next_lower.starts_with("ou") {
        return false;
    }
    // "You" + "T..." are separate words
    if current_lower.ends_with("you") && next_lower.starts_with('t') {
        return true;
    }
    // "T" + "HERE" reconstitutes "THERE" without a space
    if current_lower.ends_with('t') && next_lower.starts_with("here") {
        return false;
    }

    true
}

/// Check whether a combined run is meaningful enough to keep.
fn is_meaningful(text: &str) -> bool {
    let trimmed = text.trim();
    let char_count = trimmed.chars().count();

    if char_count < 2 {
        return false;
    }

    // Pure numbers of 1-2 digits are page-number debris
    if char_count <= 2 && trimmed.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    // Character repetition like "----" or "= = ="
    let distinct: HashSet<char> = trimmed.chars().filter(|c| *c != ' ').collect();
    distinct.len() > 2
}
