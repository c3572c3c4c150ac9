//! Static keyword vocabularies and pattern tables for the heading heuristics.
//!
//! Every inline keyword list and regex the pipeline consults lives here as a
//! data table consumed by a small matcher function, so the heuristics stay
//! auditable and independently testable. Several tables reconstruct text
//! from specific fragmented layouts seen in the wild (split RFP titles,
//! scattered invitation phrases); those entries are deliberately narrow and
//! should be treated as documented special cases, not general rules.

use lazy_static::lazy_static;
use regex::Regex;

/// Standalone section headings that must never be merged into adjacent prose.
pub const PROTECTED_HEADINGS: &[&str] =
    &["pathway options", "program overview", "course requirements"];

/// Keywords indicating a fill-in form document.
pub const FORM_KEYWORDS: &[&str] = &[
    "application",
    "form",
    "name of",
    "designation",
    "whether",
    "service book",
];

/// Keywords indicating a structured report; their presence vetoes the form
/// classification.
pub const STRUCTURE_KEYWORDS: &[&str] = &[
    "rfp",
    "request for proposal",
    "business plan",
    "summary",
    "background",
    "appendix",
];

/// Keywords indicating an invitation or flyer.
pub const INVITATION_KEYWORDS: &[&str] = &[
    "rsvp",
    "party",
    "invitation",
    "hope to see you",
    "you there",
    "www.",
    ".com",
    "cdr",
];

/// Keywords indicating an RFP-style structured report.
pub const RFP_KEYWORDS: &[&str] = &[
    "rfp",
    "request for proposal",
    "proposal",
    "ontario digital library",
    "business plan",
    "summary",
    "background",
    "appendix",
    "evaluation",
    "awarding of contract",
    "milestones",
    "approach and specific",
];

/// Keywords indicating an academic/educational document.
pub const ACADEMIC_KEYWORDS: &[&str] = &[
    "stem",
    "pathways",
    "mission statement",
    "goals",
    "students",
    "high school",
    "curriculum",
    "pathway options",
    "credits",
    "gpa",
    "graduation",
    "requirements",
    "distinction",
    "regular",
];

/// Structural phrases that mark main section headings in RFP documents.
pub const RFP_STRUCTURAL_PHRASES: &[&str] = &[
    "summary",
    "background",
    "appendix",
    "approach and specific",
    "ontario digital library",
    "business plan",
    "milestones",
    "evaluation",
    "phases",
    "preamble",
    "terms of reference",
    "membership",
    "chair",
    "meetings",
];

/// Core section phrases surfaced in academic documents.
pub const ACADEMIC_CORE_PHRASES: &[&str] =
    &["pathway options", "program overview", "requirements"];

/// Body-prose boilerplate suppressed in academic documents.
pub const ACADEMIC_PROSE_MARKERS: &[&str] =
    &["mission statement", "goals", "to provide", "students with"];

/// Closing phrases of invitations, boosted so the reassembled phrase wins
/// over its constituent fragments.
pub const INVITATION_CLOSINGS: &[&str] = &["hope to see you there", "see you there"];

/// Title-domain keywords used by both the title resolver and its scoring
/// bonus.
pub const TITLE_DOMAIN_KEYWORDS: &[&str] =
    &["rfp", "request", "proposal", "ontario", "digital", "library"];

/// Suffixes of an accumulated run that signal a split RFP title.
pub const RFP_RUN_SUFFIXES: &[&str] = &["request", "rfp:", "rfp: r", "for pr", "proposal"];

/// Prefixes of a following fragment that continue a split RFP title.
pub const RFP_NEXT_PREFIXES: &[&str] = &["quest", "oposal", "for", "to present"];

lazy_static! {
    /// Paired patterns for title continuations: the accumulated run matches
    /// the left pattern and the next fragment matches the right one.
    pub static ref TITLE_CONTINUATIONS: Vec<(Regex, Regex)> = pair_table(&[
        (r"rfp.*request", r"(for|quest)"),
        (r"request.*for", r"(proposal|pr)"),
        (r"for.*pr", r"(oposal|proposal)"),
        (r"proposal.*to", r"present"),
        (r"present.*a", r"proposal"),
        (r"developing.*the", r"business"),
        (r"business.*plan", r"for"),
        (r"ontario.*digital", r"library"),
    ]);

    /// Paired patterns for invitation-phrase continuations ("hope to see
    /// you there" scattered across spans).
    pub static ref INVITATION_CONTINUATIONS: Vec<(Regex, Regex)> = pair_table(&[
        (r"hope.*to", r"see"),
        (r"to.*see", r"(you|u)"),
        (r"see.*you", r"there"),
        (r"you.*t", r"here"),
        (r"y.*ou", r"t"),
        (r"hope", r"(to|t)"),
    ]);

    /// Decorative text dropped at the ingestion boundary: URLs, labels,
    /// address parts, file markers, and venue/activity boilerplate from
    /// flyer layouts.
    pub static ref DECORATIVE_PATTERNS: Vec<Regex> = compile_all(&[
        r"^www\.",
        r"\.com$",
        r"\.org$",
        r"\.net$",
        r"^rsvp:?$",
        r"^\d{4}$",
        r"parkway",
        r"avenue",
        r"street",
        r"road",
        r"address:",
        r"pigeon forge",
        r"dixie stampede",
        r"^\d+\s*(st|nd|rd|th)$",
        r"^v\d+$",
        r"\.cdr$",
        r"\.pdf$",
        r"\.doc$",
        r"tn\s+\d{5}",
        r"\(\s*near",
        r"topjump",
        r"closed.*toed.*shoes",
        r"required.*for.*climbing",
        r"guardians.*not.*attending",
        r"child.*can.*attend",
    ]);

    /// Lone page number (filtered at ingestion when at most 3 digits).
    pub static ref BARE_NUMBER: Regex = Regex::new(r"^\d+$").unwrap();

    /// Structural keyword opening a heading (scored +3).
    pub static ref STRUCTURAL_PREFIX: Regex =
        Regex::new(r"^(summary|background|appendix|phase|timeline)").unwrap();

    /// Numbered list marker such as "1." at the start of a line.
    pub static ref NUMBERED_PREFIX: Regex = Regex::new(r"^\d+\.").unwrap();

    /// Lettered list marker such as "a)" at the start of a line.
    pub static ref LETTERED_PREFIX: Regex = Regex::new(r"^[a-z]\)").unwrap();

    /// Roman-numeral phase heading such as "phase iv".
    pub static ref ROMAN_PHASE: Regex = Regex::new(r"^phase [ivx]+").unwrap();

    /// Leading number followed by a capitalized word, e.g. "3 Evaluation".
    pub static ref NUMBER_THEN_CAPITAL: Regex = Regex::new(r"^\d+\s+[A-Z]").unwrap();

    /// Section prefixes mapped to H2 by the hierarchy classifier.
    pub static ref H2_SECTION_PREFIX: Regex =
        Regex::new(r"^(summary|background|introduction|conclusion)").unwrap();

    /// Appendix prefix mapped to H2 by the hierarchy classifier.
    pub static ref APPENDIX_PREFIX: Regex = Regex::new(r"^appendix").unwrap();
}

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("static pattern must compile"))
        .collect()
}

fn pair_table(pairs: &[(&str, &str)]) -> Vec<(Regex, Regex)> {
    pairs
        .iter()
        .map(|(a, b)| {
            (
                Regex::new(a).expect("static pattern must compile"),
                Regex::new(b).expect("static pattern must compile"),
            )
        })
        .collect()
}

/// Check whether `text` contains any keyword from `vocabulary`.
///
/// The caller is expected to pass lower-cased text; the tables are all
/// lower-case.
pub fn contains_any(text: &str, vocabulary: &[&str]) -> bool {
    vocabulary.iter().any(|kw| text.contains(kw))
}

/// Count how many keywords from `vocabulary` occur in `text`.
pub fn count_hits(text: &str, vocabulary: &[&str]) -> usize {
    vocabulary.iter().filter(|kw| text.contains(*kw)).count()
}

/// Check a (current, next) text pair against a table of paired patterns.
pub fn matches_pair_table(current: &str, next: &str, table: &[(Regex, Regex)]) -> bool {
    table
        .iter()
        .any(|(cur_re, next_re)| cur_re.is_match(current) && next_re.is_match(next))
}

/// Check whether lower-cased text matches any decorative pattern.
pub fn is_decorative(text_lower: &str) -> bool {
    DECORATIVE_PATTERNS.iter().any(|re| re.is_match(text_lower))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_hits() {
        let text = "request for proposal to develop a business plan";
        assert_eq!(count_hits(text, STRUCTURE_KEYWORDS), 2);
        assert_eq!(count_hits(text, FORM_KEYWORDS), 0);
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any("please rsvp by friday", INVITATION_KEYWORDS));
        assert!(!contains_any("quarterly budget review", INVITATION_KEYWORDS));
    }

    #[test]
    fn test_title_continuation_pairs() {
        assert!(matches_pair_table(
            "rfp: request",
            "for proposal",
            &TITLE_CONTINUATIONS
        ));
        assert!(matches_pair_table(
            "ontario digital",
            "library",
            &TITLE_CONTINUATIONS
        ));
        assert!(!matches_pair_table(
            "chapter one",
            "continued",
            &TITLE_CONTINUATIONS
        ));
    }

    #[test]
    fn test_invitation_continuation_pairs() {
        assert!(matches_pair_table("you", "t", &INVITATION_CONTINUATIONS));
        assert!(matches_pair_table(
            "you t",
            "here",
            &INVITATION_CONTINUATIONS
        ));
        assert!(!matches_pair_table(
            "budget",
            "review",
            &INVITATION_CONTINUATIONS
        ));
    }

    #[test]
    fn test_decorative_patterns() {
        assert!(is_decorative("www.example.com"));
        assert!(is_decorative("rsvp:"));
        assert!(is_decorative("2024"));
        assert!(is_decorative("flyer_v2.cdr"));
        assert!(!is_decorative("pathway options"));
    }

    #[test]
    fn test_marker_regexes() {
        assert!(NUMBERED_PREFIX.is_match("1. Introduction"));
        assert!(LETTERED_PREFIX.is_match("a) timeline:"));
        assert!(ROMAN_PHASE.is_match("phase iv rollout"));
        assert!(NUMBER_THEN_CAPITAL.is_match("3 Evaluation"));
        assert!(!NUMBER_THEN_CAPITAL.is_match("3. evaluation"));
    }

    #[test]
    fn test_section_prefixes() {
        assert!(H2_SECTION_PREFIX.is_match("summary of findings"));
        assert!(APPENDIX_PREFIX.is_match("appendix b: evaluation"));
        assert!(STRUCTURAL_PREFIX.is_match("timeline:"));
    }
}
