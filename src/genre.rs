//! Document genre classification.
//!
//! One genre tag is chosen per document and threaded through the title
//! resolver and candidate scorer, parameterizing every downstream
//! heuristic. Checks run against keyword vocabularies over the combined
//! fragment text: forms and invitations are judged from the first page,
//! RFP-style reports and academic documents from the whole document.
//!
//! Evaluation order is form, invitation, RFP, academic, generic; the first
//! match wins. This makes the suppression behaviors mutually exclusive and
//! guarantees the RFP and academic scoring paths never both apply.

use crate::fragment::TextFragment;
use crate::patterns;

/// The document-type tag that parameterizes scoring and title resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentGenre {
    /// Fill-in form; the outline is forced empty.
    Form,
    /// Invitation or flyer; the title is forced empty.
    Invitation,
    /// RFP-style structured report; nearly all structural lines surface.
    Rfp,
    /// Academic/educational document; only top-level headings surface.
    Academic,
    /// Anything else; balanced scoring profile.
    Generic,
}

impl DocumentGenre {
    /// Classify a document from its combined fragments.
    pub fn classify(fragments: &[TextFragment]) -> Self {
        let first_page: Vec<&TextFragment> =
            fragments.iter().filter(|f| f.page == 1).collect();
        let first_page_text = joined_lowercase(first_page.iter().copied());
        let all_text = joined_lowercase(fragments.iter());

        let genre = if is_form(&first_page_text) {
            Self::Form
        } else if is_invitation(&first_page, &first_page_text) {
            Self::Invitation
        } else if is_rfp(&all_text) {
            Self::Rfp
        } else if is_academic(&all_text) {
            Self::Academic
        } else {
            Self::Generic
        };

        log::debug!("Classified document as {}", genre.name());
        genre
    }

    /// Minimum heading score for this genre.
    ///
    /// Deliberately asymmetric: RFP documents surface nearly all structural
    /// lines, academic documents only a few top-level sections.
    pub fn min_heading_score(&self) -> f32 {
        match self {
            Self::Rfp => 0.0,
            Self::Academic => 5.0,
            _ => 3.0,
        }
    }

    /// Whether this genre forces an empty outline.
    pub fn suppresses_outline(&self) -> bool {
        matches!(self, Self::Form)
    }

    /// Whether this genre forces an empty title.
    pub fn blanks_title(&self) -> bool {
        matches!(self, Self::Invitation)
    }

    /// Genre name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::Invitation => "invitation",
            Self::Rfp => "rfp",
            Self::Academic => "academic",
            Self::Generic => "generic",
        }
    }
}

fn joined_lowercase<'a>(fragments: impl Iterator<Item = &'a TextFragment>) -> String {
    fragments
        .map(|f| f.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Form documents carry fill-in vocabulary but no report structure.
fn is_form(first_page_text: &str) -> bool {
    let form_hits = patterns::count_hits(first_page_text, patterns::FORM_KEYWORDS);
    let structure_hits = patterns::count_hits(first_page_text, patterns::STRUCTURE_KEYWORDS);
    form_hits >= 3 && structure_hits < 2
}

/// Invitations show invitation vocabulary, a ".cdr" source marker, or a
/// creative layout of many tiny fragments.
fn is_invitation(first_page: &[&TextFragment], first_page_text: &str) -> bool {
    if patterns::count_hits(first_page_text, patterns::INVITATION_KEYWORDS) >= 2 {
        return true;
    }

    if first_page_text.contains(".cdr") {
        return true;
    }

    let short = first_page.iter().filter(|f| f.char_count() <= 8).count();
    first_page.len() > 3 && short as f32 >= first_page.len() as f32 * 0.7
}

/// RFP-style reports show the domain vocabulary or the "rfp" marker plus
/// contract language.
fn is_rfp(all_text: &str) -> bool {
    if patterns::count_hits(all_text, patterns::RFP_KEYWORDS) >= 4 {
        return true;
    }

    all_text.contains("rfp")
        && patterns::contains_any(all_text, &["proposal", "contract", "evaluation"])
}

fn is_academic(all_text: &str) -> bool {
    patterns::count_hits(all_text, patterns::ACADEMIC_KEYWORDS) >= 4
}
