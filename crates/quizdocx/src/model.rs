//! Data model for extracted quiz content

use serde::{Deserialize, Serialize};

/// Labels assigned to answer choices, in collection order
pub const CHOICE_LABELS: [&str; 4] = ["A", "B", "C", "D"];

/// A flattened document paragraph
///
/// Produced by the paragraph flattener and consumed once by the extractor.
/// Not part of the output record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    /// Concatenated, trimmed visible text (may be empty)
    pub text: String,

    /// True iff the paragraph carries a `w:numPr` numbering property
    pub is_list: bool,
}

impl Paragraph {
    /// Create a paragraph record
    #[inline]
    #[must_use = "creates paragraph record"]
    pub const fn new(text: String, is_list: bool) -> Self {
        Self { text, is_list }
    }
}

/// One answer choice of a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Positional label, one of "A", "B", "C", "D"
    pub label: String,

    /// Choice text (non-empty)
    pub text: String,
}

/// An extracted quiz question
///
/// `id` is derived from the header's digits and is not guaranteed unique or
/// monotonic across a document with inconsistent headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Number parsed from the header, or the 1-based extraction ordinal
    pub id: u32,

    /// The question prompt
    pub text: String,

    /// Exactly 4 choices, labeled A through D in order
    pub choices: Vec<Choice>,
}

/// Root output record: all questions in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    /// Questions in the order their headers appear in the document
    pub questions: Vec<Question>,
}
