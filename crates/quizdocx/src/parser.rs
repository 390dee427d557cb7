//! End-to-end quiz parsing pipeline

use crate::archive::read_document_xml;
use crate::error::Result;
use crate::extract::extract_questions;
use crate::model::QuestionSet;
use crate::paragraph::flatten_paragraphs;
use std::path::Path;

/// Parse a .docx quiz document from a path
///
/// Runs the full pipeline: container -> XML -> paragraphs -> questions.
/// Each invocation is independent; there is no shared or cached state, so
/// concurrent calls on different inputs are safe.
///
/// # Errors
///
/// Returns an error if:
/// - The container cannot be read (`QuizDocxError::Io`, `QuizDocxError::Zip`,
///   `QuizDocxError::MissingPart`)
/// - The document XML is malformed or lacks a body (`QuizDocxError::Xml`,
///   `QuizDocxError::InvalidStructure`)
/// - Extraction fails (`QuizDocxError::QuestionTextMissing`,
///   `QuizDocxError::ChoiceCountMismatch`, `QuizDocxError::NoQuestions`)
#[must_use = "parsing produces a result that should be handled"]
pub fn parse_quiz(path: &Path) -> Result<QuestionSet> {
    let xml = read_document_xml(path)?;
    let paragraphs = flatten_paragraphs(&xml)?;
    let questions = extract_questions(&paragraphs)?;

    log::debug!(
        "parsed {} questions from {}",
        questions.len(),
        path.display()
    );

    Ok(QuestionSet { questions })
}
