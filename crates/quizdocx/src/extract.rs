//! Question extractor
//!
//! Turns the flat paragraph sequence into validated question records with a
//! single forward pass. A question block is:
//!
//! 1. a header paragraph matching "Question" (optionally followed by a
//!    number, case-insensitive),
//! 2. the next non-empty, non-list paragraph as the question text,
//! 3. exactly 4 non-empty list paragraphs as the choices, labeled A-D by
//!    position.
//!
//! Any deviation fails the whole run; no partial result is ever returned.

use crate::error::{QuizDocxError, Result};
use crate::model::{Choice, Paragraph, Question, CHOICE_LABELS};
use once_cell::sync::Lazy;
use regex::Regex;

/// Header pattern: "Question" at the start, optional whitespace and digits
static QUESTION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^question\s*\d*").expect("valid header regex"));

/// First contiguous run of decimal digits, for id derivation
static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid digits regex"));

/// Extract all questions from a flattened paragraph sequence
///
/// Paragraphs before the first header are skipped. The cursor strictly
/// advances, so the pass is O(paragraphs) with no backtracking.
///
/// # Errors
///
/// Returns an error if:
/// - A header has no usable question text (`QuizDocxError::QuestionTextMissing`)
/// - A header collects a choice count other than 4 (`QuizDocxError::ChoiceCountMismatch`)
/// - The pass finds no questions at all (`QuizDocxError::NoQuestions`)
pub fn extract_questions(paragraphs: &[Paragraph]) -> Result<Vec<Question>> {
    let mut questions = Vec::new();
    let mut i = 0;

    while i < paragraphs.len() {
        if !QUESTION_HEADER.is_match(&paragraphs[i].text) {
            i += 1;
            continue;
        }

        let header = paragraphs[i].text.clone();
        i += 1;

        // Skip empty paragraphs until the question text; a list paragraph
        // before any text means the block is malformed
        let mut question_text = None;
        while i < paragraphs.len() {
            let para = &paragraphs[i];
            if !para.text.is_empty() && !para.is_list {
                question_text = Some(para.text.clone());
                i += 1;
                break;
            } else if para.is_list {
                break;
            }
            i += 1;
        }

        let Some(question_text) = question_text else {
            return Err(QuizDocxError::QuestionTextMissing { header });
        };

        // Collect up to 4 choices. Empty paragraphs are skipped; any other
        // non-list paragraph ends collection immediately, even short of 4.
        let mut choices: Vec<Choice> = Vec::new();
        while i < paragraphs.len() && choices.len() < 4 {
            let para = &paragraphs[i];
            if para.is_list && !para.text.is_empty() {
                choices.push(Choice {
                    label: CHOICE_LABELS[choices.len()].to_string(),
                    text: para.text.clone(),
                });
                i += 1;
            } else if para.text.is_empty() {
                i += 1;
            } else {
                break;
            }
        }

        if choices.len() != 4 {
            return Err(QuizDocxError::ChoiceCountMismatch {
                count: choices.len(),
                choices: choices.into_iter().map(|c| c.text).collect(),
                header,
            });
        }

        let id = derive_id(&header, questions.len());
        log::debug!("extracted question id={id} ('{header}')");

        questions.push(Question {
            id,
            text: question_text,
            choices,
        });
    }

    if questions.is_empty() {
        return Err(QuizDocxError::NoQuestions);
    }

    Ok(questions)
}

/// Derive a question id from the header's first digit run, falling back to
/// the 1-based position among questions extracted so far
fn derive_id(header: &str, extracted_so_far: usize) -> u32 {
    DIGITS
        .find(header)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or_else(|| (extracted_so_far + 1) as u32)
}
