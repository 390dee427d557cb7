//! Error types for quiz extraction

use std::io;
use thiserror::Error;

/// Quiz extraction errors
#[derive(Debug, Error)]
pub enum QuizDocxError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a valid ZIP container
    #[error("not a valid .docx file: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A required part is missing from the container
    #[error("document does not contain {0}")]
    MissingPart(String),

    /// XML parsing error
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The document XML lacks the expected structure (e.g. no body)
    #[error("invalid document structure: {0}")]
    InvalidStructure(String),

    /// A question header was found but no usable question text followed it
    #[error("could not find question text after '{header}'")]
    QuestionTextMissing {
        /// Text of the offending "Question N" header paragraph
        header: String,
    },

    /// A question collected an answer choice count other than 4
    #[error(
        "'{header}' has {count} answer choices, expected exactly 4 labeled A, B, C, D. \
         Found choices: {choices:?}"
    )]
    ChoiceCountMismatch {
        /// Text of the offending "Question N" header paragraph
        header: String,
        /// Number of choices actually collected
        count: usize,
        /// Literal text of every choice collected before the failure
        choices: Vec<String>,
    },

    /// The pass completed without extracting a single question
    #[error("no questions found in document")]
    NoQuestions,
}

/// Result type for quiz extraction operations
pub type Result<T> = std::result::Result<T, QuizDocxError>;
