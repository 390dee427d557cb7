//! # quizdocx
//!
//! Quiz question extractor for DOCX (Word) documents.
//!
//! This crate parses Word documents that follow a narrow quiz convention and
//! emits the questions as structured records:
//!
//! ```text
//! Question 1                 <- header paragraph
//! What is the capital of France?   <- question text paragraph
//! - Paris                    <- 4 list paragraphs (w:numPr), labeled A-D
//! - London
//! - Berlin
//! - Madrid
//! ```
//!
//! DOCX files are ZIP archives; the content this crate cares about lives in
//! `word/document.xml`. Parsing is a single linear pass:
//!
//! 1. [`archive`]: read `word/document.xml` out of the container
//! 2. [`paragraph`]: flatten the body into `(text, is_list)` records
//! 3. [`extract`]: scan the paragraph sequence into validated questions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quizdocx::parse_quiz;
//! use std::path::Path;
//!
//! let set = parse_quiz(Path::new("quiz.docx"))?;
//! for question in &set.questions {
//!     println!("{}: {}", question.id, question.text);
//!     for choice in &question.choices {
//!         println!("  {}. {}", choice.label, choice.text);
//!     }
//! }
//! # Ok::<(), quizdocx::QuizDocxError>(())
//! ```
//!
//! ## Validation
//!
//! The format is strict and every violation fails the whole run:
//!
//! - each question must have a non-empty, non-list text paragraph after its
//!   header,
//! - each question must have exactly 4 non-empty list choices,
//! - a successful parse always yields at least one question.
//!
//! Error messages carry the offending header and any collected choice texts
//! so a malformed document can be fixed without re-running under a debugger.
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use quizdocx::{parse_quiz, QuizDocxError};
//! use std::path::Path;
//!
//! match parse_quiz(Path::new("quiz.docx")) {
//!     Ok(set) => println!("Parsed {} questions", set.questions.len()),
//!     Err(QuizDocxError::Zip(e)) => println!("Not a .docx archive: {}", e),
//!     Err(QuizDocxError::ChoiceCountMismatch { header, count, .. }) => {
//!         println!("{} has {} choices, want 4", header, count);
//!     }
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```

pub mod archive;
pub mod error;
pub mod extract;
pub mod model;
pub mod paragraph;
pub mod parser;

pub use error::{QuizDocxError, Result};
pub use extract::extract_questions;
pub use model::{Choice, Paragraph, Question, QuestionSet, CHOICE_LABELS};
pub use paragraph::flatten_paragraphs;
pub use parser::parse_quiz;
