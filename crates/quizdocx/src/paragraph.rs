//! Paragraph flattener
//!
//! Reduces `word/document.xml` to an ordered list of [`Paragraph`] records.
//! Only paragraphs that are direct children of `w:body` are kept, matching
//! how Word lays out a flat quiz document. Text is the concatenation of all
//! `w:t` runs in a paragraph, trimmed; the list flag comes strictly from the
//! presence of `w:pPr/w:numPr`, never from text heuristics.

use crate::error::{QuizDocxError, Result};
use crate::model::Paragraph;
use quick_xml::events::Event;
use quick_xml::Reader;

/// Flatten document XML into an ordered paragraph sequence
///
/// # Errors
///
/// Returns an error if:
/// - The XML is malformed (`QuizDocxError::Xml`)
/// - No `w:body` element is present (`QuizDocxError::InvalidStructure`)
pub fn flatten_paragraphs(xml: &str) -> Result<Vec<Paragraph>> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut buf = Vec::new();

    let mut depth = 0usize;
    let mut body_depth = None;
    let mut saw_body = false;

    // Per-paragraph state; `para_depth` is Some while inside a tracked w:p
    let mut para_depth = None;
    let mut text = String::new();
    let mut is_list = false;
    let mut in_ppr = false;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                depth += 1;
                match e.name().as_ref() {
                    b"w:body" if body_depth.is_none() => {
                        body_depth = Some(depth);
                        saw_body = true;
                    }
                    // Only body-level paragraphs; skips table cell content
                    b"w:p" if body_depth.is_some_and(|d| depth == d + 1) => {
                        para_depth = Some(depth);
                        text.clear();
                        is_list = false;
                    }
                    b"w:pPr" if para_depth.is_some_and(|d| depth == d + 1) => {
                        in_ppr = true;
                    }
                    b"w:numPr" if in_ppr => is_list = true,
                    b"w:t" if para_depth.is_some() => in_text = true,
                    _ => {}
                }
            }
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" if body_depth.is_some_and(|d| depth == d) => {
                    paragraphs.push(Paragraph::new(String::new(), false));
                }
                b"w:numPr" if in_ppr => is_list = true,
                _ => {}
            },
            Event::Text(e) => {
                if in_text {
                    text.push_str(&e.unescape().unwrap_or_default());
                }
            }
            Event::End(e) => {
                match e.name().as_ref() {
                    b"w:p" if para_depth == Some(depth) => {
                        paragraphs.push(Paragraph::new(text.trim().to_string(), is_list));
                        para_depth = None;
                    }
                    b"w:pPr" => in_ppr = false,
                    b"w:t" => in_text = false,
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !saw_body {
        return Err(QuizDocxError::InvalidStructure(
            "could not find document body".to_string(),
        ));
    }

    log::debug!("flattened {} paragraphs", paragraphs.len());
    Ok(paragraphs)
}
