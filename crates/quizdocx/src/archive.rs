//! DOCX container access
//!
//! A .docx file is a ZIP archive; the main content lives in
//! `word/document.xml`.

use crate::error::{QuizDocxError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

/// Path of the main document part inside the container
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Read `word/document.xml` from a .docx container
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened (`QuizDocxError::Io`)
/// - The file is not a valid ZIP archive (`QuizDocxError::Zip`)
/// - The archive has no `word/document.xml` (`QuizDocxError::MissingPart`)
pub fn read_document_xml(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;

    let mut part = match archive.by_name(DOCUMENT_PART) {
        Ok(part) => part,
        Err(ZipError::FileNotFound) => {
            return Err(QuizDocxError::MissingPart(DOCUMENT_PART.to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    let mut xml = String::new();
    part.read_to_string(&mut xml)?;
    log::debug!("read {} ({} bytes)", DOCUMENT_PART, xml.len());

    Ok(xml)
}
