//! Shared fixture builder: writes minimal but valid .docx archives

use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#;

const RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

/// One source paragraph of a fixture document
pub struct FixturePara {
    pub text: String,
    pub is_list: bool,
}

impl FixturePara {
    pub fn text(s: &str) -> Self {
        Self {
            text: s.to_string(),
            is_list: false,
        }
    }

    pub fn list(s: &str) -> Self {
        Self {
            text: s.to_string(),
            is_list: true,
        }
    }
}

fn paragraph_xml(para: &FixturePara) -> String {
    let num_pr = if para.is_list {
        r#"<w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr>"#
    } else {
        ""
    };
    format!(
        "<w:p><w:pPr>{num_pr}</w:pPr><w:r><w:t>{}</w:t></w:r></w:p>",
        para.text
    )
}

/// Write a .docx with the given body paragraphs to `path`
pub fn write_docx(path: &Path, paragraphs: &[FixturePara]) {
    let body: String = paragraphs.iter().map(paragraph_xml).collect();
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>{body}</w:body>
</w:document>"#
    );

    let file = File::create(path).expect("create fixture file");
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    writer
        .start_file("[Content_Types].xml", options)
        .expect("start content types");
    writer
        .write_all(CONTENT_TYPES_XML.as_bytes())
        .expect("write content types");

    writer
        .start_file("_rels/.rels", options)
        .expect("start rels");
    writer.write_all(RELS_XML.as_bytes()).expect("write rels");

    writer
        .start_file("word/document.xml", options)
        .expect("start document");
    writer
        .write_all(document.as_bytes())
        .expect("write document");

    writer.finish().expect("finish fixture archive");
}

/// Write a well-formed quiz fixture: (header, text, 4 choices) per question
pub fn write_quiz_docx(path: &Path, questions: &[(&str, &str, [&str; 4])]) {
    let mut paragraphs = Vec::new();
    for (header, text, choices) in questions {
        paragraphs.push(FixturePara::text(header));
        paragraphs.push(FixturePara::text(text));
        for choice in choices {
            paragraphs.push(FixturePara::list(choice));
        }
    }
    write_docx(path, &paragraphs);
}
