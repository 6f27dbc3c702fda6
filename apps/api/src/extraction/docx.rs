use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts paragraph text from a DOCX container, one line per paragraph.
pub fn extract(bytes: &[u8]) -> Result<String, String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| e.to_string())?;
    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| format!("{DOCUMENT_PART}: {e}"))?
        .read_to_string(&mut xml)
        .map_err(|e| e.to_string())?;

    paragraphs_text(&xml)
}

fn paragraphs_text(xml: &str) -> Result<String, String> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => out.push('\t'),
                b"w:br" | b"w:cr" => out.push('\n'),
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text => {
                out.push_str(&t.unescape().map_err(|e| e.to_string())?);
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(out)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Write;

    use super::*;

    /// Builds a minimal DOCX archive around `body`.
    pub(crate) fn build_docx(body: &str) -> Vec<u8> {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">{body}</w:document>"#
        );
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCUMENT_PART, zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraphs_are_newline_separated() {
        let bytes = build_docx(
            "<w:body>\
               <w:p><w:r><w:t>Senior Engineer</w:t></w:r></w:p>\
               <w:p><w:r><w:t>Rust</w:t></w:r><w:r><w:tab/><w:t>Go &amp; C</w:t></w:r></w:p>\
               <w:p><w:r><w:t>Line one</w:t><w:br/><w:t>Line two</w:t></w:r></w:p>\
             </w:body>",
        );
        let text = extract(&bytes).unwrap();
        assert_eq!(text, "Senior Engineer\nRust\tGo & C\nLine one\nLine two\n");
    }

    #[test]
    fn test_text_outside_runs_is_ignored() {
        let text = paragraphs_text(
            r#"<w:document><w:body><w:p><w:instrText>PAGE</w:instrText><w:r><w:t>Kept</w:t></w:r></w:p></w:body></w:document>"#,
        )
        .unwrap();
        assert_eq!(text, "Kept\n");
    }

    #[test]
    fn test_not_a_zip_is_an_error() {
        assert!(extract(b"plain text").is_err());
    }

    #[test]
    fn test_zip_without_document_part_is_an_error() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("other.xml", zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(b"<x/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = extract(&bytes).unwrap_err();
        assert!(err.contains(DOCUMENT_PART));
    }
}
