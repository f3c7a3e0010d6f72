//! Text extraction — turns PDF or DOCX bytes into one newline-delimited blob.
//!
//! Internally every path returns `Result<String, ExtractError>` so callers and tests can
//! tell a valid empty document from a decode failure. The public `extract_text` collapses
//! failure to an empty string and logs the reason.

use std::io::{Cursor, Read};
use std::panic::{self, AssertUnwindSafe};

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use tracing::{debug, warn};
use zip::ZipArchive;

use crate::extraction::document::{DocumentKind, RawDocument};

const DOCX_BODY_PART: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    #[error("PDF extraction panicked (malformed document)")]
    Panicked,
}

/// Extracts text, keeping the failure reason.
pub fn try_extract_text(doc: &RawDocument) -> Result<String, ExtractError> {
    match doc.kind {
        DocumentKind::Pdf => extract_pdf(&doc.bytes),
        DocumentKind::Docx => extract_docx(&doc.bytes),
    }
}

/// Extracts text, returning `""` on any decode failure.
pub fn extract_text(doc: &RawDocument) -> String {
    match try_extract_text(doc) {
        Ok(text) => {
            debug!(
                kind = doc.kind.as_str(),
                chars = text.len(),
                "Extracted document text"
            );
            text
        }
        Err(e) => {
            warn!(kind = doc.kind.as_str(), bytes = doc.bytes.len(), "{e}");
            String::new()
        }
    }
}

/// Page text in page order, each page followed by a newline.
fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    // pdf_extract panics on some malformed inputs instead of returning an error.
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }));

    match result {
        Ok(Ok(pages)) => {
            let mut text = String::new();
            for page in pages {
                text.push_str(&page);
                text.push('\n');
            }
            Ok(text)
        }
        Ok(Err(e)) => Err(ExtractError::Pdf(e.to_string())),
        Err(_) => Err(ExtractError::Panicked),
    }
}

/// Body-level paragraph text in document order, each paragraph followed by a newline.
/// Paragraphs inside tables and text boxes are skipped.
fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY_PART)
        .map_err(|e| ExtractError::Docx(format!("{DOCX_BODY_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(e.to_string()))?;

    paragraphs_from_document_xml(&xml)
}

fn paragraphs_from_document_xml(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);

    let mut text = String::new();
    let mut paragraph = String::new();
    // Tables and text boxes carry their own w:p elements; none of their text is body text.
    let mut table_depth = 0usize;
    let mut textbox_depth = 0usize;
    let mut in_paragraph = false;
    let mut in_run_text = false;

    loop {
        let nested = table_depth > 0 || textbox_depth > 0;
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"tbl" => table_depth += 1,
                b"txbxContent" => textbox_depth += 1,
                _ if nested => {}
                b"p" => {
                    in_paragraph = true;
                    paragraph.clear();
                }
                b"t" => in_run_text = in_paragraph,
                other => push_run_break(other, in_paragraph, &mut paragraph),
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                _ if nested => {}
                // A self-closing <w:p/> is an empty paragraph.
                b"p" => text.push('\n'),
                other => push_run_break(other, in_paragraph, &mut paragraph),
            },
            Ok(Event::Text(e)) if in_run_text && !nested => {
                let chunk = e
                    .unescape()
                    .map_err(|err| ExtractError::Docx(err.to_string()))?;
                paragraph.push_str(&chunk);
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"tbl" => table_depth = table_depth.saturating_sub(1),
                b"txbxContent" => textbox_depth = textbox_depth.saturating_sub(1),
                _ if nested => {}
                b"p" if in_paragraph => {
                    text.push_str(&paragraph);
                    text.push('\n');
                    in_paragraph = false;
                }
                b"t" => in_run_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractError::Docx(format!(
                    "XML error at position {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    Ok(text)
}

fn push_run_break(local_name: &[u8], in_paragraph: bool, paragraph: &mut String) {
    if !in_paragraph {
        return;
    }
    match local_name {
        b"tab" => paragraph.push('\t'),
        b"br" | b"cr" => paragraph.push('\n'),
        _ => {}
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    /// Builds a minimal DOCX container whose body holds one `w:p` per entry.
    pub(crate) fn docx_with_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| {
                if p.is_empty() {
                    "<w:p/>".to_string()
                } else {
                    format!(r#"<w:p><w:r><w:t xml:space="preserve">{p}</w:t></w:r></w:p>"#)
                }
            })
            .collect();
        docx_with_body(&body)
    }

    pub(crate) fn docx_with_body(body: &str) -> Vec<u8> {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
        );
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCX_BODY_PART, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    /// Builds a PDF with one page per entry, each line drawn in Helvetica on its own baseline.
    pub(crate) fn pdf_with_pages(pages: &[&[&str]]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for lines in pages {
            let mut operations = vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
            ];
            for (i, line) in lines.iter().enumerate() {
                if i > 0 {
                    operations.push(Operation::new("Td", vec![0.into(), (-24).into()]));
                }
                operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            }
            operations.push(Operation::new("ET", vec![]));

            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_docx_paragraphs_joined_in_order() {
        let bytes = docx_with_paragraphs(&["Jane Doe", "Data Scientist"]);
        let doc = RawDocument::new(bytes, DocumentKind::Docx);
        assert_eq!(try_extract_text(&doc).unwrap(), "Jane Doe\nData Scientist\n");
    }

    #[test]
    fn test_docx_runs_are_concatenated_and_entities_unescaped() {
        let body = r#"<w:p><w:r><w:t>Research </w:t></w:r><w:r><w:t>&amp; Development</w:t></w:r></w:p>"#;
        let doc = RawDocument::new(docx_with_body(body), DocumentKind::Docx);
        assert_eq!(try_extract_text(&doc).unwrap(), "Research & Development\n");
    }

    #[test]
    fn test_docx_empty_paragraph_keeps_line_break() {
        let bytes = docx_with_paragraphs(&["Top", "", "Bottom"]);
        let doc = RawDocument::new(bytes, DocumentKind::Docx);
        assert_eq!(try_extract_text(&doc).unwrap(), "Top\n\nBottom\n");
    }

    #[test]
    fn test_docx_tab_inside_run() {
        let body = r#"<w:p><w:r><w:t>Skills</w:t><w:tab/><w:t>Rust</w:t></w:r></w:p>"#;
        let doc = RawDocument::new(docx_with_body(body), DocumentKind::Docx);
        assert_eq!(try_extract_text(&doc).unwrap(), "Skills\tRust\n");
    }

    #[test]
    fn test_docx_table_text_is_skipped() {
        let body = concat!(
            r#"<w:p><w:r><w:t>Before</w:t></w:r></w:p>"#,
            r#"<w:tbl><w:tr><w:tc><w:p><w:r><w:t>Cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>"#,
            r#"<w:p><w:r><w:t>After</w:t></w:r></w:p>"#,
        );
        let doc = RawDocument::new(docx_with_body(body), DocumentKind::Docx);
        assert_eq!(try_extract_text(&doc).unwrap(), "Before\nAfter\n");
    }

    #[test]
    fn test_docx_text_box_keeps_enclosing_paragraph() {
        let body = concat!(
            r#"<w:p><w:r><w:t xml:space="preserve">Jane Doe</w:t></w:r>"#,
            r#"<w:r><w:drawing><wp:inline><w:txbxContent>"#,
            r#"<w:p><w:r><w:t>Boxed</w:t></w:r></w:p><w:p/>"#,
            r#"</w:txbxContent></wp:inline></w:drawing></w:r>"#,
            r#"<w:r><w:t xml:space="preserve"> Senior Analyst</w:t></w:r></w:p>"#,
            r#"<w:p><w:r><w:t>After</w:t></w:r></w:p>"#,
        );
        let doc = RawDocument::new(docx_with_body(body), DocumentKind::Docx);
        assert_eq!(
            try_extract_text(&doc).unwrap(),
            "Jane Doe Senior Analyst\nAfter\n"
        );
    }

    #[test]
    fn test_docx_alternate_content_text_box_is_skipped_in_both_branches() {
        let body = concat!(
            r#"<w:p><w:r><w:t>Header</w:t></w:r><w:r><mc:AlternateContent>"#,
            r#"<mc:Choice><w:drawing><w:txbxContent><w:p><w:r><w:t>Boxed</w:t></w:r></w:p></w:txbxContent></w:drawing></mc:Choice>"#,
            r#"<mc:Fallback><w:pict><v:textbox><w:txbxContent><w:p><w:r><w:t>Boxed</w:t></w:r></w:p></w:txbxContent></v:textbox></w:pict></mc:Fallback>"#,
            r#"</mc:AlternateContent></w:r></w:p>"#,
        );
        let doc = RawDocument::new(docx_with_body(body), DocumentKind::Docx);
        assert_eq!(try_extract_text(&doc).unwrap(), "Header\n");
    }

    #[test]
    fn test_pdf_pages_in_order_each_followed_by_newline() {
        let bytes = pdf_with_pages(&[&["First page text"], &["Second page text"]]);
        let doc = RawDocument::new(bytes, DocumentKind::Pdf);
        let text = try_extract_text(&doc).unwrap();

        let first = text.find("First page text").expect("first page missing");
        let second = text.find("Second page text").expect("second page missing");
        assert!(first < second);
        assert!(text[first..second].contains('\n'));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_docx_not_a_zip_is_an_error() {
        let doc = RawDocument::new(b"definitely not a zip".to_vec(), DocumentKind::Docx);
        assert!(matches!(try_extract_text(&doc), Err(ExtractError::Docx(_))));
        assert_eq!(extract_text(&doc), "");
    }

    #[test]
    fn test_docx_missing_body_part_is_an_error() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let doc = RawDocument::new(bytes, DocumentKind::Docx);
        assert!(matches!(try_extract_text(&doc), Err(ExtractError::Docx(_))));
    }

    #[test]
    fn test_garbled_pdf_collapses_to_empty_text() {
        let doc = RawDocument::new(b"%PDF-1.4 garbage \x00\x01\x02".to_vec(), DocumentKind::Pdf);
        assert!(try_extract_text(&doc).is_err());
        assert_eq!(extract_text(&doc), "");
    }
}
