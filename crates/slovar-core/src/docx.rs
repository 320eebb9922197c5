//! Paragraph text extraction from Office Open XML documents.
//!
//! Only the main document part is read. Paragraphs are the `w:p` children of
//! `w:body`, in document order. Anything wrapped at body level (tables,
//! content controls, custom XML) is skipped, and so are text boxes.
//!
//! Paragraph text comes from the runs directly under the paragraph or under a
//! `w:hyperlink`. Runs inside revision marks (`w:ins`, `w:del`), fields and
//! smart tags do not contribute. Within a run, `w:t` gives text, `w:tab` a tab
//! and line breaks a newline. Page and column breaks add nothing.

use std::io::{BufRead, BufReader, Read, Seek};

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::LoadError;

pub const DOCUMENT_PART: &str = "word/document.xml";

/// Read body paragraphs from a `.docx` container
pub fn read_paragraphs<R: Read + Seek>(reader: R) -> Result<Vec<String>, LoadError> {
    let mut archive = ZipArchive::new(reader)?;

    let part = match archive.by_name(DOCUMENT_PART) {
        Ok(part) => part,
        Err(ZipError::FileNotFound) => {
            return Err(LoadError::MissingPart(DOCUMENT_PART.to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    paragraphs_from_xml(BufReader::new(part))
}

/// Read body paragraphs from a WordprocessingML document part
pub fn paragraphs_from_xml<R: BufRead>(source: R) -> Result<Vec<String>, LoadError> {
    let mut reader = Reader::from_reader(source);
    let mut buf = Vec::new();

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    // Names of the open elements
    let mut stack: Vec<Vec<u8>> = Vec::new();
    // Stack positions of the body paragraph and of the run being read
    let mut paragraph: Option<usize> = None;
    let mut run: Option<usize> = None;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let name = e.name().as_ref().to_vec();
                let depth = stack.len();

                match name.as_slice() {
                    b"w:p" if paragraph.is_none() && is_body(&stack) => {
                        paragraph = Some(depth);
                        current.clear();
                    }
                    b"w:r" if run.is_none() => {
                        if let Some(p) = paragraph {
                            if is_run_parent(&stack[p + 1..]) {
                                run = Some(depth);
                            }
                        }
                    }
                    b"w:t" if run.is_some_and(|r| r + 1 == depth) => in_text = true,
                    _ => {}
                }

                stack.push(name);
            }
            Event::Empty(e) => {
                let in_run = run.is_some_and(|r| r + 1 == stack.len());

                match e.name().as_ref() {
                    b"w:p" if paragraph.is_none() && is_body(&stack) => {
                        paragraphs.push(String::new());
                    }
                    b"w:tab" | b"w:ptab" if in_run => current.push('\t'),
                    b"w:cr" if in_run => current.push('\n'),
                    b"w:br" if in_run && is_line_break(&e)? => current.push('\n'),
                    b"w:noBreakHyphen" if in_run => current.push('-'),
                    _ => {}
                }
            }
            Event::End(_) => {
                let closed = stack.pop();
                let depth = stack.len();

                if closed.as_deref() == Some(b"w:t".as_slice()) {
                    in_text = false;
                }
                if run == Some(depth) {
                    run = None;
                }
                if paragraph == Some(depth) {
                    paragraph = None;
                    paragraphs.push(std::mem::take(&mut current));
                }
            }
            Event::Text(e) if in_text => {
                current.push_str(&e.unescape()?);
            }
            Event::Eof => break,
            _ => {}
        }

        buf.clear();
    }

    tracing::debug!("Read {} paragraphs from document part", paragraphs.len());
    Ok(paragraphs)
}

fn is_body(stack: &[Vec<u8>]) -> bool {
    stack.last().is_some_and(|name| name.as_slice() == b"w:body")
}

/// Elements between a paragraph and one of its text runs
fn is_run_parent(path: &[Vec<u8>]) -> bool {
    match path {
        [] => true,
        [name] => name.as_slice() == b"w:hyperlink",
        _ => false,
    }
}

/// `w:br` without a type, or with `textWrapping`, is a line break
fn is_line_break(e: &BytesStart) -> Result<bool, LoadError> {
    let kind = e
        .try_get_attribute("w:type")
        .map_err(quick_xml::Error::from)?;
    Ok(kind.is_none_or(|attr| attr.value.as_ref() == b"textWrapping"))
}
