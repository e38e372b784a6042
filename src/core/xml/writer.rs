//! Deterministic XML rendering for compiled element trees.
//!
//! Indentation is emitted explicitly as whitespace text events rather than
//! through the writer's own indenter, so that elements carrying text always
//! render inline (`<tag>text</tag>`) and childless, textless elements always
//! render self-closed (`<tag/>`).

use super::XmlElement;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Failure while rendering an element tree.
#[derive(Debug, thiserror::Error)]
pub enum XmlWriteError {
    #[error("failed to write xml event: {0}")]
    Event(String),
    #[error("rendered xml is not valid utf-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterOptions {
    /// Spaces per nesting level; zero renders everything on one line.
    pub indent: usize,
    /// Emit `<?xml version="1.0" encoding="utf-8"?>` before the root.
    pub xml_declaration: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            xml_declaration: true,
        }
    }
}

/// Render `root` as a complete document.
pub fn to_document(root: &XmlElement, options: WriterOptions) -> Result<String, XmlWriteError> {
    let mut writer = Writer::new(Vec::new());
    if options.xml_declaration {
        emit(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)),
        )?;
        emit(&mut writer, Event::Text(BytesText::from_escaped("\n")))?;
    }
    write_element(&mut writer, root, 0, options.indent)?;
    emit(&mut writer, Event::Text(BytesText::from_escaped("\n")))?;
    Ok(String::from_utf8(writer.into_inner())?)
}

/// Render `element` without a declaration or trailing newline.
pub fn to_fragment(element: &XmlElement, indent: usize) -> Result<String, XmlWriteError> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, element, 0, indent)?;
    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    element: &XmlElement,
    depth: usize,
    indent: usize,
) -> Result<(), XmlWriteError> {
    let mut start = BytesStart::new(element.tag());
    for (key, value) in element.attributes() {
        start.push_attribute((key, value));
    }

    if element.is_empty() {
        return emit(writer, Event::Empty(start));
    }

    emit(writer, Event::Start(start))?;
    if element.has_text() {
        emit(
            writer,
            Event::Text(BytesText::from_escaped(partial_escape(element.text()))),
        )?;
    }
    if !element.children().is_empty() {
        for child in element.children() {
            newline(writer, depth + 1, indent)?;
            write_element(writer, child, depth + 1, indent)?;
        }
        newline(writer, depth, indent)?;
    }
    emit(writer, Event::End(BytesEnd::new(element.tag())))
}

fn newline(writer: &mut Writer<Vec<u8>>, depth: usize, indent: usize) -> Result<(), XmlWriteError> {
    if indent == 0 {
        return Ok(());
    }
    let padding = format!("\n{}", " ".repeat(depth * indent));
    emit(writer, Event::Text(BytesText::from_escaped(padding)))
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), XmlWriteError> {
    writer
        .write_event(event)
        .map_err(|err| XmlWriteError::Event(err.to_string()))
}
