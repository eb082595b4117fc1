//! SVG parsing from XML.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::ast::*;
use crate::error::RnsvgError;

/// Parse an SVG string into its root element.
///
/// Comments, processing instructions, the XML declaration and DOCTYPE are
/// discarded. Whitespace-only text is dropped until the element has a child,
/// so the gaps between siblings survive; other text and CDATA become text
/// nodes.
pub fn parse_svg(svg: &str) -> Result<Element, RnsvgError> {
    let mut reader = Reader::from_str(svg);

    loop {
        match reader.read_event()? {
            Event::Start(start) => return parse_element(&mut reader, &start),
            Event::Empty(start) => return parse_element_start(&start),
            Event::Eof => break,
            // Skip declarations, comments and whitespace before root
            _ => {}
        }
    }

    Err(RnsvgError::InvalidSvg("No root element found".into()))
}

fn parse_element(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<Element, RnsvgError> {
    let mut element = parse_element_start(start)?;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                element
                    .children
                    .push(Node::Element(parse_element(reader, &start)?));
            }
            Event::Empty(start) => {
                element
                    .children
                    .push(Node::Element(parse_element_start(&start)?));
            }
            Event::End(_) => {
                break;
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                if !text.trim().is_empty() || !element.children.is_empty() {
                    element.children.push(Node::Text(text.into_owned()));
                }
            }
            Event::CData(cdata) => {
                element
                    .children
                    .push(Node::Text(String::from_utf8_lossy(&cdata).into_owned()));
            }
            Event::Eof => {
                return Err(RnsvgError::InvalidSvg("Unexpected end of file".into()));
            }
            _ => {}
        }
    }

    Ok(element)
}

fn parse_element_start(start: &BytesStart) -> Result<Element, RnsvgError> {
    let name_bytes = start.name();
    let name = std::str::from_utf8(name_bytes.as_ref())?;

    let mut element = Element::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| RnsvgError::InvalidSvg(format!("Invalid attribute: {}", e)))?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr.unescape_value()?;
        element
            .attributes
            .insert(key.to_string(), AttrValue::Text(value.into_owned()));
    }

    Ok(element)
}
