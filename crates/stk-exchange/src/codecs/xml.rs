//! XML template codec
//!
//! Document shape:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <Template name="PumpA" category="analog" description="">
//!   <Attributes>
//!     <Attribute name="Flow" type="AI_REAL" description=""/>
//!   </Attributes>
//! </Template>
//! ```
//!
//! Writing is plain string building with attribute escaping; reading uses
//! quick-xml and accepts exactly this element structure.

use super::{check_decoded, ensure_well_formed, TemplateCodec};
use crate::error::{ImportError, SerializeError};
use crate::format::ExportFormat;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use stk_model::{Attribute, TemplateDraft};

const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// XML codec
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlCodec;

impl TemplateCodec for XmlCodec {
    fn format(&self) -> ExportFormat {
        ExportFormat::Xml
    }

    fn encode(&self, draft: &TemplateDraft) -> Result<String, SerializeError> {
        ensure_well_formed(draft)?;

        let mut out = String::with_capacity(128 + draft.attributes.len() * 96);
        out.push_str(DECLARATION);
        out.push('\n');
        out.push_str(&format!(
            "<Template name=\"{}\" category=\"{}\" description=\"{}\">\n",
            escape_attr("template name", &draft.name)?,
            escape_attr("template category", &draft.category)?,
            escape_attr("template description", &draft.description)?,
        ));

        if draft.attributes.is_empty() {
            out.push_str("  <Attributes/>\n");
        } else {
            out.push_str("  <Attributes>\n");
            for attr in &draft.attributes {
                out.push_str(&format!(
                    "    <Attribute name=\"{}\" type=\"{}\" description=\"{}\"/>\n",
                    escape_attr("attribute name", &attr.name)?,
                    escape_attr(&format!("attribute '{}' type", attr.name), &attr.data_type)?,
                    escape_attr(
                        &format!("attribute '{}' description", attr.name),
                        &attr.description
                    )?,
                ));
            }
            out.push_str("  </Attributes>\n");
        }

        out.push_str("</Template>\n");
        Ok(out)
    }

    fn decode(&self, text: &str) -> Result<TemplateDraft, ImportError> {
        let mut reader = Reader::from_str(text);
        reader.trim_text(true);

        let mut place = Place::Document;
        let mut draft = TemplateDraft::default();

        loop {
            let event = reader.read_event().map_err(|e| {
                syntax(format!("{e} at byte {}", reader.buffer_position()))
            })?;
            match event {
                Event::Eof => break,
                Event::Start(e) => place = open(place, &e, false, &mut draft)?,
                Event::Empty(e) => place = open(place, &e, true, &mut draft)?,
                Event::End(_) => place = place.close(),
                Event::Text(_) | Event::CData(_) => {
                    return Err(invalid(format!(
                        "unexpected text inside {}",
                        place.describe()
                    )))
                }
                Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
            }
        }

        match place {
            Place::Done => check_decoded(draft, ExportFormat::Xml),
            Place::Document => Err(invalid("no <Template> element")),
            other => Err(invalid(format!(
                "document ended inside {}",
                other.describe()
            ))),
        }
    }
}

/// Where the reader currently is in the element structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Place {
    Document,
    Template,
    Attributes,
    Attribute,
    Done,
}

impl Place {
    fn close(self) -> Self {
        // end-tag names are checked by quick-xml, so each End pops one level
        match self {
            Self::Attribute => Self::Attributes,
            Self::Attributes => Self::Template,
            Self::Template | Self::Document | Self::Done => Self::Done,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Document => "the document prolog",
            Self::Template => "<Template>",
            Self::Attributes => "<Attributes>",
            Self::Attribute => "<Attribute>",
            Self::Done => "the document epilog",
        }
    }
}

fn open(
    place: Place,
    element: &BytesStart<'_>,
    empty: bool,
    draft: &mut TemplateDraft,
) -> Result<Place, ImportError> {
    let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
    match (place, name.as_str()) {
        (Place::Document, "Template") => {
            let mut attrs = read_attrs(element)?;
            draft.name = take_required(&mut attrs, "Template", "name")?;
            draft.category = attrs.remove("category").unwrap_or_default();
            draft.description = attrs.remove("description").unwrap_or_default();
            Ok(if empty { Place::Done } else { Place::Template })
        }
        (Place::Template, "Attributes") => {
            Ok(if empty { Place::Template } else { Place::Attributes })
        }
        (Place::Attributes, "Attribute") => {
            let mut attrs = read_attrs(element)?;
            let attr_name = take_required(&mut attrs, "Attribute", "name")?;
            let data_type = take_required(&mut attrs, "Attribute", "type")?;
            let description = attrs.remove("description").unwrap_or_default();
            draft
                .attributes
                .push(Attribute::new(attr_name, data_type).with_description(description));
            Ok(if empty { Place::Attributes } else { Place::Attribute })
        }
        _ => Err(invalid(format!(
            "unexpected element <{name}> inside {}",
            place.describe()
        ))),
    }
}

fn read_attrs(element: &BytesStart<'_>) -> Result<HashMap<String, String>, ImportError> {
    let mut map = HashMap::new();
    for attr in element.attributes() {
        let attr = attr.map_err(|e| syntax(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| syntax(e.to_string()))?
            .into_owned();
        map.insert(key, value);
    }
    Ok(map)
}

fn take_required(
    attrs: &mut HashMap<String, String>,
    element: &str,
    key: &str,
) -> Result<String, ImportError> {
    attrs
        .remove(key)
        .ok_or_else(|| invalid(format!("<{element}> is missing the '{key}' attribute")))
}

fn syntax(message: impl Into<String>) -> ImportError {
    ImportError::syntax(ExportFormat::Xml, message)
}

fn invalid(message: impl Into<String>) -> ImportError {
    ImportError::invalid(ExportFormat::Xml, message)
}

/// Escape text for a double-quoted attribute value
///
/// Tabs and line breaks become character references so attribute-value
/// normalisation cannot turn them into spaces on the way back in.
fn escape_attr(field: &str, value: &str) -> Result<String, SerializeError> {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            c if is_xml_char(c) => out.push(c),
            c => {
                return Err(SerializeError::InvalidXmlChar {
                    field: field.to_string(),
                    code: u32::from(c),
                })
            }
        }
    }
    Ok(out)
}

/// XML 1.0 `Char` production (surrogates cannot occur in a `char`)
fn is_xml_char(c: char) -> bool {
    matches!(c, '\u{9}' | '\u{A}' | '\u{D}' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}')
        || u32::from(c) >= 0x1_0000
}
