//! CSV attribute-table codec
//!
//! Only the attribute table is carried: a `Name,Type,Description` header
//! followed by one row per attribute. Every field is quoted, embedded
//! quotes are doubled and line breaks inside a field become spaces, so a
//! template with `n` attributes always encodes to exactly `n + 1` lines.

use super::{check_decoded, ensure_well_formed, TemplateCodec};
use crate::error::{ImportError, SerializeError};
use crate::format::ExportFormat;
use stk_model::{Attribute, TemplateDraft};

/// Header row
pub const CSV_HEADER: &str = "Name,Type,Description";

const COLUMNS: [&str; 3] = ["Name", "Type", "Description"];

/// CSV codec
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvCodec;

impl TemplateCodec for CsvCodec {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn encode(&self, draft: &TemplateDraft) -> Result<String, SerializeError> {
        ensure_well_formed(draft)?;

        let mut lines = Vec::with_capacity(draft.attributes.len() + 1);
        lines.push(CSV_HEADER.to_string());
        for attr in &draft.attributes {
            lines.push(format!(
                "{},{},{}",
                quote(&attr.name),
                quote(&attr.data_type),
                quote(&attr.description)
            ));
        }
        Ok(lines.join("\n"))
    }

    fn decode(&self, text: &str) -> Result<TemplateDraft, ImportError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut rows = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let Some((header_index, header)) = rows.next() else {
            return Err(ImportError::invalid(ExportFormat::Csv, "input is empty"));
        };
        let header = split_record(header)
            .map_err(|msg| ImportError::syntax(ExportFormat::Csv, at_line(header_index, &msg)))?;
        let header_matches = header.len() == COLUMNS.len()
            && header
                .iter()
                .zip(COLUMNS)
                .all(|(got, want)| got.trim().eq_ignore_ascii_case(want));
        if !header_matches {
            return Err(ImportError::invalid(
                ExportFormat::Csv,
                format!("expected header '{CSV_HEADER}', found '{}'", header.join(",")),
            ));
        }

        let mut draft = TemplateDraft::default();
        for (index, line) in rows {
            let fields = split_record(line)
                .map_err(|msg| ImportError::syntax(ExportFormat::Csv, at_line(index, &msg)))?;
            let [name, data_type, description]: [String; 3] =
                fields.try_into().map_err(|fields: Vec<String>| {
                    ImportError::invalid(
                        ExportFormat::Csv,
                        at_line(index, &format!("expected 3 fields, found {}", fields.len())),
                    )
                })?;
            draft
                .attributes
                .push(Attribute::new(name, data_type).with_description(description));
        }

        check_decoded(draft, ExportFormat::Csv)
    }
}

fn at_line(index: usize, message: &str) -> String {
    format!("line {}: {message}", index + 1)
}

fn quote(field: &str) -> String {
    let flat: String = field
        .chars()
        .map(|c| if matches!(c, '\r' | '\n') { ' ' } else { c })
        .collect();
    format!("\"{}\"", flat.replace('"', "\"\""))
}

/// Split one CSV line into fields
///
/// Accepts quoted and bare fields. A quote inside a bare field, text after
/// a closing quote and an unterminated quoted field are all rejected.
fn split_record(line: &str) -> Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut was_quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            ',' => {
                fields.push(std::mem::take(&mut field));
                was_quoted = false;
            }
            '"' if field.is_empty() && !was_quoted => {
                in_quotes = true;
                was_quoted = true;
            }
            '"' => return Err("unexpected quote in unquoted field".to_string()),
            c if was_quoted && !c.is_whitespace() => {
                return Err("unexpected text after closing quote".to_string())
            }
            _ if was_quoted => {}
            c => field.push(c),
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }
    fields.push(field);
    Ok(fields)
}
