//! Import side of the CSV dialect
//!
//! The whole text is parsed in memory. Delimiter and header detection look at
//! the first line only; every following record is tokenized with the same
//! delimiter.

use super::tokenizer::{ends_in_quotes, tokenize};
use crate::locale;
use crate::model::Concept;

/// Byte-order mark written by our own exporter (and by most spreadsheet tools)
pub const BOM: char = '\u{FEFF}';

/// Supported import delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Semicolon,
}

impl Delimiter {
    /// Get the character for this delimiter
    pub fn char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Semicolon => ';',
        }
    }
}

/// Result of parsing an import file, before merging into a store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRecords {
    /// Records in file order, duplicates included
    pub concepts: Vec<Concept>,
    /// Non-blank records with fewer than two fields
    pub malformed: usize,
    pub delimiter: Delimiter,
    pub has_header: bool,
}

/// Semicolon if the first line has one, otherwise comma
pub fn detect_delimiter(first_line: &str) -> Delimiter {
    if first_line.contains(';') {
        Delimiter::Semicolon
    } else {
        Delimiter::Comma
    }
}

/// Whether the first line looks like our header row
pub fn is_header(first_line: &str) -> bool {
    first_line.to_lowercase().contains(locale::HEADER_KEYWORD)
}

/// Parse an import file into concept records
///
/// Physical lines are split on `\n`. A line that ends inside an open quoted
/// field is joined with the next one, so a quoted multi-line field survives
/// export and re-import. A `\r` before the `\n` is dropped only where a
/// record ends; inside a quoted field it is kept.
pub fn parse_records(text: &str) -> ParsedRecords {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let lines: Vec<&str> = text.split('\n').collect();

    let first_line = lines.first().copied().unwrap_or("");
    let first_line = first_line.strip_suffix('\r').unwrap_or(first_line);
    let delimiter = detect_delimiter(first_line);
    let has_header = is_header(first_line);

    let mut parsed = ParsedRecords {
        delimiter,
        has_header,
        ..ParsedRecords::default()
    };

    let mut index = usize::from(has_header);
    while index < lines.len() {
        let line = lines[index];
        index += 1;
        if line.trim().is_empty() {
            continue;
        }

        let mut record = line.to_string();
        let mut open = ends_in_quotes(line, false);
        while open && index < lines.len() {
            let next = lines[index];
            index += 1;
            record.push('\n');
            record.push_str(next);
            open = ends_in_quotes(next, open);
        }

        let fields = tokenize(record.trim(), delimiter.char());
        match concept_from_fields(&fields) {
            Some(concept) => parsed.concepts.push(concept),
            None => {
                tracing::debug!(line = index, "skipping malformed import line");
                parsed.malformed += 1;
            }
        }
    }

    parsed
}

/// Build a concept from tokenized fields; `None` when there are fewer than two
fn concept_from_fields(fields: &[String]) -> Option<Concept> {
    if fields.len() < 2 {
        return None;
    }

    let field = |i: usize| {
        fields
            .get(i)
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    };

    let name = match field(0) {
        name if name.is_empty() => locale::UNNAMED.to_string(),
        name => name,
    };

    Some(Concept {
        name,
        definition: field(1),
        characteristics: field(2),
        examples: field(3),
        non_examples: field(4),
    })
}
