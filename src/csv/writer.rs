//! Export side of the CSV dialect
//!
//! Output is always semicolon-delimited, starts with a UTF-8 byte-order mark
//! for spreadsheet tools, and carries the fixed localized header.

use super::parser::BOM;
use crate::error::ExportError;
use crate::locale;
use crate::model::Concept;

/// Serialize concepts in the given order
///
/// Fields containing the delimiter, a quote or a line break are wrapped in
/// double quotes with inner quotes doubled; everything else is written as is.
pub fn serialize(concepts: &[Concept]) -> Result<String, ExportError> {
    let mut out = Vec::new();
    let mut bom = [0u8; 4];
    out.extend_from_slice(BOM.encode_utf8(&mut bom).as_bytes());

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .double_quote(true)
        .from_writer(out);

    writer.write_record(locale::COLUMN_LABELS)?;
    for concept in concepts {
        writer.write_record(concept.fields())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
