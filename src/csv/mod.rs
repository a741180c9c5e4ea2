//! CSV import/export for the concept library
//!
//! A small CSV dialect compatible with what spreadsheet tools produce for
//! Hungarian locales:
//!
//! ```text
//! text ──parse_records──▶ ParsedRecords ──ConceptStore::merge──▶ store
//! store ──serialize──▶ "\u{FEFF}Név;Meghatározás;...\n" + rows
//! ```
//!
//! - delimiter: `;` if the first line contains one, otherwise `,`
//! - header: first line containing the word "név"
//! - quoting: RFC 4180 style, `""` inside quotes is a literal quote

mod parser;
mod tokenizer;
mod writer;

pub use parser::{detect_delimiter, is_header, parse_records, Delimiter, ParsedRecords, BOM};
pub use tokenizer::{ends_in_quotes, tokenize};
pub use writer::serialize;
