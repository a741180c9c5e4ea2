//! Quoted-field tokenizer for a single delimited line
//!
//! The scanner is lenient: a quote that is never closed is not an
//! error, whatever was accumulated is flushed as the last field. A quote in
//! the middle of an unquoted field also switches to quoted mode, so `a"b;c"`
//! is a single field `ab;c`.

const QUOTE: char = '"';

/// Split one line into fields
///
/// Outside quotes the delimiter ends a field and a quote opens a quoted
/// section. Inside quotes `""` yields a literal quote, a lone quote closes the
/// section, and every other character (delimiter and newline included) is
/// kept verbatim. End of input always flushes the current field, so the result
/// is never empty.
pub fn tokenize(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == QUOTE {
                if chars.peek() == Some(&QUOTE) {
                    current.push(QUOTE);
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else if ch == QUOTE {
            in_quotes = true;
        } else if ch == delimiter {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }

    fields.push(current);
    fields
}

/// Run the quote state machine over `chunk` and report whether it ends inside
/// a quoted section
///
/// `in_quotes` is the state at the start of the chunk. Used to join physical
/// lines that belong to one quoted multi-line field.
pub fn ends_in_quotes(chunk: &str, mut in_quotes: bool) -> bool {
    let mut chars = chunk.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != QUOTE {
            continue;
        }
        if !in_quotes {
            in_quotes = true;
        } else if chars.peek() == Some(&QUOTE) {
            chars.next();
        } else {
            in_quotes = false;
        }
    }
    in_quotes
}
